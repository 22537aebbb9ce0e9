//! Quest content as it appears in the unit JSON files.
//!
//! A `Unit` holds `Quest`s, a quest holds `Group`s (one minion each),
//! a group holds `Question`s. Field names follow the file format;
//! the Rust names are the short forms.

use serde::{Deserialize, Serialize};

/// One content file: a chapter of quests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "unit_id")]
    pub id: String,

    #[serde(default)]
    pub quests: Vec<Quest>,
}

/// A quest on the notice board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    #[serde(rename = "quest_id")]
    pub id: String,

    #[serde(rename = "quest_title")]
    pub title: String,

    #[serde(rename = "quest_description", default)]
    pub description: String,

    /// Images a minion may wear; one is picked per group.
    #[serde(default)]
    pub minion_images: Vec<String>,

    #[serde(default)]
    pub boss_image: String,

    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Quest {
    /// Number of groups (minions) before the boss.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Get a group by index.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    /// Every question of every group, in group order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.groups.iter().flat_map(|g| g.questions.iter())
    }

    /// Total number of questions across all groups.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

/// How a group is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// The whole group at once as term/definition pairs.
    Matching,
    /// One question per turn. Unrecognized group types fall back here.
    #[default]
    #[serde(other)]
    Standard,
}

/// One minion's worth of questions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "type", default)]
    pub kind: GroupKind,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Group {
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn is_matching(&self) -> bool {
        self.kind == GroupKind::Matching
    }
}

/// How a single question is answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "written")]
    Written,
    #[serde(rename = "true/false")]
    TrueFalse,
    #[serde(rename = "image-hotspot")]
    ImageHotspot,
    /// Anything else; cannot be rendered.
    #[serde(other)]
    Unknown,
}

impl QuestionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple-choice",
            QuestionKind::Written => "written",
            QuestionKind::TrueFalse => "true/false",
            QuestionKind::ImageHotspot => "image-hotspot",
            QuestionKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuestionDoc")]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,

    /// Explicit kind. `None` defers to the player's chosen difficulty.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<QuestionKind>,

    /// Accepted answers, compared after normalization.
    #[serde(default)]
    pub answers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hotspots: Vec<Hotspot>,
}

/// A question as written in content files, which may carry its kind
/// under `type`, `question_type`, or both.
#[derive(Deserialize)]
struct QuestionDoc {
    question: String,
    #[serde(rename = "type", default)]
    kind: Option<QuestionKind>,
    #[serde(default)]
    question_type: Option<QuestionKind>,
    #[serde(default)]
    answers: Vec<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    hotspots: Vec<Hotspot>,
}

impl From<QuestionDoc> for Question {
    fn from(doc: QuestionDoc) -> Self {
        Self {
            prompt: doc.question,
            kind: doc.question_type.or(doc.kind),
            answers: doc.answers,
            image_url: doc.image_url,
            hotspots: doc.hotspots,
        }
    }
}

impl Question {
    /// A question with the given prompt and accepted answers.
    pub fn new<S: Into<String>>(prompt: impl Into<String>, answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            prompt: prompt.into(),
            kind: None,
            answers: answers.into_iter().map(Into::into).collect(),
            image_url: None,
            hotspots: Vec::new(),
        }
    }

    /// Set an explicit kind (builder pattern).
    #[must_use]
    pub fn with_kind(mut self, kind: QuestionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Attach an image and its clickable regions (builder pattern).
    #[must_use]
    pub fn with_hotspots(mut self, image_url: impl Into<String>, hotspots: Vec<Hotspot>) -> Self {
        self.kind = Some(QuestionKind::ImageHotspot);
        self.image_url = Some(image_url.into());
        self.hotspots = hotspots;
        self
    }

    /// Answers this question contributes to the distractor pool.
    ///
    /// Questions without text answers contribute their hotspot answers.
    pub fn answer_texts(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        if self.answers.is_empty() {
            Box::new(self.hotspots.iter().flat_map(|h| h.answers.iter().map(String::as_str)))
        } else {
            Box::new(self.answers.iter().map(String::as_str))
        }
    }
}

/// A clickable region on a question image.
///
/// Coordinates are percentages of the rendered image size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(default)]
    pub answers: Vec<String>,
}

/// The geometric shape of a hotspot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region {
    Circle { cx: f64, cy: f64, radius: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

impl Hotspot {
    /// A circular hotspot.
    pub fn circle<S: Into<String>>(x: f64, y: f64, radius: f64, answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            x,
            y,
            radius: Some(radius),
            width: None,
            height: None,
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// A rectangular hotspot anchored at its top-left corner.
    pub fn rect<S: Into<String>>(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        answers: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            x,
            y,
            radius: None,
            width: Some(width),
            height: Some(height),
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// The region this hotspot covers.
    ///
    /// A positive radius makes a circle; otherwise positive width and
    /// height make a rectangle; anything else covers nothing.
    #[must_use]
    pub fn region(&self) -> Option<Region> {
        match (self.radius, self.width, self.height) {
            (Some(radius), _, _) if radius > 0.0 => Some(Region::Circle {
                cx: self.x,
                cy: self.y,
                radius,
            }),
            (_, Some(width), Some(height)) if width > 0.0 && height > 0.0 => Some(Region::Rect {
                x: self.x,
                y: self.y,
                width,
                height,
            }),
            _ => None,
        }
    }
}
