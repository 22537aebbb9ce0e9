//! Answer options for multiple-choice and true/false questions.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::answers::normalize;
use crate::content::{Quest, Question};
use crate::core::GameRng;

/// Options shown for one question. Four fit inline.
pub type Options = SmallVec<[String; 4]>;

/// Every distinct normalized answer in the quest, in first-seen order.
#[must_use]
pub fn answer_pool(quest: &Quest) -> Vec<String> {
    let mut seen = FxHashSet::default();
    quest
        .questions()
        .flat_map(Question::answer_texts)
        .map(normalize)
        .filter(|a| seen.insert(a.clone()))
        .collect()
}

/// Correct answers plus distractors up to `target` options, shuffled.
///
/// Distractors are drawn without replacement from `pool`, skipping
/// anything already offered. With too few distinct answers the list is
/// shorter than `target`.
#[must_use]
pub fn multiple_choice_options(
    question: &Question,
    pool: &[String],
    target: usize,
    rng: &mut GameRng,
) -> Options {
    let mut offered: FxHashSet<String> = FxHashSet::default();
    let mut options = Options::new();

    for answer in &question.answers {
        if offered.insert(normalize(answer)) {
            options.push(answer.clone());
        }
    }

    let mut candidates: Vec<&String> = pool.iter().filter(|a| !offered.contains(*a)).collect();
    rng.shuffle(&mut candidates);

    for candidate in candidates {
        if options.len() >= target {
            break;
        }
        if offered.insert(candidate.clone()) {
            options.push(candidate.clone());
        }
    }

    rng.shuffle(&mut options);
    options
}

/// The two fixed options of a true/false question.
#[must_use]
pub fn true_false_options() -> Options {
    SmallVec::from_iter(["True".to_string(), "False".to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Group, GroupKind, Hotspot};

    fn quest(questions: Vec<Question>) -> Quest {
        Quest {
            id: "q".into(),
            title: "Quest".into(),
            description: String::new(),
            minion_images: vec![],
            boss_image: String::new(),
            groups: vec![Group { kind: GroupKind::Standard, questions }],
        }
    }

    #[test]
    fn test_answer_pool_dedups_and_normalizes() {
        let quest = quest(vec![
            Question::new("a", ["Heart", " Lung"]),
            Question::new("b", ["heart", "Liver"]),
            Question::new("c", Vec::<String>::new())
                .with_hotspots("img", vec![Hotspot::circle(1.0, 1.0, 1.0, ["Spleen"])]),
        ]);

        assert_eq!(answer_pool(&quest), vec!["heart", "lung", "liver", "spleen"]);
    }

    #[test]
    fn test_options_contain_correct_and_fill_to_target() {
        let pool: Vec<String> = ["heart", "lung", "liver", "kidney", "spleen", "colon"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let question = Question::new("Pumps blood?", ["Heart"]);
        let mut rng = GameRng::new(5);

        for _ in 0..20 {
            let options = multiple_choice_options(&question, &pool, 4, &mut rng);
            assert_eq!(options.len(), 4);
            assert!(options.contains(&"Heart".to_string()));

            let distinct: FxHashSet<_> = options.iter().map(|o| normalize(o)).collect();
            assert_eq!(distinct.len(), 4);
        }
    }

    #[test]
    fn test_options_terminate_with_small_pool() {
        let pool = vec!["heart".to_string(), "lung".to_string()];
        let question = Question::new("Pumps blood?", ["Heart"]);
        let mut rng = GameRng::new(5);

        let options = multiple_choice_options(&question, &pool, 4, &mut rng);
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_options_keep_every_correct_answer() {
        let pool: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let question = Question::new("Pick", ["A", "B", "C", "D", "E"]);
        let mut rng = GameRng::new(1);

        let options = multiple_choice_options(&question, &pool, 4, &mut rng);
        assert_eq!(options.len(), 5);
    }

    #[test]
    fn test_true_false_options() {
        let options = true_false_options();
        assert_eq!(options.as_slice(), ["True".to_string(), "False".to_string()]);
    }
}
