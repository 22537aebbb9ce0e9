//! Hit testing for image-hotspot questions.
//!
//! Clicks and regions are both in percent-of-image units, so a hotspot
//! keeps its meaning at any rendered image size. The presentation layer
//! converts pixel offsets with `Point::from_pixels`.

use crate::content::{Hotspot, Region};

/// A click position in percent of the image width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a pixel offset within a rendered image to percent.
    ///
    /// Returns `None` for a zero-sized image.
    #[must_use]
    pub fn from_pixels(offset_x: f64, offset_y: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            x: offset_x / width * 100.0,
            y: offset_y / height * 100.0,
        })
    }
}

impl Region {
    /// Check whether a point falls inside this region (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        match *self {
            Region::Circle { cx, cy, radius } => {
                let dx = point.x - cx;
                let dy = point.y - cy;
                (dx * dx + dy * dy).sqrt() <= radius
            }
            Region::Rect { x, y, width, height } => {
                point.x >= x && point.x <= x + width && point.y >= y && point.y <= y + height
            }
        }
    }
}

/// The first hotspot containing the point, in declaration order.
#[must_use]
pub fn locate(hotspots: &[Hotspot], point: Point) -> Option<&Hotspot> {
    hotspots
        .iter()
        .find(|h| h.region().is_some_and(|r| r.contains(point)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains() {
        let circle = Region::Circle { cx: 50.0, cy: 50.0, radius: 10.0 };

        assert!(circle.contains(Point::new(50.0, 50.0)));
        assert!(circle.contains(Point::new(60.0, 50.0))); // on the edge
        assert!(circle.contains(Point::new(56.0, 58.0))); // distance 10
        assert!(!circle.contains(Point::new(58.0, 58.0)));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Region::Rect { x: 10.0, y: 20.0, width: 30.0, height: 10.0 };

        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(40.0, 30.0)));
        assert!(rect.contains(Point::new(25.0, 25.0)));
        assert!(!rect.contains(Point::new(9.9, 25.0)));
        assert!(!rect.contains(Point::new(25.0, 30.1)));
    }

    #[test]
    fn test_locate_first_match_wins() {
        let hotspots = vec![
            Hotspot::circle(50.0, 50.0, 10.0, ["Heart"]),
            Hotspot::rect(40.0, 40.0, 20.0, 20.0, ["Lung"]),
        ];

        let hit = locate(&hotspots, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(hit.answers, vec!["Heart".to_string()]);

        let corner = locate(&hotspots, Point::new(41.0, 41.0)).unwrap();
        assert_eq!(corner.answers, vec!["Lung".to_string()]);

        assert!(locate(&hotspots, Point::new(5.0, 5.0)).is_none());
    }

    #[test]
    fn test_shapeless_hotspot_is_skipped() {
        let mut shapeless = Hotspot::circle(50.0, 50.0, 0.0, ["Nothing"]);
        shapeless.width = None;
        let hotspots = vec![shapeless];

        assert!(locate(&hotspots, Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_from_pixels() {
        let p = Point::from_pixels(150.0, 50.0, 300.0, 200.0).unwrap();
        assert_eq!(p, Point::new(50.0, 25.0));
        assert!(Point::from_pixels(1.0, 1.0, 0.0, 10.0).is_none());
    }
}
