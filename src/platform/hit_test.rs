//! Pointer hit testing against the drawn soldier disks

use glam::DVec2;

use crate::sim::BoardLayout;

/// Extra pixels around a disk that still count as a hit
pub const HIT_TOLERANCE: f64 = 2.0;

/// Maps a pointer position on the canvas to a soldier index
pub trait HitResolver {
    /// `None` when the pointer is not over any soldier
    fn resolve(&self, point: DVec2) -> Option<usize>;
}

/// Hit tester over a round's disks; the closest disk containing the point wins
#[derive(Debug, Clone)]
pub struct BoardHitTester {
    disks: Vec<(DVec2, f64)>,
    tolerance: f64,
}

impl BoardHitTester {
    pub fn new(layout: &BoardLayout) -> Self {
        Self::with_tolerance(layout, HIT_TOLERANCE)
    }

    pub fn with_tolerance(layout: &BoardLayout, tolerance: f64) -> Self {
        let disks = layout
            .iter()
            .map(|(_, disk)| (disk.center(), disk.radius()))
            .collect();
        Self {
            disks,
            tolerance: tolerance.max(0.0),
        }
    }
}

impl HitResolver for BoardHitTester {
    fn resolve(&self, point: DVec2) -> Option<usize> {
        self.disks
            .iter()
            .enumerate()
            .map(|(index, (center, radius))| (index, center.distance(point), *radius))
            .filter(|(_, distance, radius)| *distance <= radius + self.tolerance)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(index, _, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn layout(n: usize) -> BoardLayout {
        BoardLayout::new(&Settings::default(), n).unwrap()
    }

    #[test]
    fn test_hit_on_disk_center() {
        let layout = layout(8);
        let tester = BoardHitTester::new(&layout);
        for (index, disk) in layout.iter() {
            assert_eq!(tester.resolve(disk.center()), Some(index));
        }
    }

    #[test]
    fn test_miss_in_circle_middle() {
        let tester = BoardHitTester::new(&layout(8));
        assert_eq!(tester.resolve(DVec2::new(250.0, 250.0)), None);
        assert_eq!(tester.resolve(DVec2::new(-10.0, -10.0)), None);
    }

    #[test]
    fn test_edge_hit_within_tolerance() {
        // Soldier 0 disk spans (450..460, 250..260), center (455, 255), radius 5
        let tester = BoardHitTester::new(&layout(4));
        assert_eq!(tester.resolve(DVec2::new(461.5, 255.0)), Some(0));
        assert_eq!(tester.resolve(DVec2::new(463.0, 255.0)), None);

        let strict = BoardHitTester::with_tolerance(&layout(4), 0.0);
        assert_eq!(strict.resolve(DVec2::new(461.5, 255.0)), None);
    }

    #[test]
    fn test_odd_disk_size_hits_true_center() {
        let settings = Settings {
            disk_size: 11,
            ..Settings::default()
        };
        let layout = BoardLayout::new(&settings, 4).unwrap();
        let tester = BoardHitTester::with_tolerance(&layout, 0.0);
        // Soldier 0 spans (450..461, 250..261): center (455.5, 255.5), radius 5.5
        let center = layout.get(0).unwrap().center();
        assert_eq!(center, DVec2::new(455.5, 255.5));
        assert_eq!(tester.resolve(center + DVec2::new(5.5, 0.0)), Some(0));
        assert_eq!(tester.resolve(center + DVec2::new(5.6, 0.0)), None);
    }

    #[test]
    fn test_overlapping_disks_pick_closest() {
        // 100 soldiers on a 200px circle sit ~12.5px apart; with a generous
        // tolerance neighbours overlap and the nearer center must win
        let layout = layout(100);
        let tester = BoardHitTester::with_tolerance(&layout, 10.0);
        let c = layout.get(10).unwrap().center();
        assert_eq!(tester.resolve(c + DVec2::new(0.5, 0.5)), Some(10));
    }
}
