//! Kill trajectory for the win animation
//!
//! Turns the kill order into arrows between disk centers, in order, so a
//! renderer only has to draw and pace them.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::josephus::Kill;
use super::layout::DiskBounds;
use super::state::Round;

/// One arrow from killer to casualty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kill: Kill,
    pub from: DVec2,
    pub to: DVec2,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// Arrows in kill order, followed by the survivor highlight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub segments: Vec<Segment>,
    pub survivor: usize,
    pub survivor_disk: DiskBounds,
}

impl Trajectory {
    /// Build the trajectory for a round's kill order on its layout
    pub fn for_round(round: &Round) -> Option<Self> {
        let layout = round.layout();
        let elimination = round.elimination();

        let segments = elimination
            .kills
            .iter()
            .map(|&kill| {
                Some(Segment {
                    kill,
                    from: layout.get(kill.killer)?.center(),
                    to: layout.get(kill.casualty)?.center(),
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            segments,
            survivor: elimination.survivor,
            survivor_disk: *layout.get(elimination.survivor)?,
        })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
