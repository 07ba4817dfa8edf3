//! Circle layout: soldiers evenly spaced around a circumference
//!
//! Soldier `i` sits at angle `2π·i/n`. Coordinates are truncated toward zero
//! (not rounded) when projected onto the integer pixel grid.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::error::{JosephusError, Result};
use crate::polar_to_cartesian;
use crate::settings::Settings;

/// Integer points on the circumference of a circle of `radius`, one per soldier
///
/// Points come out in increasing angle order starting at angle 0, which
/// defines soldier indexing: soldier `i` is the `i`-th point.
pub fn points_in_circumference(radius: f64, n: usize) -> Result<Vec<IVec2>> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(JosephusError::InvalidRadius { radius });
    }
    if n < 1 {
        return Err(JosephusError::InvalidCount { count: n, min: 1 });
    }

    let slice = std::f64::consts::TAU / n as f64;
    Ok((0..n)
        .map(|x| {
            let p = polar_to_cartesian(radius, slice * x as f64);
            // `as` truncates toward zero
            IVec2::new(p.x as i32, p.y as i32)
        })
        .collect())
}

/// Bounding box of one soldier disk on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskBounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl DiskBounds {
    /// Box of side `size` with its top-left corner at `corner`
    pub fn at(corner: IVec2, size: i32) -> Self {
        Self {
            x0: corner.x,
            y0: corner.y,
            x1: corner.x + size,
            y1: corner.y + size,
        }
    }

    /// Center of the disk; arrows, hit testing and the board table all use it
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.x0 as f64 + self.x1 as f64) / 2.0,
            (self.y0 as f64 + self.y1 as f64) / 2.0,
        )
    }

    /// Radius of the disk inscribed in the box
    pub fn radius(&self) -> f64 {
        (self.x1 - self.x0) as f64 / 2.0
    }

    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.x0, self.y0, self.x1, self.y1)
    }
}

/// Soldier index → disk position on the canvas for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    disks: Vec<DiskBounds>,
}

impl BoardLayout {
    /// Place `n` disks around the circle described by `settings`
    pub fn new(settings: &Settings, n: usize) -> Result<Self> {
        settings.validate()?;
        let (cx, cy) = settings.origin();
        let offset = IVec2::new(cx, cy);
        let disks = points_in_circumference(settings.radius, n)?
            .into_iter()
            .map(|p| DiskBounds::at(p + offset, settings.disk_size))
            .collect();
        Ok(Self { disks })
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DiskBounds> {
        self.disks.get(index)
    }

    /// Disks in soldier order, paired with their index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &DiskBounds)> {
        self.disks.iter().enumerate()
    }
}
