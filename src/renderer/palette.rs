//! Soldier colors
//!
//! Soldier 0 fires first and is drawn white; the rest alternate blue/gold by
//! index parity. After a win the survivor is redrawn red.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoldierColor {
    White,
    Blue,
    Gold,
    Red,
}

impl SoldierColor {
    /// Color a soldier is drawn with before the round is decided
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => SoldierColor::White,
            i if i % 2 == 0 => SoldierColor::Blue,
            _ => SoldierColor::Gold,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoldierColor::White => "white",
            SoldierColor::Blue => "blue",
            SoldierColor::Gold => "gold",
            SoldierColor::Red => "red",
        }
    }

    /// Single-character marker for text plots
    pub fn glyph(&self) -> char {
        match self {
            SoldierColor::White => 'W',
            SoldierColor::Blue => 'b',
            SoldierColor::Gold => 'g',
            SoldierColor::Red => 'R',
        }
    }
}
