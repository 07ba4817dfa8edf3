//! Josephus elimination
//!
//! Soldiers `0..n` stand in a circle. Counting starts at soldier 0; every
//! `k`-th soldier still standing is killed by the soldier standing just
//! before them, until one is left.

use serde::{Deserialize, Serialize};

use crate::consts::MIN_COUNT;
use crate::error::{JosephusError, Result};

/// One kill: who fired, who fell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kill {
    pub killer: usize,
    pub casualty: usize,
}

/// Full outcome of a circle: the kill order and the last soldier standing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    /// Kills in the order they happen (length `n - 1`)
    pub kills: Vec<Kill>,
    /// The soldier nobody kills
    pub survivor: usize,
}

impl Elimination {
    pub fn len(&self) -> usize {
        self.kills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kills.is_empty()
    }

    /// Casualties in kill order
    pub fn casualties(&self) -> impl Iterator<Item = usize> + '_ {
        self.kills.iter().map(|k| k.casualty)
    }
}

fn check_args(n: usize, k: usize) -> Result<()> {
    if n < MIN_COUNT {
        return Err(JosephusError::InvalidCount {
            count: n,
            min: MIN_COUNT,
        });
    }
    if k < 1 {
        return Err(JosephusError::InvalidStep { step: k });
    }
    Ok(())
}

/// Run the elimination for `n` soldiers killing every `k`-th one
///
/// The killer of each casualty is whoever stands immediately before the
/// casualty's slot once the casualty is removed (wrapping to the back of
/// the circle). The last soldier removed has nobody left to kill them, so
/// they are the survivor and that final removal is not recorded as a kill.
pub fn simulate(n: usize, k: usize) -> Result<Elimination> {
    check_args(n, k)?;

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut kills = Vec::with_capacity(n - 1);
    let mut i = 0;

    // Stop with one soldier left: their removal would be a self-kill
    while remaining.len() > 1 {
        i = (i + (k - 1) % remaining.len()) % remaining.len();
        let casualty = remaining.remove(i);
        let killer = remaining[(i + remaining.len() - 1) % remaining.len()];
        kills.push(Kill { killer, casualty });
    }

    // The final kill is always made by the last one standing
    let survivor = remaining[0];
    debug_assert_eq!(kills.last().map(|kill| kill.killer), Some(survivor));

    Ok(Elimination { kills, survivor })
}

/// Survivor only, via the recurrence `J(1) = 0`, `J(m) = (J(m-1) + k) mod m`
///
/// O(n) and allocation-free; agrees with [`simulate`] for every valid input.
pub fn survivor_position(n: usize, k: usize) -> Result<usize> {
    check_args(n, k)?;
    Ok((2..=n).fold(0, |j, m| (j + k) % m))
}
