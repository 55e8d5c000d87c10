//! Arena positions - the battle line is a fixed 8-cell strip

use serde::{Deserialize, Serialize};
use std::fmt;

/// Leftmost arena cell
pub const ARENA_MIN: i32 = 0;
/// Rightmost arena cell
pub const ARENA_MAX: i32 = 7;

/// A cell on the battle line, always within `[0, 7]`
///
/// All arithmetic clamps back into the arena; there is no invalid
/// position state. Out-of-bounds movement is absorbed at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(u8);

impl Position {
    /// Create a position, clamping into the arena
    pub fn new(cell: i32) -> Self {
        Position(cell.clamp(ARENA_MIN, ARENA_MAX) as u8)
    }

    /// The raw cell index (0-7)
    pub fn cell(&self) -> u8 {
        self.0
    }

    /// Move by a signed offset, clamped to the arena edges
    pub fn offset(&self, delta: i32) -> Self {
        Position::new(i32::from(self.0) + delta)
    }

    /// Distance in cells to another position
    pub fn distance_to(&self, other: Position) -> u8 {
        (i32::from(self.0) - i32::from(other.0)).unsigned_abs() as u8
    }

    /// Unit direction sign toward another position (0 when equal)
    pub fn direction_to(&self, other: Position) -> i32 {
        (i32::from(other.0) - i32::from(self.0)).signum()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
