use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Cell;

/// One of the two competing positions. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Red,
    Yellow,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::Red, Seat::Yellow];

    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::Red => Seat::Yellow,
            Seat::Yellow => Seat::Red,
        }
    }

    /// Convert seat to the cell it occupies
    pub fn to_cell(self) -> Cell {
        match self {
            Seat::Red => Cell::Red,
            Seat::Yellow => Cell::Yellow,
        }
    }

    /// Get seat name for display
    pub fn name(self) -> &'static str {
        match self {
            Seat::Red => "Red",
            Seat::Yellow => "Yellow",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::Red => 0,
            Seat::Yellow => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::Red.other(), Seat::Yellow);
        assert_eq!(Seat::Yellow.other(), Seat::Red);
    }

    #[test]
    fn test_seat_name() {
        assert_eq!(Seat::Red.name(), "Red");
        assert_eq!(Seat::Yellow.to_string(), "Yellow");
    }

    #[test]
    fn test_seat_to_cell() {
        assert_eq!(Seat::Red.to_cell(), Cell::Red);
        assert_eq!(Seat::Yellow.to_cell(), Cell::Yellow);
    }

    #[test]
    fn test_seat_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Seat::Yellow).unwrap(), "\"yellow\"");
    }
}
