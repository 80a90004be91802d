use std::fmt;

use gridwalk_core::Point;

/// Errors that can occur when parsing a world from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no lines, or nothing inside its walls.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that the world does not understand, or one in a place
    /// where it is not allowed.
    InvalidSymbol { ch: char, pos: Point },
    /// A marker that must appear once appeared again.
    DuplicateMarker { ch: char, pos: Point },
    /// No start marker or entry gap.
    MissingStart,
    /// No goal marker or exit gap.
    MissingGoal,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(f, "line {line} is {found} wide, expected {expected}"),
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "invalid symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "marker \u{201c}{ch}\u{201d} repeated at {pos}")
            }
            Self::MissingStart => write!(f, "no start position"),
            Self::MissingGoal => write!(f, "no goal position"),
        }
    }
}

impl std::error::Error for ParseError {}
