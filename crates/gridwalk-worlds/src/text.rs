//! Character-grid scanning shared by the world parsers.

use gridwalk_core::input::lines_until_empty;
use gridwalk_core::{Point, Range};

use crate::error::ParseError;

/// Visit every character of a rectangular block of text, row by row.
///
/// Stops at the first empty line. Returns the block's extent, or the first
/// error from `f` or from an uneven line.
pub(crate) fn scan(
    input: &str,
    mut f: impl FnMut(Point, char) -> Result<(), ParseError>,
) -> Result<Range, ParseError> {
    let mut width = None;
    let mut height = 0;
    for (y, line) in lines_until_empty(input).enumerate() {
        let mut x = 0;
        for ch in line.chars() {
            f(Point::new(x as i32, y as i32), ch)?;
            x += 1;
        }
        match width {
            None => width = Some(x),
            Some(w) if w != x => {
                return Err(ParseError::InconsistentWidth {
                    line: y,
                    expected: w,
                    found: x,
                });
            }
            Some(_) => {}
        }
        height = y + 1;
    }
    match width {
        Some(w) => Ok(Range::new(0, 0, w as i32, height as i32)),
        None => Err(ParseError::Empty),
    }
}

/// Set `slot` to `p`, failing if it was already set.
pub(crate) fn mark_once(slot: &mut Option<Point>, ch: char, p: Point) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::DuplicateMarker { ch, pos: p });
    }
    *slot = Some(p);
    Ok(())
}
