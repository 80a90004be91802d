//! Diagnostic text rendering of grids and paths.

use gridwalk_core::{Point, Range};

/// Draw `rng` with `glyph` and overlay the steps of `path`.
///
/// Every intermediate step is drawn as `-` when it was entered
/// horizontally and `|` when entered vertically. Steps that stay in place
/// (waits) and the two endpoints keep their glyph.
pub fn trace_path(rng: Range, glyph: impl Fn(Point) -> char, path: &[Point]) -> String {
    let w = rng.width().max(0) as usize;
    let mut rows: Vec<Vec<char>> = (rng.min.y..rng.max.y)
        .map(|y| (rng.min.x..rng.max.x).map(|x| glyph(Point::new(x, y))).collect())
        .collect();

    let inner = path.len().saturating_sub(1);
    for (i, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        if i + 1 == inner || !rng.contains(to) {
            continue;
        }
        let d = to - from;
        let mark = if d.x != 0 {
            '-'
        } else if d.y != 0 {
            '|'
        } else {
            continue;
        };
        rows[(to.y - rng.min.y) as usize][(to.x - rng.min.x) as usize] = mark;
    }

    let mut out = String::with_capacity((w + 1) * rows.len());
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_grid() {
        let s = trace_path(Range::new(0, 0, 3, 2), |_| '.', &[]);
        assert_eq!(s, "...\n...\n");
    }

    #[test]
    fn path_marks_keep_endpoints() {
        let path = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(1, 1),
            Point::new(2, 1),
        ];
        let glyph = |p: Point| if p == Point::new(0, 0) { 'S' } else { '.' };
        let s = trace_path(Range::new(0, 0, 3, 2), glyph, &path);
        assert_eq!(s, "S-.\n.|.\n");
    }
}
