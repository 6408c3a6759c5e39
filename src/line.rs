// One generic slide/merge routine shared by all four directions.
// A move is a set of independent lines, each walked from its leading edge.

use crate::common::{CellTag, Direction, Score, Tile};
use crate::config::MAX_TILE;

/// A row or column of a flat row-major buffer, ordered leading edge first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    start: usize,
    step: isize,
    len: usize,
}

impl Line {
    /// The `k`-th line of a `size × size` grid for `dir`: row `k` for
    /// horizontal moves, column `k` for vertical ones.
    pub fn new(size: usize, dir: Direction, k: usize) -> Self {
        let n = size as isize;
        let (start, step) = match dir {
            Direction::Left => (k * size, 1),
            Direction::Right => (k * size + size - 1, -1),
            Direction::Up => (k, n),
            Direction::Down => ((size - 1) * size + k, -n),
        };
        Line {
            start,
            step,
            len: size,
        }
    }

    /// Flat buffer index of position `i` counted from the leading edge.
    #[inline]
    pub fn at(&self, i: usize) -> usize {
        (self.start as isize + i as isize * self.step) as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// All lines a move in `dir` operates on.
pub fn lines(size: usize, dir: Direction) -> impl Iterator<Item = Line> {
    (0..size).map(move |k| Line::new(size, dir, k))
}

/// Result of shifting one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineShift {
    pub moved: bool,
    pub gained: Score,
}

/// Equal tiles below [`MAX_TILE`] merge; the doubled value must still fit.
#[inline]
fn mergeable(v: Tile) -> bool {
    v != 0 && v < MAX_TILE
}

/// `true` if shifting `line` would change it: an empty cell sits before a
/// tile, or two equal mergeable tiles are separated by nothing but empties.
pub fn can_shift(cells: &[Tile], line: &Line) -> bool {
    let mut seen_empty = false;
    let mut prev: Tile = 0;
    for i in 0..line.len() {
        let v = cells[line.at(i)];
        if v == 0 {
            seen_empty = true;
            continue;
        }
        if seen_empty || (v == prev && mergeable(v)) {
            return true;
        }
        prev = v;
    }
    false
}

/// Slide, merge once, slide again. Tags travel with their tiles.
pub fn shift_line(cells: &mut [Tile], tags: &mut [CellTag], line: &Line) -> LineShift {
    let mut out = LineShift::default();
    out.moved |= slide(cells, tags, line);

    let mut i = 0;
    while i + 1 < line.len() {
        let here = line.at(i);
        let v = cells[here];
        if v == 0 {
            i += 1;
            continue;
        }
        // look past empties for a partner; a different tile blocks
        let partner = (i + 1..line.len()).find(|&j| cells[line.at(j)] != 0);
        match partner {
            Some(j) if cells[line.at(j)] == v && mergeable(v) => {
                let merged = v * 2;
                cells[here] = merged;
                tags[here] = CellTag::Merged;
                cells[line.at(j)] = 0;
                tags[line.at(j)] = CellTag::None;
                out.gained = out.gained.saturating_add(merged);
                out.moved = true;
                i = j + 1;
            }
            _ => i += 1,
        }
    }

    out.moved |= slide(cells, tags, line);
    out
}

/// Compact tiles toward the leading edge, keeping their order.
fn slide(cells: &mut [Tile], tags: &mut [CellTag], line: &Line) -> bool {
    let mut moved = false;
    let mut write = 0;
    for read in 0..line.len() {
        let src = line.at(read);
        if cells[src] == 0 {
            continue;
        }
        if read != write {
            let dst = line.at(write);
            cells[dst] = cells[src];
            tags[dst] = tags[src];
            cells[src] = 0;
            tags[src] = CellTag::None;
            moved = true;
        }
        write += 1;
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn shift_row(row: &[Tile]) -> (Vec<Tile>, LineShift) {
        let mut cells = row.to_vec();
        let mut tags = vec![CellTag::None; row.len()];
        let line = Line {
            start: 0,
            step: 1,
            len: row.len(),
        };
        let res = shift_line(&mut cells, &mut tags, &line);
        (cells, res)
    }

    #[test]
    fn merges_pair_front_to_back() {
        let (cells, res) = shift_row(&[2, 2, 2, 2]);
        assert_eq!(cells, vec![4, 4, 0, 0]);
        assert_eq!(res.gained, 8);
    }

    #[test]
    fn merges_across_gap() {
        let (cells, res) = shift_row(&[2, 0, 2, 0]);
        assert_eq!(cells, vec![4, 0, 0, 0]);
        assert_eq!(res.gained, 4);
    }

    #[test]
    fn mismatch_blocks_merge() {
        let (cells, res) = shift_row(&[2, 4, 2, 0]);
        assert_eq!(cells, vec![2, 4, 2, 0]);
        assert!(!res.moved);
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        let (cells, res) = shift_row(&[2, 2, 4, 0]);
        assert_eq!(cells, vec![4, 4, 0, 0]);
        assert_eq!(res.gained, 4);
    }

    #[test]
    fn max_tiles_do_not_merge() {
        let row = [MAX_TILE, MAX_TILE, 0];
        let line = Line::new(3, Direction::Left, 0);
        assert!(!can_shift(&row, &line));
        let (cells, res) = shift_row(&row);
        assert_eq!(cells, row.to_vec());
        assert!(!res.moved);

        let (cells, res) = shift_row(&[MAX_TILE / 2, MAX_TILE / 2]);
        assert_eq!(cells, vec![MAX_TILE, 0]);
        assert_eq!(res.gained, MAX_TILE);
    }

    #[test]
    fn line_indices_follow_direction() {
        let down = Line::new(4, Direction::Down, 1);
        assert_eq!((0..4).map(|i| down.at(i)).collect::<Vec<_>>(), vec![13, 9, 5, 1]);
        let right = Line::new(3, Direction::Right, 2);
        assert_eq!((0..3).map(|i| right.at(i)).collect::<Vec<_>>(), vec![8, 7, 6]);
    }
}
