//! A square grid of cells stored row-major in a flat buffer.
//!
//! The type is `no_std` friendly and only needs `alloc`. Cells are addressed
//! by `(row, col)` with bounds-checked accessors; unchecked flat indexing is
//! crate-private and used by the move routines in [`crate::line`].

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GridError;

/// A `size × size` grid of `T`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![T::default(); size * size],
        }
    }

    /// Number of cells in a `size × size` grid of `T`, or `None` when that
    /// buffer could not be allocated at all.
    pub fn cell_count(size: usize) -> Option<usize> {
        let count = size.checked_mul(size)?;
        let bytes = count.checked_mul(core::mem::size_of::<T>())?;
        (bytes <= isize::MAX as usize).then_some(count)
    }

    /// Build a grid from row-major cells. Fails unless `cells.len() == size * size`.
    pub fn from_cells(size: usize, cells: Vec<T>) -> Result<Self, GridError> {
        let expected = size.checked_mul(size).unwrap_or(usize::MAX);
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Grid { size, cells })
    }

    /// Edge length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<T, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.size + col])
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row * self.size + col] = value;
        Ok(())
    }

    /// Resets all cells to `T::default()`.
    pub fn clear_all(&mut self) {
        self.cells.fill(T::default());
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Iterator over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Iterator over `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / size, i % size, v))
    }

    /// Return a copy rotated by 90 degrees, clockwise or counter-clockwise.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let n = self.size;
        let mut out = Grid::new(n);
        for row in 0..n {
            for col in 0..n {
                out.cells[row * n + col] = if clockwise {
                    self.cells[(n - 1 - col) * n + row]
                } else {
                    self.cells[col * n + (n - 1 - row)]
                };
            }
        }
        out
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.size || col >= self.size {
            Err(GridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Consumes the grid and returns the row-major buffer.
    #[inline]
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} [", self.size, self.size)?;
        for row in self.cells.chunks(self.size.max(1)) {
            writeln!(f, "  {:?}", row)?;
        }
        write!(f, "]")
    }
}
