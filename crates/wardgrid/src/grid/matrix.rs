use std::fmt;
use std::io::{self, Write};
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use crate::error::GridError;

/// Dense 2D container stored row-major in a single owned buffer.
///
/// Cell `(row, col)` lives at offset `row * cols + col`. The buffer always
/// holds exactly `rows * cols` elements and is never shared between grids:
/// `clone` and `assign` produce independent storage.
///
/// Access comes in two tiers. Indexing with `grid[(row, col)]` and the
/// `get_unchecked*` methods do not validate coordinates; `at` and `at_mut`
/// do and report a `GridError` instead.
#[derive(Debug, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
    rows.checked_mul(cols)
        .ok_or(GridError::Allocation { rows, cols })
}

fn reserve<T>(rows: usize, cols: usize) -> Result<Vec<T>, GridError> {
    let len = checked_len(rows, cols)?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| GridError::Allocation { rows, cols })?;
    Ok(data)
}

impl<T> Grid<T> {
    /// Builds a grid from exactly `rows * cols` values in row-major order.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, GridError> {
        let (rows, cols) = shape;
        if checked_len(rows, cols)? != data.len() {
            return Err(GridError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a grid filled in row-major order from `values`.
    ///
    /// The first `cols` values become row 0, the next `cols` row 1, and so on.
    /// Fails with `GridError::ShapeMismatch` when fewer than `rows * cols`
    /// values are supplied. Values past the last cell are ignored.
    pub fn from_values<I>(rows: usize, cols: usize, values: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = T>,
    {
        let len = checked_len(rows, cols)?;
        let mut data = reserve(rows, cols)?;
        let mut values = values.into_iter();
        data.extend(values.by_ref().take(len));
        if data.len() < len {
            return Err(GridError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        if values.next().is_some() {
            log::debug!("Ignoring trailing values past the end of a {}x{} grid", rows, cols);
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Current shape as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_row(&self, row: usize) -> Result<(), GridError> {
        if row >= self.rows {
            return Err(GridError::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), GridError> {
        if col >= self.cols {
            return Err(GridError::ColumnOutOfRange {
                col,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Checked access. The row is validated before the column.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, GridError> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(&self.data[self.offset(row, col)])
    }

    /// Checked mutable access. The row is validated before the column.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        self.check_row(row)?;
        self.check_col(col)?;
        let offset = self.offset(row, col);
        Ok(&mut self.data[offset])
    }

    /// Returns the cell at `(row, col)` without any bounds check.
    ///
    /// # Safety
    ///
    /// `row < self.nrows()` and `col < self.ncols()` must hold. Any other
    /// coordinate is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        self.data.get_unchecked(self.offset(row, col))
    }

    /// Mutable counterpart of [`Grid::get_unchecked`].
    ///
    /// # Safety
    ///
    /// Same contract as [`Grid::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        let offset = self.offset(row, col);
        self.data.get_unchecked_mut(offset)
    }

    pub fn row(&self, row: usize) -> Result<&[T], GridError> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        Ok(&self.data[start..start + self.cols])
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T], GridError> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        let end = start + self.cols;
        Ok(&mut self.data[start..end])
    }

    /// Exchanges the contents of rows `r1` and `r2`.
    ///
    /// Both indices are validated before anything moves, so a failed call
    /// leaves the grid untouched. Swapping a row with itself is a no-op.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<(), GridError> {
        self.check_row(r1)?;
        self.check_row(r2)?;
        if r1 == r2 {
            return Ok(());
        }

        let (low, high) = (r1.min(r2), r1.max(r2));
        let cols = self.cols;
        let (head, tail) = self.data.split_at_mut(high * cols);
        head[low * cols..(low + 1) * cols].swap_with_slice(&mut tail[..cols]);
        log::trace!("Swapped rows {} and {}", r1, r2);
        Ok(())
    }

    /// Exchanges the contents of columns `c1` and `c2`.
    ///
    /// Same validation and self-swap contract as [`Grid::swap_rows`].
    pub fn swap_cols(&mut self, c1: usize, c2: usize) -> Result<(), GridError> {
        self.check_col(c1)?;
        self.check_col(c2)?;
        if c1 == c2 {
            return Ok(());
        }

        // cols > 0 here since both indices passed validation
        for row in self.data.chunks_exact_mut(self.cols) {
            row.swap(c1, c2);
        }
        log::trace!("Swapped columns {} and {}", c1, c2);
        Ok(())
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Default> Grid<T> {
    /// Creates a `rows x cols` grid of default values.
    ///
    /// Callers should write a cell before reading it: the initial content
    /// carries no meaning beyond `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if storage for `rows * cols` elements cannot be obtained.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut grid = Self::default();
        grid.resize(rows, cols);
        grid
    }

    /// Fallible form of [`Grid::new`].
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let mut grid = Self::default();
        grid.try_resize(rows, cols)?;
        Ok(grid)
    }

    /// Changes the shape to `rows x cols` in place.
    ///
    /// # Panics
    ///
    /// Panics if storage for `rows * cols` elements cannot be obtained. Use
    /// [`Grid::try_resize`] to handle that case.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if let Err(err) = self.try_resize(rows, cols) {
            panic!("{}", err);
        }
    }

    /// Changes the shape to `rows x cols`, keeping every cell `(i, j)` with
    /// `i < min(old_rows, rows)` and `j < min(old_cols, cols)` at the same
    /// coordinates.
    ///
    /// New cells hold `T::default()`; cells outside the new bounds are dropped.
    /// The new buffer is reserved before the old one is touched, so on error
    /// the grid is unchanged.
    pub fn try_resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        let mut data = reserve(rows, cols)?;

        let (old_rows, old_cols) = (self.rows, self.cols);
        let keep_cols = old_cols.min(cols);
        // Leave a consistent empty grid behind should T::default() panic.
        self.rows = 0;
        self.cols = 0;
        let mut old = std::mem::take(&mut self.data).into_iter();

        for r in 0..rows {
            let start = data.len();
            if r < old_rows {
                let mut old_row = old.by_ref().take(old_cols);
                data.extend(old_row.by_ref().take(keep_cols));
                old_row.for_each(drop);
            }
            data.resize_with(start + cols, T::default);
        }
        drop(old);

        log::debug!(
            "Resized grid from {}x{} to {}x{}",
            old_rows,
            old_cols,
            rows,
            cols
        );
        self.data = data;
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }
}

impl<T: Clone> Grid<T> {
    /// Replaces this grid's shape and content with a deep copy of `src`.
    ///
    /// `&mut self` and `&src` cannot alias, so assigning a grid to itself is
    /// ruled out at compile time.
    pub fn assign(&mut self, src: &Grid<T>) {
        self.clone_from(src);
    }

    pub fn column(&self, col: usize) -> Result<Vec<T>, GridError> {
        self.check_col(col)?;
        Ok((0..self.rows)
            .map(|row| self.data[self.offset(row, col)].clone())
            .collect())
    }

    /// Writes `value` into every cell.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T: fmt::Display> Grid<T> {
    /// Writes every row on its own line, values separated by a single space,
    /// followed by one blank line.
    pub fn dump_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)?;
        writeln!(out)
    }

    /// [`Grid::dump_to`] on standard output. Debugging aid.
    pub fn dump(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.dump_to(&mut handle)
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.rows = source.rows;
        self.cols = source.cols;
    }
}

/// Unchecked tier: coordinates are not validated against the shape.
///
/// A column index past `ncols()` silently addresses a cell of a later row;
/// only an offset past the whole buffer panics. Use [`Grid::at`] when the
/// coordinates are not known to be in bounds.
impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        debug_assert!(index.0 < self.rows && index.1 < self.cols);
        &self.data[self.offset(index.0, index.1)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        debug_assert!(index.0 < self.rows && index.1 < self.cols);
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[self.offset(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
