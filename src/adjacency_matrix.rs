use derivative::Derivative;

/// A dense square adjacency matrix.
///
/// Cells are stored row-major in a single vector of `size * size` optional
/// entries.  The matrix has no notion of vertex labels: rows and columns are
/// plain positions, and removing a row/column shifts every higher position
/// down by one.  Growing or shrinking costs O(size²).
#[derive(Derivative)]
#[derivative(Default(bound = ""), Clone(bound = "V: Clone"), PartialEq(bound = "V: PartialEq"))]
pub struct AdjacencyMatrix<V> {
    cells: Vec<Option<V>>,
    size: usize,
}

impl<V> AdjacencyMatrix<V> {
    /// Creates an empty 0×0 matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `size`×`size` matrix with every cell vacant.
    pub fn with_size(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        cells.resize_with(size * size, || None);
        AdjacencyMatrix { cells, size }
    }

    /// The number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the linear storage index for the cell at `row` and `col`, if within bounds.
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| self.unchecked_index(row, col))
    }

    fn unchecked_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Appends one vacant row and one vacant column.
    pub fn push_row_and_column(&mut self) {
        let old_size = self.size;
        let new_size = old_size + 1;
        let mut cells = Vec::with_capacity(new_size * new_size);
        let mut old_cells = std::mem::take(&mut self.cells).into_iter();
        for _ in 0..old_size {
            cells.extend(old_cells.by_ref().take(old_size));
            cells.push(None);
        }
        cells.resize_with(new_size * new_size, || None);
        self.cells = cells;
        self.size = new_size;
    }

    /// Removes the row and column at `index`, compacting the matrix.  Any
    /// entries still present in that row or column are dropped.
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_row_and_column(&mut self, index: usize) {
        assert!(index < self.size, "row/column {index} out of bounds");
        let size = self.size;
        self.cells = std::mem::take(&mut self.cells)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| i / size != index && i % size != index)
            .map(|(_, cell)| cell)
            .collect();
        self.size -= 1;
    }

    /// Vacates every cell in row `index` and column `index`, returning how
    /// many occupied cells were cleared.  The diagonal cell is counted once.
    pub fn clear_row_and_column(&mut self, index: usize) -> usize {
        if index >= self.size {
            return 0;
        }
        let mut cleared = 0;
        for other in 0..self.size {
            if self.remove(index, other).is_some() {
                cleared += 1;
            }
            if other != index && self.remove(other, index).is_some() {
                cleared += 1;
            }
        }
        cleared
    }

    /// Vacates every cell without changing the size.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Gets a reference to the entry at `row` and `col`, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<&V> {
        self.cells[self.index(row, col)?].as_ref()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Stores `data` at `row` and `col`, returning the previous entry if any.
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn insert(&mut self, row: usize, col: usize, data: V) -> Option<V> {
        let index = self
            .index(row, col)
            .unwrap_or_else(|| panic!("cell ({row}, {col}) out of bounds"));
        self.cells[index].replace(data)
    }

    /// Stores `data` at `row` and `col` only if the cell is vacant.  Returns
    /// true if the cell was filled by this call.
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn insert_if_vacant(&mut self, row: usize, col: usize, data: V) -> bool {
        let index = self
            .index(row, col)
            .unwrap_or_else(|| panic!("cell ({row}, {col}) out of bounds"));
        let cell = &mut self.cells[index];
        if cell.is_some() {
            return false;
        }
        *cell = Some(data);
        true
    }

    /// Removes the entry at `row` and `col`, returning it if it existed.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<V> {
        let index = self.index(row, col)?;
        self.cells[index].take()
    }

    /// Returns the column of the first occupied cell in `row` at or after
    /// column `start`, scanning in ascending column order.
    pub fn next_in_row(&self, row: usize, start: usize) -> Option<usize> {
        if row >= self.size || start >= self.size {
            return None;
        }
        let row_start = self.unchecked_index(row, 0);
        self.cells[row_start + start..row_start + self.size]
            .iter()
            .position(Option::is_some)
            .map(|offset| start + offset)
    }

    /// Iterates over the occupied cells of `row` in ascending column order.
    pub fn entries_in_row(&self, row: usize) -> impl Iterator<Item = (usize, &V)> + '_ {
        let range = if row < self.size {
            self.unchecked_index(row, 0)..self.unchecked_index(row, 0) + self.size
        } else {
            0..0
        };
        self.cells[range]
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.as_ref().map(|data| (col, data)))
    }

    /// Iterates over the occupied cells of `col` in ascending row order.
    pub fn entries_in_col(&self, col: usize) -> impl Iterator<Item = (usize, &V)> + '_ {
        (0..self.size).filter_map(move |row| self.get(row, col).map(|data| (row, data)))
    }

    /// Iterates over all occupied cells in row-major order, yielding
    /// `(row, col, data)` tuples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &V)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            cell.as_ref().map(|data| {
                let (row, col) = self.coordinates(index);
                (row, col, data)
            })
        })
    }

    /// Returns the number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns true if every occupied cell has an occupied transposed cell
    /// holding an equal entry.
    pub fn is_symmetric(&self) -> bool
    where
        V: PartialEq,
    {
        self.iter()
            .all(|(row, col, data)| self.get(col, row) == Some(data))
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for AdjacencyMatrix<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjacencyMatrix")
            .field("size", &self.size)
            .field("entries", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
