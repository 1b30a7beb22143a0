/// Occupancy state of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snake,
    Food,
}

/// Dense occupancy grid for an N x N board.
///
/// 2D coordinates are flattened to 1D indices: (x, y) maps to
/// `x + (y % n) * n`, so (0, 0) = 0, (15, 0) = 15, (0, 1) = 16 and so on.
/// Keeping every cell's state here makes collision and placement checks O(1)
/// instead of a scan over the snake body.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given side length
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Map 2D coordinates to a flattened index
    pub fn to_index(&self, x: usize, y: usize) -> usize {
        x + (y % self.size) * self.size
    }

    /// Map a flattened index back to 2D coordinates
    pub fn to_coords(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    /// Get the state of a cell
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Set the state of a cell
    pub fn set(&mut self, index: usize, cell: Cell) {
        debug_assert!(index < self.cells.len());
        self.cells[index] = cell;
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        let board = Board::new(16);
        assert_eq!(board.to_index(0, 0), 0);
        assert_eq!(board.to_index(1, 0), 1);
        assert_eq!(board.to_index(15, 0), 15);
        assert_eq!(board.to_index(0, 1), 16);
        assert_eq!(board.to_index(2, 1), 18);
        assert_eq!(board.to_index(4, 4), 68);
        assert_eq!(board.to_index(12, 12), 204);
        assert_eq!(board.to_index(15, 15), 255);
    }

    #[test]
    fn test_index_round_trip() {
        let board = Board::new(16);
        for y in 0..16 {
            for x in 0..16 {
                let index = board.to_index(x, y);
                assert_eq!(board.to_coords(index), (x, y));
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(16);
        assert_eq!(board.area(), 256);
        for index in 0..board.area() {
            assert_eq!(board.get(index), Cell::Empty);
        }
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::new(8);
        board.set(10, Cell::Snake);
        board.set(20, Cell::Food);
        assert_eq!(board.get(10), Cell::Snake);
        assert_eq!(board.get(20), Cell::Food);

        board.clear();
        assert_eq!(board.get(10), Cell::Empty);
        assert_eq!(board.get(20), Cell::Empty);
    }
}
