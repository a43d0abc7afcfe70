/// A fixed-size grid of tile codes stored in row-major order.
///
/// Every cell is initialized to code 0 on construction, so the grid is
/// fully populated regardless of how many cells are later overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl TileGrid {
    /// Panics when either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0);
        assert!(height > 0);
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, column: usize) -> u8 {
        assert!(column < self.width);
        self.data[row * self.width + column]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, code: u8) {
        assert!(column < self.width);
        self.data[row * self.width + column] = code;
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.data[row * self.width..][..self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width)
    }

    /// Copies the grid into nested row vectors, preserving row and column
    /// order. Intended for serialization.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::TileGrid;

    #[test]
    fn starts_zeroed() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(4, grid.width());
        assert_eq!(3, grid.height());
        for row in 0..3 {
            for column in 0..4 {
                assert_eq!(0, grid.get(row, column));
            }
        }
    }

    #[test]
    fn set_and_get() {
        let mut grid = TileGrid::new(4, 3);
        grid.set(2, 1, 3);
        assert_eq!(3, grid.get(2, 1));
        assert_eq!(0, grid.get(1, 2));
        assert_eq!(&[0u8, 3, 0, 0], grid.row(2));
    }

    #[test]
    fn rows_are_row_major() {
        let mut grid = TileGrid::new(2, 2);
        grid.set(0, 1, 1);
        grid.set(1, 0, 2);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(vec![&[0u8, 1][..], &[2, 0][..]], rows);
    }

    #[test]
    fn to_rows_preserves_shape() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(1, 2, 3);
        assert_eq!(vec![vec![0, 0, 0], vec![0, 0, 3]], grid.to_rows());
    }

    #[test]
    #[should_panic]
    fn column_out_of_range_panics() {
        let grid = TileGrid::new(2, 2);
        grid.get(0, 2);
    }

    #[test]
    #[should_panic]
    fn zero_width_is_rejected() {
        TileGrid::new(0, 2);
    }

    #[test]
    #[should_panic]
    fn zero_height_is_rejected() {
        TileGrid::new(2, 0);
    }
}
