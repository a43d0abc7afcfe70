/// Receives one record per rule match during classification.
///
/// When several rules match the same pixel the observer is notified once
/// per match, in rule order, mirroring the sequence of grid writes.
pub trait TileObserver {
    fn tile_classified(&mut self, row: usize, column: usize, code: u8);
}

impl<T: TileObserver + ?Sized> TileObserver for &mut T {
    fn tile_classified(&mut self, row: usize, column: usize, code: u8) {
        (**self).tile_classified(row, column, code);
    }
}

impl<T: TileObserver + ?Sized> TileObserver for Box<T> {
    fn tile_classified(&mut self, row: usize, column: usize, code: u8) {
        (**self).tile_classified(row, column, code);
    }
}

/// Discards every record.
pub struct NullObserver;

impl TileObserver for NullObserver {
    fn tile_classified(&mut self, _row: usize, _column: usize, _code: u8) {}
}
