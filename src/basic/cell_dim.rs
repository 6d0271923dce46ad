#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellDim {
    /// Side length of a (square) cell in pixels
    pub side: f32,
    /// Side length of one of the `SUBDIVISIONS x SUBDIVISIONS` blocks a
    /// sprite is made of, the remainder of the cell stays empty
    pub block: f32,
}

impl CellDim {
    pub const SUBDIVISIONS: usize = 3;

    pub fn new(side: u32) -> Self {
        Self {
            side: side as f32,
            block: (side / Self::SUBDIVISIONS as u32) as f32,
        }
    }
}

#[test]
fn test_block_uses_integer_division() {
    let cell_dim = CellDim::new(32);
    assert_eq!(cell_dim.side, 32.);
    assert_eq!(cell_dim.block, 10.);
    assert_eq!(CellDim::new(30).block, 10.);
}
