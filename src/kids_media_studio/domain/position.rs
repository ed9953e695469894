/// Pixel coordinate as received from callers. Signed so that off-canvas
/// clicks such as `(-1, 0)` can be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}
