use crate::domain::color::Color;
use crate::domain::position::Position;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillRequest {
    pub seed: Position,
    pub target_color: Color,
}

impl FillRequest {
    pub fn new(seed: Position, target_color: Color) -> Self {
        Self { seed, target_color }
    }
}
