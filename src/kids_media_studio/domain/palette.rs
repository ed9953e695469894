use crate::domain::color::Color;

/// Colours offered by the pharaoh colouring page, in display order.
pub const PALETTE: [Color; 6] = [
    Color::new(0xFF, 0xD7, 0x00), // gold
    Color::new(0x46, 0x82, 0xB4), // steel blue
    Color::new(0xB2, 0x22, 0x22), // firebrick
    Color::new(0x00, 0x64, 0x00), // dark green
    Color::new(0xFF, 0xFF, 0xFF),
    Color::new(0x00, 0x00, 0x00),
];

/// The eraser simply paints white.
pub const ERASER: Color = Color::new(0xFF, 0xFF, 0xFF);

pub fn default_color() -> Color {
    PALETTE[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex_values() {
        let hex: Vec<String> = PALETTE.iter().map(Color::to_hex).collect();
        assert_eq!(hex, ["#FFD700", "#4682B4", "#B22222", "#006400", "#FFFFFF", "#000000"]);
        assert_eq!(ERASER.to_hex(), "#FFFFFF");
        assert_eq!(default_color(), PALETTE[0]);
    }
}
