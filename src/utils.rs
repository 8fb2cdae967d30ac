/// Splits an opcode into its four nibbles, most significant first.
pub fn nibble_split(opcode: u16) -> (u8, u8, u8, u8) {
    (
        ((opcode & 0xF000) >> 12) as u8,
        ((opcode & 0x0F00) >> 8) as u8,
        ((opcode & 0x00F0) >> 4) as u8,
        (opcode & 0x000F) as u8,
    )
}

pub fn bounds_check(x: usize, y: usize, width: usize, height: usize) -> bool {
    x < width && y < height
}

/// Unpacks a 0xRRGGBBAA colour.
pub fn rgba(color: u32) -> (u8, u8, u8, u8) {
    (
        (color >> 24) as u8,
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_split() {
        assert_eq!(nibble_split(0xD015), (0xD, 0x0, 0x1, 0x5));
        assert_eq!(nibble_split(0x00E0), (0x0, 0x0, 0xE, 0x0));
    }

    #[test]
    fn test_bounds_check() {
        assert!(bounds_check(63, 31, 64, 32));
        assert!(!bounds_check(64, 0, 64, 32));
        assert!(!bounds_check(0, 32, 64, 32));
    }

    #[test]
    fn test_rgba() {
        assert_eq!(rgba(0xFFFFFFFF), (255, 255, 255, 255));
        assert_eq!(rgba(0x12345678), (0x12, 0x34, 0x56, 0x78));
    }
}
