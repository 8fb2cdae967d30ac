pub const DISPL_WIDTH: usize = 64;
pub const DISPL_HEIGHT: usize = 32;
pub const DISPL_PIXELS: usize = DISPL_WIDTH * DISPL_HEIGHT;
pub const OP_CODE_BYTES: usize = 2;
pub const RAM_BYTES: usize = 4096;
pub const ADDR_MASK: u16 = 0x0FFF;
pub const REG_COUNT: usize = 16;
pub const FLAG_REG: usize = 0xF;
pub const STACK_SIZE: usize = 12;
pub const PROG_OFFSET: usize = 0x200;
pub const MAX_ROM_BYTES: usize = RAM_BYTES - PROG_OFFSET;
pub const KEYBOARD_SIZE: usize = 16;
pub const TIMER_HZ: u32 = 60;

/// Upper bound on the square-wave amplitude.
pub const MAX_VOLUME: i16 = 8000;

pub const FONT_GLYPH_BYTES: usize = 5;
pub const FONT_SET_SIZE: usize = 80;
pub const FONT_SET: [u8; FONT_SET_SIZE] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
