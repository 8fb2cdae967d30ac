use crate::consts;

/// Main memory. Every access is masked to 12 bits, so nothing a program does
/// can index outside the buffer.
#[derive(Debug, Clone)]
pub struct Ram {
    pub buffer: [u8; consts::RAM_BYTES],
}

impl Default for Ram {
    fn default() -> Self {
        Ram {
            buffer: [0; consts::RAM_BYTES],
        }
    }
}

impl Ram {
    #[inline]
    fn index(addr: u16) -> usize {
        (addr & consts::ADDR_MASK) as usize
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.buffer[Self::index(addr)]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.buffer[Self::index(addr)] = value;
    }

    /// Big-endian opcode at `addr`; the second byte wraps around to 0x000.
    pub fn read_word(&self, addr: u16) -> u16 {
        ((self.read(addr) as u16) << 8) | self.read(addr.wrapping_add(1)) as u16
    }

    /// Copies `data` in starting at `offset`. Callers check the length.
    pub fn load(&mut self, offset: usize, data: &[u8]) {
        self.buffer[offset..offset + data.len()].copy_from_slice(data);
    }
}

/// Monochrome frame, row-major, `y * DISPL_WIDTH + x`.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    pub buffer: [bool; consts::DISPL_PIXELS],
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        DisplayBuffer {
            buffer: [false; consts::DISPL_PIXELS],
        }
    }
}

impl DisplayBuffer {
    pub fn clear(&mut self) {
        self.buffer.iter_mut().for_each(|p| *p = false);
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.buffer[y * consts::DISPL_WIDTH + x]
    }

    /// XORs a lit sprite bit onto (x, y), returning true if it erased a pixel.
    pub fn flip(&mut self, x: usize, y: usize) -> bool {
        let pixel = &mut self.buffer[y * consts::DISPL_WIDTH + x];
        let collided = *pixel;
        *pixel = !*pixel;
        collided
    }

    pub fn lit(&self) -> usize {
        self.buffer.iter().filter(|p| **p).count()
    }
}

/// Key-down state for the 16-key pad. Written by the input adapter only.
#[derive(Default, Debug, Clone)]
pub struct KeyboardBuffer {
    pub buffer: [bool; consts::KEYBOARD_SIZE],
}

impl KeyboardBuffer {
    pub fn is_pressed(&self, key: u8) -> bool {
        self.buffer[(key & 0xF) as usize]
    }

    pub fn set(&mut self, key: u8, pressed: bool) {
        self.buffer[(key & 0xF) as usize] = pressed;
    }

    pub fn first_pressed(&self) -> Option<u8> {
        self.buffer.iter().position(|k| *k).map(|k| k as u8)
    }
}
