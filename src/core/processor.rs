use crate::consts;
use crate::core::error::Error;
use crate::core::instruction::Instruction;
use crate::core::ram::{DisplayBuffer, KeyboardBuffer, Ram};
use crate::core::rom::Rom;
use crate::core::timers::Timers;
use crate::core::variant::Variant;
use crate::utils;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

const STEP: u16 = consts::OP_CODE_BYTES as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    RedrawScreen,
    Continue,
    Waiting,
}

#[derive(Debug)]
pub struct Processor {
    pub stack: [u16; consts::STACK_SIZE],
    pub registers: [u8; consts::REG_COUNT],
    pub idx_register: u16,
    pub pc: u16,
    pub stack_pointer: u8,
    pub timers: Timers,
    pub ram: Ram,
    pub display_buffer: Rc<RefCell<DisplayBuffer>>,
    pub keyboard_buffer: Rc<RefCell<KeyboardBuffer>>,
    /// Key seen held down by FX0A, waiting for its release.
    pub awaiting_key: Option<u8>,
    variant: Variant,
    rng: StdRng,
}

impl Processor {
    pub fn new(variant: Variant) -> Self {
        Self::with_rng(variant, StdRng::from_entropy())
    }

    /// Same as `new`, but CXNN draws from a reproducible sequence.
    pub fn with_seed(variant: Variant, seed: u64) -> Self {
        Self::with_rng(variant, StdRng::seed_from_u64(seed))
    }

    fn with_rng(variant: Variant, rng: StdRng) -> Self {
        let mut ram = Ram::default();
        ram.load(0, &consts::FONT_SET);
        Processor {
            stack: [0; consts::STACK_SIZE],
            registers: [0; consts::REG_COUNT],
            idx_register: 0,
            pc: consts::PROG_OFFSET as u16,
            stack_pointer: 0,
            timers: Timers::default(),
            ram,
            display_buffer: Rc::new(RefCell::new(DisplayBuffer::default())),
            keyboard_buffer: Rc::new(RefCell::new(KeyboardBuffer::default())),
            awaiting_key: None,
            variant,
            rng,
        }
    }

    pub fn load_rom(&mut self, rom: &Rom) -> Result<(), Error> {
        if rom.len() > consts::MAX_ROM_BYTES {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: consts::MAX_ROM_BYTES,
            });
        }
        self.ram.load(consts::PROG_OFFSET, &rom.buffer);
        log::debug!(
            "loaded {} byte rom at 0x{:03X} ({} quirks)",
            rom.len(),
            consts::PROG_OFFSET,
            self.variant
        );
        Ok(())
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Shared handle for the renderer.
    pub fn display(&self) -> Rc<RefCell<DisplayBuffer>> {
        Rc::clone(&self.display_buffer)
    }

    /// Shared handle for the input adapter.
    pub fn keypad(&self) -> Rc<RefCell<KeyboardBuffer>> {
        Rc::clone(&self.keyboard_buffer)
    }

    pub fn tick_timers(&mut self) -> bool {
        self.timers.tick()
    }

    pub fn tone(&self) -> bool {
        self.timers.tone()
    }

    /// Runs `count` instructions, returning whether the display changed.
    pub fn run_batch(&mut self, count: u32) -> bool {
        let mut redraw = false;
        for _ in 0..count {
            if self.cycle() == CycleStatus::RedrawScreen {
                redraw = true;
            }
        }
        redraw
    }

    fn fetch(&mut self) -> Instruction {
        let opcode = self.ram.read_word(self.pc);
        self.pc = self.pc.wrapping_add(STEP) & consts::ADDR_MASK;
        Instruction::decode(opcode)
    }

    fn jump(&mut self, addr: u16) {
        self.pc = addr & consts::ADDR_MASK;
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(STEP) & consts::ADDR_MASK;
        }
    }

    fn set_flag(&mut self, flag: bool) {
        self.registers[consts::FLAG_REG] = flag as u8;
    }

    pub fn cycle(&mut self) -> CycleStatus {
        let inst = self.fetch();
        self.execute(inst)
    }

    fn execute(&mut self, inst: Instruction) -> CycleStatus {
        let Instruction { nnn, nn, n, x, y, .. } = inst;
        let keyboard = self.keyboard_buffer.borrow().clone();

        match (inst.family(), x, y, n) {
            // Clears screen
            (0, 0, 0xE, 0) => {
                self.display_buffer.borrow_mut().clear();
                return CycleStatus::RedrawScreen;
            }

            // Draw on display
            (0xD, _, _, _) => {
                let x_coord = self.registers[x] as usize % consts::DISPL_WIDTH;
                let y_coord = self.registers[y] as usize % consts::DISPL_HEIGHT;
                self.registers[consts::FLAG_REG] = 0;
                let mut display = self.display_buffer.borrow_mut();
                for row in 0..n as usize {
                    if y_coord + row >= consts::DISPL_HEIGHT {
                        break;
                    }
                    let sprite = self.ram.read(self.idx_register.wrapping_add(row as u16));
                    for shift_pos in 0..8 {
                        if !utils::bounds_check(
                            x_coord + shift_pos,
                            y_coord + row,
                            consts::DISPL_WIDTH,
                            consts::DISPL_HEIGHT,
                        ) {
                            break;
                        }
                        if sprite & (0x80 >> shift_pos) != 0
                            && display.flip(x_coord + shift_pos, y_coord + row)
                        {
                            self.registers[consts::FLAG_REG] = 1;
                        }
                    }
                }
                return CycleStatus::RedrawScreen;
            }

            // Jumps
            (1, _, _, _) => self.jump(nnn),
            (0xB, _, _, _) => self.jump(nnn.wrapping_add(self.registers[0] as u16)),

            // Subroutines: enter and exit
            (0, 0, 0xE, 0xE) => {
                if self.stack_pointer == 0 {
                    log::warn!("return with empty stack at 0x{:03X}, ignoring", self.pc);
                } else {
                    self.stack_pointer -= 1;
                    let addr = self.stack[self.stack_pointer as usize];
                    self.jump(addr);
                }
            }
            (2, _, _, _) => {
                if self.stack_pointer as usize >= consts::STACK_SIZE {
                    log::warn!(
                        "stack full ({} frames), ignoring call to 0x{:03X}",
                        consts::STACK_SIZE,
                        nnn
                    );
                } else {
                    self.stack[self.stack_pointer as usize] = self.pc;
                    self.stack_pointer += 1;
                    self.jump(nnn);
                }
            }

            // Conditional skips
            (3, _, _, _) => self.skip_if(self.registers[x] == nn),
            (4, _, _, _) => self.skip_if(self.registers[x] != nn),
            (5, _, _, 0) => self.skip_if(self.registers[x] == self.registers[y]),
            // 9XYN skips regardless of N, unlike 5XYN
            (9, _, _, _) => self.skip_if(self.registers[x] != self.registers[y]),

            // Set register
            (6, _, _, _) => {
                self.registers[x] = nn;
            }
            (8, _, _, 0) => {
                self.registers[x] = self.registers[y];
            }
            (0xA, _, _, _) => {
                self.idx_register = nnn;
            }

            // Add/subtract instructions, flag written after the result
            (7, _, _, _) => {
                self.registers[x] = self.registers[x].wrapping_add(nn);
            }
            (8, _, _, 4) => {
                let (sum, carry) = self.registers[x].overflowing_add(self.registers[y]);
                self.registers[x] = sum;
                self.set_flag(carry);
            }
            (8, _, _, 5) => {
                let no_borrow = self.registers[y] <= self.registers[x];
                self.registers[x] = self.registers[x].wrapping_sub(self.registers[y]);
                self.set_flag(no_borrow);
            }
            (8, _, _, 7) => {
                let no_borrow = self.registers[x] <= self.registers[y];
                self.registers[x] = self.registers[y].wrapping_sub(self.registers[x]);
                self.set_flag(no_borrow);
            }

            // Logical instructions
            (8, _, _, 1..=3) => {
                let vy = self.registers[y];
                let vx = &mut self.registers[x];
                match n {
                    1 => *vx |= vy,
                    2 => *vx &= vy,
                    _ => *vx ^= vy,
                }
                if self.variant.resets_flag_on_logic() {
                    self.registers[consts::FLAG_REG] = 0;
                }
            }

            // Shifting instructions
            (8, _, _, 6) => {
                let source = self.shift_source(x, y);
                self.registers[x] = source >> 1;
                self.registers[consts::FLAG_REG] = source & 0b00000001;
            }
            (8, _, _, 0xE) => {
                let source = self.shift_source(x, y);
                self.registers[x] = source << 1;
                self.registers[consts::FLAG_REG] = (source & 0b10000000) >> 7;
            }

            // Generate randomness
            (0xC, _, _, _) => {
                let rand_val: u8 = self.rng.gen();
                self.registers[x] = nn & rand_val;
            }

            // Skip on keypress
            (0xE, _, 9, 0xE) => self.skip_if(keyboard.is_pressed(self.registers[x])),
            (0xE, _, 0xA, 1) => self.skip_if(!keyboard.is_pressed(self.registers[x])),

            // Halt till a key is pressed and released
            (0xF, _, 0, 0xA) => {
                if self.awaiting_key.is_none() {
                    self.awaiting_key = keyboard.first_pressed();
                }
                match self.awaiting_key {
                    Some(key) if !keyboard.is_pressed(key) => {
                        self.registers[x] = key;
                        self.awaiting_key = None;
                    }
                    _ => {
                        self.pc = self.pc.wrapping_sub(STEP) & consts::ADDR_MASK;
                        return CycleStatus::Waiting;
                    }
                }
            }

            // Change timers (delay/sound)
            (0xF, _, 0, 7) => {
                self.registers[x] = self.timers.delay;
            }
            (0xF, _, 1, 5) => {
                self.timers.delay = self.registers[x];
            }
            (0xF, _, 1, 8) => {
                self.timers.sound = self.registers[x];
            }

            // Update index register
            (0xF, _, 1, 0xE) => {
                self.idx_register = self
                    .idx_register
                    .wrapping_add(self.registers[x] as u16);
            }

            // Point index to font character
            (0xF, _, 2, 9) => {
                self.idx_register = self.registers[x] as u16 * consts::FONT_GLYPH_BYTES as u16;
            }

            // Binary byte to decimal string representation conversion
            (0xF, _, 3, 3) => {
                let num = self.registers[x];
                let i = self.idx_register;
                self.ram.write(i, num / 100);
                self.ram.write(i.wrapping_add(1), (num % 100) / 10);
                self.ram.write(i.wrapping_add(2), num % 10);
            }

            // Store and load memory
            (0xF, _, 5, 5) => {
                for i in 0..=x {
                    self.ram
                        .write(self.idx_register.wrapping_add(i as u16), self.registers[i]);
                }
                self.advance_index_after_bulk(x);
            }
            (0xF, _, 6, 5) => {
                for i in 0..=x {
                    self.registers[i] = self.ram.read(self.idx_register.wrapping_add(i as u16));
                }
                self.advance_index_after_bulk(x);
            }

            // Machine language routines and unassigned opcodes are inert
            (_, _, _, _) => {
                log::trace!("ignoring opcode {:04X} at 0x{:03X}", inst.opcode, self.pc);
            }
        }
        CycleStatus::Continue
    }

    fn shift_source(&self, x: usize, y: usize) -> u8 {
        if self.variant.shifts_from_vy() {
            self.registers[y]
        } else {
            self.registers[x]
        }
    }

    fn advance_index_after_bulk(&mut self, x: usize) {
        if self.variant.increments_index_on_bulk() {
            self.idx_register = self.idx_register.wrapping_add(x as u16 + 1);
        }
    }
}
