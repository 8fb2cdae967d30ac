use crate::utils;

/// One fetched opcode and its operand fields.
///
/// ```text
///  opcode: F X Y N
///  nnn   :   [---]   12-bit address
///  nn    :     [-]   8-bit immediate
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u16,
    pub nnn: u16,
    pub nn: u8,
    pub n: u8,
    pub x: usize,
    pub y: usize,
}

impl Instruction {
    pub fn decode(opcode: u16) -> Self {
        let (_, x, y, n) = utils::nibble_split(opcode);
        Instruction {
            opcode,
            nnn: opcode & 0x0FFF,
            nn: (opcode & 0x00FF) as u8,
            n,
            x: x as usize,
            y: y as usize,
        }
    }

    /// The high nibble, which selects the instruction family.
    pub fn family(&self) -> u8 {
        (self.opcode >> 12) as u8
    }
}

impl From<u16> for Instruction {
    fn from(opcode: u16) -> Self {
        Instruction::decode(opcode)
    }
}
