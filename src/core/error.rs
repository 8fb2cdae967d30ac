/// Failures surfaced before a session starts running.
///
/// Once the processor is cycling nothing is fallible; malformed programs are
/// tolerated inside the dispatcher instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not read rom: {0}")]
    Io(#[from] std::io::Error),

    #[error("rom is {size} bytes, at most {max} fit above 0x200")]
    RomTooLarge { size: usize, max: usize },

    #[error("rom is empty")]
    EmptyRom,

    #[error("unknown variant `{0}` (expected chip8, schip or xochip)")]
    UnknownVariant(String),

    #[error("sdl: {0}")]
    Sdl(String),
}
