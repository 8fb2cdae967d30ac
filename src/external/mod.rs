pub mod emulator;
pub mod input;
pub mod output;
