//! CHIP-8 interpreter core.
//!
//! `core` holds the machine: memory, decoder, dispatcher and timers. It has no
//! platform dependencies. The SDL window, audio and keyboard adapters live in
//! `external` behind the `sdl` feature.

pub mod config;
pub mod consts;
pub mod core;
#[cfg(feature = "sdl")]
pub mod external;
pub mod utils;

pub use crate::core::error::Error;
pub use crate::core::processor::{CycleStatus, Processor};
pub use crate::core::rom::Rom;
pub use crate::core::variant::Variant;
