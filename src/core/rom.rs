use std::fs;
use std::path::Path;

use crate::consts;
use crate::core::error::Error;

/// A raw program image, validated to fit in memory above the program offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rom {
    pub buffer: Vec<u8>,
}

impl Rom {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let data = fs::read(path.as_ref())?;
        log::debug!("read {} bytes from {}", data.len(), path.as_ref().display());
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, Error> {
        if data.is_empty() {
            return Err(Error::EmptyRom);
        }
        if data.len() > consts::MAX_ROM_BYTES {
            return Err(Error::RomTooLarge {
                size: data.len(),
                max: consts::MAX_ROM_BYTES,
            });
        }
        Ok(Rom { buffer: data })
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl TryFrom<Vec<u8>> for Rom {
    type Error = Error;

    fn try_from(data: Vec<u8>) -> Result<Self, Self::Error> {
        Rom::from_bytes(data)
    }
}

impl TryFrom<&[u8]> for Rom {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Rom::from_bytes(data.to_vec())
    }
}
