//! Register-space transport seam
//!
//! A device does not own its register space — real hardware sits behind
//! I2C/SPI/SMBus bridges supplied by the host environment. Everything the
//! model needs from the transport is 32-bit word access at byte
//! addresses, captured by [`RegisterSpace`]. [`MemSpace`] is the software
//! stand-in: a plain in-memory register file, good for CI and for
//! dry-running configuration exports without hardware.

use crate::error::{RegMapError, Result};

/// Byte-addressable 32-bit register access
///
/// Every operation blocks until the underlying read or write completes.
/// Retry and timeout policy, if any, belongs to the implementation; the
/// register-map model never retries.
pub trait RegisterSpace {
    /// Read the 32-bit register at `address` (byte offset, 4-aligned)
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or rejects the address.
    fn read32(&mut self, address: u32) -> Result<u32>;

    /// Write the 32-bit register at `address` (byte offset, 4-aligned)
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or rejects the address.
    fn write32(&mut self, address: u32, value: u32) -> Result<()>;
}

/// In-memory register file
///
/// Bounds-checked and alignment-checked; registers power up as zero.
#[derive(Debug, Clone)]
pub struct MemSpace {
    words: Vec<u32>,
}

impl MemSpace {
    /// Create a zeroed register space of `size` bytes (rounded up to a
    /// whole number of 32-bit words)
    #[must_use]
    pub fn new(size: u32) -> Self {
        let words = vec![0u32; (size as usize).div_ceil(4)];
        Self { words }
    }

    /// Size of the space in bytes
    #[must_use]
    pub fn size(&self) -> u32 {
        (self.words.len() * 4) as u32
    }

    fn index(&self, address: u32) -> Result<usize> {
        if address % 4 != 0 {
            return Err(RegMapError::UnalignedAddress { address });
        }
        let index = (address / 4) as usize;
        if index >= self.words.len() {
            return Err(RegMapError::AddressOutOfRange {
                address,
                size: self.size(),
            });
        }
        Ok(index)
    }
}

impl RegisterSpace for MemSpace {
    fn read32(&mut self, address: u32) -> Result<u32> {
        let index = self.index(address)?;
        Ok(self.words[index])
    }

    fn write32(&mut self, address: u32, value: u32) -> Result<()> {
        let index = self.index(address)?;
        self.words[index] = value;
        Ok(())
    }
}

impl<S: RegisterSpace + ?Sized> RegisterSpace for &mut S {
    fn read32(&mut self, address: u32) -> Result<u32> {
        (**self).read32(address)
    }

    fn write32(&mut self, address: u32, value: u32) -> Result<()> {
        (**self).write32(address, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let mut space = MemSpace::new(0x100);
        space.write32(0x10, 0xAB).unwrap();
        assert_eq!(space.read32(0x10).unwrap(), 0xAB);
        assert_eq!(space.read32(0x14).unwrap(), 0);
    }

    #[test]
    fn out_of_range_rejected() {
        let mut space = MemSpace::new(0x10);
        let err = space.write32(0x10, 1).unwrap_err();
        assert!(matches!(err, RegMapError::AddressOutOfRange { address: 0x10, .. }));
    }

    #[test]
    fn unaligned_rejected() {
        let mut space = MemSpace::new(0x10);
        let err = space.read32(0x3).unwrap_err();
        assert!(matches!(err, RegMapError::UnalignedAddress { address: 0x3 }));
    }

    #[test]
    fn size_rounds_up_to_words() {
        let space = MemSpace::new(0x7);
        assert_eq!(space.size(), 0x8);
    }
}
