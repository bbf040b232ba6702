//! Bit fields of a register value.

use core::fmt;

/// A named bit range inside a register's raw value.
///
/// A field owns its current value and stores it masked to the declared
/// width at all times. The bit range itself — name, position, width — is
/// fixed when the owning register is built and is exposed read-only.
///
/// Fields have no identity outside their owning
/// [`Register`](crate::reg::Register): every register replica holds its
/// own copies, so writing one replica's field never disturbs another's.
#[derive(Clone, Debug)]
pub struct Field {
    name: String,
    position: u32,
    width: u32,
    mask: u64,
    value: u64,
}

impl Field {
    pub(crate) fn new(name: String, position: u32, width: u32) -> Self {
        let mask = if width >= 64 { u64::MAX } else { (1 << width) - 1 };
        Self { name, position, width, mask, value: 0 }
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bit offset from the least significant bit of the
    /// register value.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Returns the width in bits.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the value mask, `2^width - 1`, not shifted by position.
    #[inline]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> u64 {
        self.value
    }

    /// Stores `value & mask`.
    ///
    /// Bits wider than the declared width are silently discarded; this
    /// never fails. The new value is immediately visible through the
    /// owning register's next [`value`](crate::reg::Register::value)
    /// read.
    #[inline]
    pub fn set(&mut self, value: u64) {
        self.value = value & self.mask;
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
