//! Register access metadata.

use core::fmt;

/// How hardware allows a register to be accessed.
///
/// Carried on every [`Register`](crate::reg::Register) as descriptive
/// metadata for downstream consumers. The model itself never enforces it:
/// writing the value of a read-only register succeeds, because the value
/// here is an in-memory stand-in, not the hardware cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// The register can only be read.
    ReadOnly,
    /// The register can only be written.
    WriteOnly,
    /// The register can be read and written.
    ReadWrite,
}

impl Access {
    /// Returns `true` if hardware allows reads.
    #[inline]
    pub fn is_readable(self) -> bool {
        matches!(self, Self::ReadOnly | Self::ReadWrite)
    }

    /// Returns `true` if hardware allows writes.
    #[inline]
    pub fn is_writable(self) -> bool {
        matches!(self, Self::WriteOnly | Self::ReadWrite)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadOnly => f.write_str("read-only"),
            Self::WriteOnly => f.write_str("write-only"),
            Self::ReadWrite => f.write_str("read-write"),
        }
    }
}
