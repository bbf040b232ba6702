//! Registers, the addressed units of a register space.

use crate::access::Access;
use crate::field::Field;
use core::fmt;

/// A named register at a resolved absolute address.
///
/// A register exclusively owns an ordered set of [`Field`]s, sorted
/// ascending by bit position regardless of declaration order. The field
/// set is fixed once the register is built; only field values change.
///
/// The fields are the single source of truth for the register value:
/// there is no separate backing store. [`Register::value`] packs the
/// current field values into a raw integer, [`Register::set_value`]
/// decomposes a raw integer back into the fields, and bit positions not
/// covered by any field always read back as zero.
#[derive(Clone, Debug)]
pub struct Register {
    name: String,
    address: u64,
    access: Access,
    fields: Vec<Field>,
}

impl Register {
    pub(crate) fn new(name: String, address: u64, access: Access, mut fields: Vec<Field>) -> Self {
        fields.sort_by_key(Field::position);
        Self { name, address, access, fields }
    }

    /// Returns the register name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the absolute address resolved at construction.
    #[inline]
    pub fn address(&self) -> u64 {
        self.address
    }

    /// Returns the declared access mode.
    ///
    /// Metadata only; see [`Access`].
    #[inline]
    pub fn access(&self) -> Access {
        self.access
    }

    /// Returns the fields, ordered ascending by bit position.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Looks up a field by name for mutation of its value.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name() == name)
    }

    /// Packs the current field values into a raw value.
    ///
    /// The result is exactly the union of the field values, each masked
    /// and shifted into place.
    pub fn value(&self) -> u64 {
        self.fields
            .iter()
            .fold(0, |raw, field| raw | ((field.get() & field.mask()) << field.position()))
    }

    /// Decomposes `raw` into the fields.
    ///
    /// Every field receives `(raw >> position) & mask`; bits outside all
    /// declared fields are discarded and will read back as zero.
    pub fn set_value(&mut self, raw: u64) {
        log::trace!("writing {:#x} to register {} at {:#x}", raw, self.name, self.address);
        for field in &mut self.fields {
            field.set(raw >> field.position());
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
