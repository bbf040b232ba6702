//! The definition protocol: declarative templates and the one-shot
//! address resolution that turns them into instance trees.
//!
//! A template is an explicit, ordered description of a peripheral —
//! nothing is discovered by runtime inspection. [`GroupDef::build`]
//! validates the whole template first, then resolves every address
//! exactly once, recursively from the outermost group inward:
//!
//! 1. A group resolved at base `A` with offsets `O` places its own
//!    replica `i` at `A + O[i]`.
//! 2. A child declared at relative address `C` is cloned once per array
//!    position; clone `j` resolves at `A + C + O[j]`. A nested group
//!    clone then repeats step 1 with that address as its own base.
//!
//! Re-invoking [`GroupDef::build`] on the same template yields a wholly
//! independent tree, which is how multiple unrelated instances of one
//! peripheral type coexist.

use crate::access::Access;
use crate::field::Field;
use crate::group::Group;
use crate::reg::Register;
use core::fmt;
use std::error;

/// Declares a bit field of a register.
#[derive(Clone, Debug)]
pub struct FieldDef {
    name: String,
    position: u32,
    width: u32,
}

impl FieldDef {
    /// Declares the field `name` at bit `position`, `width` bits wide.
    pub fn new(name: impl Into<String>, position: u32, width: u32) -> Self {
        Self { name: name.into(), position, width }
    }

    fn validate(&self) -> Result<(), DefError> {
        if self.width == 0 {
            return Err(DefError::ZeroWidthField { field: self.name.clone() });
        }
        if u64::from(self.position) + u64::from(self.width) > 64 {
            return Err(DefError::FieldOutOfRange {
                field: self.name.clone(),
                position: self.position,
                width: self.width,
            });
        }
        Ok(())
    }

    fn materialize(&self) -> Field {
        Field::new(self.name.clone(), self.position, self.width)
    }
}

/// Declares a register within a group.
///
/// Sibling field bit ranges are not checked for overlap; keeping them
/// disjoint is the caller's responsibility. Overlapping fields still
/// pack and unpack deterministically, in ascending position order.
#[derive(Clone, Debug)]
pub struct RegisterDef {
    name: String,
    offset: u64,
    access: Access,
    fields: Vec<FieldDef>,
}

impl RegisterDef {
    /// Declares the register `name` at the address `offset` relative to
    /// the owning group.
    pub fn new(name: impl Into<String>, offset: u64, access: Access) -> Self {
        Self { name: name.into(), offset, access, fields: Vec::new() }
    }

    /// Adds a field declaration.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    fn validate(&self) -> Result<(), DefError> {
        self.fields.iter().try_for_each(FieldDef::validate)
    }

    fn materialize(&self, address: u64) -> Register {
        log::trace!("register {} resolved to {:#x}", self.name, address);
        let fields = self.fields.iter().map(FieldDef::materialize).collect();
        Register::new(self.name.clone(), address, self.access, fields)
    }
}

/// Declares a group, optionally replicated as a strided array.
#[derive(Clone, Debug)]
pub struct GroupDef {
    name: String,
    offset: u64,
    offsets: Vec<u64>,
    registers: Vec<RegisterDef>,
    groups: Vec<GroupDef>,
}

impl GroupDef {
    /// Declares the group `name` based at the relative address `offset`
    /// (absolute for a top-level group), with a single replica.
    pub fn new(name: impl Into<String>, offset: u64) -> Self {
        Self {
            name: name.into(),
            offset,
            offsets: vec![0],
            registers: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Replicates the group `count` times, `stride` bytes apart.
    #[must_use]
    pub fn stride(mut self, stride: u64, count: usize) -> Self {
        self.offsets = (0..count as u64).map(|i| i * stride).collect();
        self
    }

    /// Replicates the group once per offset.
    ///
    /// The list must start with 0 and ascend strictly; [`build`] rejects
    /// anything else.
    ///
    /// [`build`]: GroupDef::build
    #[must_use]
    pub fn offsets(mut self, offsets: Vec<u64>) -> Self {
        self.offsets = offsets;
        self
    }

    /// Adds a register declaration.
    #[must_use]
    pub fn register(mut self, register: RegisterDef) -> Self {
        self.registers.push(register);
        self
    }

    /// Adds a nested group declaration.
    #[must_use]
    pub fn group(mut self, group: GroupDef) -> Self {
        self.groups.push(group);
        self
    }

    /// Builds a fully resolved, independently owned instance tree.
    ///
    /// The whole template is validated before any resolution happens; on
    /// error no partial tree is produced. Every call yields a tree that
    /// shares no state with trees built earlier from the same template.
    pub fn build(&self) -> Result<Group, DefError> {
        self.validate()?;
        Ok(self.resolve(0))
    }

    fn validate(&self) -> Result<(), DefError> {
        match self.offsets.first() {
            None => return Err(DefError::EmptyOffsets { group: self.name.clone() }),
            Some(&first) if first != 0 => {
                return Err(DefError::FirstOffsetNotZero { group: self.name.clone(), offset: first });
            }
            Some(_) => {}
        }
        if !self.offsets.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(DefError::UnorderedOffsets { group: self.name.clone() });
        }
        self.registers.iter().try_for_each(RegisterDef::validate)?;
        self.groups.iter().try_for_each(GroupDef::validate)
    }

    // `base` is the address the parent resolved for this group; 0 at the
    // top level.
    fn resolve(&self, base: u64) -> Group {
        let address = base + self.offset;
        log::trace!("group {} resolved to {:#x}, {} replicas", self.name, address, self.offsets.len());
        let registers = self
            .registers
            .iter()
            .map(|register| {
                self.offsets
                    .iter()
                    .map(|&delta| register.materialize(address + register.offset + delta))
                    .collect()
            })
            .collect();
        let groups = self
            .groups
            .iter()
            .map(|group| self.offsets.iter().map(|&delta| group.resolve(address + delta)).collect())
            .collect();
        Group::new(self.name.clone(), address, self.offsets.clone(), registers, groups)
    }
}

/// Template rejected by [`GroupDef::build`] before resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefError {
    /// A group's first replica offset is not 0; a replica family is
    /// always anchored at its own base address.
    FirstOffsetNotZero {
        /// Offending group name.
        group: String,
        /// The first offset found.
        offset: u64,
    },
    /// A group's replica offsets are not strictly ascending.
    UnorderedOffsets {
        /// Offending group name.
        group: String,
    },
    /// A group declares an empty offset list.
    EmptyOffsets {
        /// Offending group name.
        group: String,
    },
    /// A field declares a zero width.
    ZeroWidthField {
        /// Offending field name.
        field: String,
    },
    /// A field's bit range does not fit a 64-bit register value.
    FieldOutOfRange {
        /// Offending field name.
        field: String,
        /// Declared bit position.
        position: u32,
        /// Declared bit width.
        width: u32,
    },
}

impl fmt::Display for DefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstOffsetNotZero { group, offset } => {
                write!(f, "group `{group}`: first replica offset must be 0, got {offset:#x}")
            }
            Self::UnorderedOffsets { group } => {
                write!(f, "group `{group}`: replica offsets must be strictly ascending")
            }
            Self::EmptyOffsets { group } => {
                write!(f, "group `{group}`: replica offset list is empty")
            }
            Self::ZeroWidthField { field } => {
                write!(f, "field `{field}`: width must be positive")
            }
            Self::FieldOutOfRange { field, position, width } => {
                let end = u64::from(*position) + u64::from(*width);
                write!(f, "field `{field}`: bits {position}..{end} exceed a 64-bit value")
            }
        }
    }
}

impl error::Error for DefError {}
