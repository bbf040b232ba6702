//! Peripheral groups: addressed composites of registers and nested
//! groups, optionally replicated as a regularly strided array.
//!
//! A [`Group`] owns its children exclusively, so the composite tree is
//! acyclic and [`Clone`] yields a wholly independent tree. Comparison
//! semantics are identity, not structure: no equality is defined, and two
//! structurally identical trees remain distinguishable entities.

use crate::reg::Register;
use core::fmt;
use std::error;

/// An addressed composite owning register and nested group replicas.
///
/// A group stands for either a single hardware block or an array of
/// `size` structurally identical blocks whose addresses differ by the
/// per-replica offsets. Every declared child exists once per array
/// position, with its absolute address resolved at construction; address
/// queries are plain lookups from then on.
///
/// Replica selection is explicit: [`Group::replica`] returns a borrowed
/// view carrying the index, so selecting and reading are a single
/// operation. Child accessors called directly on the group read replica 0.
#[derive(Clone, Debug)]
pub struct Group {
    name: String,
    address: u64,
    offsets: Vec<u64>,
    // One bank per declared child, each holding exactly `size` replicas.
    registers: Vec<Vec<Register>>,
    groups: Vec<Vec<Group>>,
}

impl Group {
    pub(crate) fn new(
        name: String,
        address: u64,
        offsets: Vec<u64>,
        registers: Vec<Vec<Register>>,
        groups: Vec<Vec<Group>>,
    ) -> Self {
        Self { name, address, offsets, registers, groups }
    }

    /// Returns the group name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resolved base address, which is also the address of
    /// replica 0.
    #[inline]
    pub fn address(&self) -> u64 {
        self.address
    }

    /// Returns the per-replica address deltas. The first entry is
    /// always 0.
    #[inline]
    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    /// Returns the number of replicas; 1 for a plain group.
    #[inline]
    pub fn size(&self) -> usize {
        self.offsets.len()
    }

    /// Borrows the replica at `index`.
    pub fn replica(&self, index: usize) -> Result<Replica<'_>, IndexError> {
        if index < self.size() {
            Ok(Replica { group: self, index })
        } else {
            Err(IndexError { group: self.name.clone(), index, size: self.size() })
        }
    }

    /// Mutably borrows the replica at `index`.
    pub fn replica_mut(&mut self, index: usize) -> Result<ReplicaMut<'_>, IndexError> {
        if index < self.size() {
            Ok(ReplicaMut { group: self, index })
        } else {
            Err(IndexError { group: self.name.clone(), index, size: self.size() })
        }
    }

    /// Looks up a register of replica 0 by name.
    pub fn register(&self, name: &str) -> Option<&Register> {
        self.register_bank(name).map(|bank| &bank[0])
    }

    /// Looks up a register of replica 0 by name, for mutation of its
    /// field values.
    pub fn register_mut(&mut self, name: &str) -> Option<&mut Register> {
        self.register_bank_mut(name).map(|bank| &mut bank[0])
    }

    /// Looks up a nested group of replica 0 by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.group_bank(name).map(|bank| &bank[0])
    }

    /// Looks up a nested group of replica 0 by name, for mutation.
    pub fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.group_bank_mut(name).map(|bank| &mut bank[0])
    }

    /// Enumerates the registers of replica 0, in declaration order.
    pub fn registers(&self) -> impl Iterator<Item = &Register> {
        self.registers.iter().map(|bank| &bank[0])
    }

    /// Enumerates the nested groups of replica 0, in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().map(|bank| &bank[0])
    }

    fn register_bank(&self, name: &str) -> Option<&Vec<Register>> {
        self.registers.iter().find(|bank| bank[0].name() == name)
    }

    fn register_bank_mut(&mut self, name: &str) -> Option<&mut Vec<Register>> {
        self.registers.iter_mut().find(|bank| bank[0].name() == name)
    }

    fn group_bank(&self, name: &str) -> Option<&Vec<Group>> {
        self.groups.iter().find(|bank| bank[0].name() == name)
    }

    fn group_bank_mut(&mut self, name: &str) -> Option<&mut Vec<Group>> {
        self.groups.iter_mut().find(|bank| bank[0].name() == name)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An immutable view of one replica of a [`Group`] array.
///
/// The view carries the selected index by value, so a reader can never be
/// redirected to another replica between selection and access.
#[derive(Clone, Copy, Debug)]
pub struct Replica<'a> {
    group: &'a Group,
    index: usize,
}

impl<'a> Replica<'a> {
    /// Returns the selected array position.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the group name.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.group.name()
    }

    /// Returns the address of this replica: the group base plus the
    /// replica's offset.
    #[inline]
    pub fn address(&self) -> u64 {
        self.group.address + self.group.offsets[self.index]
    }

    /// Looks up this replica's copy of a register.
    pub fn register(&self, name: &str) -> Option<&'a Register> {
        let index = self.index;
        self.group.register_bank(name).map(|bank| &bank[index])
    }

    /// Looks up this replica's copy of a nested group.
    pub fn group(&self, name: &str) -> Option<&'a Group> {
        let index = self.index;
        self.group.group_bank(name).map(|bank| &bank[index])
    }

    /// Enumerates this replica's registers, in declaration order.
    pub fn registers(&self) -> impl Iterator<Item = &'a Register> {
        let index = self.index;
        self.group.registers.iter().map(move |bank| &bank[index])
    }

    /// Enumerates this replica's nested groups, in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &'a Group> {
        let index = self.index;
        self.group.groups.iter().map(move |bank| &bank[index])
    }
}

/// A mutable view of one replica of a [`Group`] array.
#[derive(Debug)]
pub struct ReplicaMut<'a> {
    group: &'a mut Group,
    index: usize,
}

impl ReplicaMut<'_> {
    /// Returns the selected array position.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the group name.
    #[inline]
    pub fn name(&self) -> &str {
        self.group.name()
    }

    /// Returns the address of this replica.
    #[inline]
    pub fn address(&self) -> u64 {
        self.group.address + self.group.offsets[self.index]
    }

    /// Looks up this replica's copy of a register.
    pub fn register(&self, name: &str) -> Option<&Register> {
        self.group.register_bank(name).map(|bank| &bank[self.index])
    }

    /// Looks up this replica's copy of a register, for mutation of its
    /// field values.
    pub fn register_mut(&mut self, name: &str) -> Option<&mut Register> {
        let index = self.index;
        self.group.register_bank_mut(name).map(|bank| &mut bank[index])
    }

    /// Looks up this replica's copy of a nested group.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.group.group_bank(name).map(|bank| &bank[self.index])
    }

    /// Looks up this replica's copy of a nested group, for mutation.
    pub fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        let index = self.index;
        self.group.group_bank_mut(name).map(|bank| &mut bank[index])
    }
}

/// Replica index outside `[0, size)`.
///
/// Returned by [`Group::replica`] and [`Group::replica_mut`]. The group
/// itself is left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexError {
    /// Name of the indexed group.
    pub group: String,
    /// The rejected index.
    pub index: usize,
    /// The group's replica count.
    pub size: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for group `{}` of size {}", self.index, self.group, self.size)
    }
}

impl error::Error for IndexError {}
