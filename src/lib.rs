//! Typed model of a memory-mapped register space.
//!
//! A peripheral layout is declared once — base address, bit positions,
//! replication strides — and built into a fully resolved tree in which
//! every group, register and field already carries its absolute address,
//! and field values pack into and unpack from raw register values without
//! any caller-side shift/mask arithmetic. The resolved tree is pure data:
//! it never touches physical memory and is meant to be consumed by code
//! generators, documentation emitters and inspectors.
//!
//! # Entities
//!
//! * [`field::Field`] — a named bit range inside a register value, owning
//!   a masked sub-value.
//! * [`reg::Register`] — a named, addressed unit composed of fields; its
//!   raw value is always derived from, and decomposed into, the fields.
//! * [`group::Group`] — a named, addressed composite of registers and
//!   nested groups, optionally replicated as a regularly strided array.
//! * [`def`] — the declarative templates and the one-shot resolution that
//!   turns them into instance trees.
//!
//! # Example
//!
//! ```
//! use ral_model::group_def;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut delta = group_def! {
//!     group Delta @ 0x2003_0000 stride 0x1000 * 2 {
//!         register Apple @ 0x00 rw {
//!             field Dp @ 0, 1;
//!             field Usb @ 15, 16;
//!         }
//!         register Banana @ 0x20 rw {
//!             field Hdcp @ 0, 10;
//!             field Aes @ 20, 5;
//!         }
//!     }
//! }
//! .build()?;
//!
//! assert_eq!(delta.replica(0)?.register("Apple").unwrap().address(), 0x2003_0000);
//! assert_eq!(delta.replica(1)?.register("Apple").unwrap().address(), 0x2003_1000);
//! assert_eq!(delta.replica(1)?.register("Banana").unwrap().address(), 0x2003_1020);
//!
//! let apple = delta.register_mut("Apple").unwrap();
//! apple.field_mut("Dp").unwrap().set(1);
//! apple.field_mut("Usb").unwrap().set(6);
//! assert_eq!(apple.value(), 0x30001);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Everything is resolved eagerly at construction and only queried
//! afterwards; there is no I/O and no interior mutability. Replica
//! selection is carried by the [`group::Replica`] view returned from the
//! indexing call rather than by state on the shared group, and mutating a
//! field value requires `&mut` access, so a tree can be moved between
//! threads freely. Concurrent writers clone the tree and keep one
//! instance per thread.

#![warn(missing_docs)]

pub mod access;
pub mod def;
pub mod field;
pub mod group;
pub mod prelude;
pub mod reg;

mod macros;
