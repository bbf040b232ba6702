//! The `ral-model` prelude.
//!
//! The purpose of this module is to alleviate imports of the commonly
//! used model types:
//!
//! ```
//! use ral_model::prelude::*;
//! ```

pub use crate::access::Access;
pub use crate::def::{DefError, FieldDef, GroupDef, RegisterDef};
pub use crate::field::Field;
pub use crate::group::{Group, IndexError, Replica, ReplicaMut};
pub use crate::reg::Register;
