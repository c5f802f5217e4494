//! Menu model
//!
//! All entries live in one flat table. A group is a run of entries closed
//! by a `GroupEnd` sentinel; sub-menu entries link to the index where
//! another group starts.

pub mod entry;
pub mod model;

pub use entry::{ActionId, Adjusted, EntryKind, MenuEntry, Parameter};
pub use model::{Menu, MenuError, MAX_GROUP_SCAN};
