//! Business logic for the advocate directory.

pub mod directory;
pub mod error;
pub mod reference;
