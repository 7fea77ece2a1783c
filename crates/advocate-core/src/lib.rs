//! Domain core for the advocate directory.
//!
//! Holds everything that does not need a database or an HTTP stack:
//! configuration, the static reference tables, the slug/label
//! normalization layer and the pagination calculator.

pub mod config;
pub mod constants;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod reference;
pub mod types;
pub mod util;
