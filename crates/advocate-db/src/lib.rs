//! Persistence layer for the advocate directory.

pub mod db;
pub mod error;
pub mod model;
