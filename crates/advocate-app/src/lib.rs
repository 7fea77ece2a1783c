//! HTTP surface of the advocate directory.

pub mod app;
pub mod config;
pub mod db_handler;
pub mod error;
