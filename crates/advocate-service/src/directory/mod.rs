//! Directory search: request decoding, store reads and response assembly.

pub mod request;
pub mod service;
pub mod view;

pub use request::DirectoryRequest;
pub use service::{filter_options, search_advocates};
pub use view::{AdvocateView, AdvocatesResponse, FilterOptions};
