pub mod advocate;
pub mod filter;
pub mod text_match;
