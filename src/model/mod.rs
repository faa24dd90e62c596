pub mod error;
pub mod failure;
