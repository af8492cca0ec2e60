pub mod filter;
pub mod sort;
pub mod validate;
