pub mod count;
pub mod filter;
