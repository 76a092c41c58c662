pub mod error;
pub mod scanner;
