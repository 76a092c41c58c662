pub mod binding;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod field_model;
pub mod field_name;
