#![allow(dead_code)]

pub mod stub_document;
pub mod utils;
