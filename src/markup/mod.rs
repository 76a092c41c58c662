pub mod document;
pub mod html;
