pub mod actions;
pub mod image_source;
