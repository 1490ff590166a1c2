//! Form rendering

pub mod field_renderer;
pub mod inquiry_form;
