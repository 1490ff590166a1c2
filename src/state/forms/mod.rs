//! Form state models

mod catalog;
mod contact;
mod inquiry;

pub use catalog::*;
pub use contact::*;
pub use inquiry::*;
