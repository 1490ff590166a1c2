//! Reusable UI components

mod button;
mod toast;

pub use button::*;
pub use toast::*;
