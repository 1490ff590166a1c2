//! Collaborator boundaries for notifications and form submission

mod log;
mod toast;
mod traits;

pub use log::*;
pub use toast::*;
pub use traits::*;
