//! Helper functions for templates
//!
//! Small formatting helpers used when turning posts into template data.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
