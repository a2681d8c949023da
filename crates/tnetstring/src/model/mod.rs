//! Data model types for tnetstring values.
//!
//! - [`Tag`]: the closed set of wire type tags
//! - [`Value`]: the seven-variant value union
//! - [`Dict`]: insertion-ordered string-keyed dictionary

pub mod value;

pub use value::{Dict, Tag, Value};
