//! Stylesheet parsing.

mod cursor;
mod embedded;
mod grammar;

pub use cursor::{Cursor, Position};
pub use grammar::parse_css;
