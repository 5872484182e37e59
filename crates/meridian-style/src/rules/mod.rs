//! Style rules and stylesheets.

mod rule;
mod stylesheet;

pub use rule::{Binding, Description, Rule};
pub use stylesheet::StyleSheet;
