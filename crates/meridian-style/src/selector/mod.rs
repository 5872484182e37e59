//! Selector types, specificity, and grouping.

mod grouping;
mod specificity;
mod types;

pub use grouping::split;
pub use specificity::Specificity;
pub use types::{Comparator, Context, PseudoFilter, Selector, SelectorToken, SimpleSelector};
