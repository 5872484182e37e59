//! CSS-like cartographic styling for Meridian.
//!
//! This crate parses map stylesheets into an ordered sequence of
//! cascade-ready rules, featuring:
//!
//! - **Selectors**: wildcard, feature-type, feature-id, numeric attribute
//!   comparisons, and embedded CQL-style filters
//! - **Specificity**: cascade priority per selector, with mixed-priority
//!   selector lists split into separate rules
//! - **Pseudo-elements**: `:stroke`, `:mark(2)` and friends, tagging the
//!   rendering sub-pass a property block applies to
//! - **Embedded expressions**: bracket syntax delegated to a pluggable
//!   [`engine::ExpressionEngine`]
//!
//! Parsing is a pure function of the input text: no I/O happens mid-parse,
//! no state is shared between invocations, and concurrent parses are fully
//! independent.
//!
//! # Example
//!
//! ```ignore
//! use meridian_style::prelude::*;
//!
//! let sheet = StyleSheet::from_css(
//!     "/* Major roads */
//!      roads [lanes > 2] { stroke: #303030; stroke-width: 2; }",
//!     &engine,
//! )?;
//!
//! for rule in sheet.iter() {
//!     translator.push(rule);
//! }
//! ```

pub mod engine;
pub mod parser;
pub mod rules;
pub mod selector;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::engine::ExpressionEngine;
    pub use crate::parser::{Position, parse_css};
    pub use crate::rules::{Binding, Description, Rule, StyleSheet};
    pub use crate::selector::{
        Comparator, Context, PseudoFilter, Selector, SelectorToken, SimpleSelector, Specificity,
    };
    pub use crate::types::{Property, Value};
    pub use crate::{Error, Result};
}
