//! Stylesheet container.

use std::path::Path;

use crate::engine::ExpressionEngine;
use crate::rules::Rule;
use crate::{Error, Result};

/// An ordered collection of cascade-ready rules.
///
/// Rules appear in stable source order after specificity splitting; a
/// downstream translator consumes them by iteration, mapping each rule to a
/// fragment of the renderer's paint model.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet<F, X> {
    /// The rules in this stylesheet.
    pub rules: Vec<Rule<F, X>>,
}

impl<F, X> StyleSheet<F, X> {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self { rules: vec![] }
    }

    /// Parse a stylesheet from source text.
    pub fn from_css<E>(css: &str, engine: &E) -> Result<Self>
    where
        E: ExpressionEngine<Filter = F, Expression = X>,
    {
        let rules = crate::parser::parse_css(css, engine)?;
        Ok(Self { rules })
    }

    /// Load a stylesheet from a file.
    pub fn from_file<E>(path: impl AsRef<Path>, engine: &E) -> Result<Self>
    where
        E: ExpressionEngine<Filter = F, Expression = X>,
    {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_css(&content, engine)
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule<F, X>> {
        self.rules.iter()
    }
}

impl<F, X> Default for StyleSheet<F, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, X> IntoIterator for StyleSheet<F, X> {
    type Item = Rule<F, X>;
    type IntoIter = std::vec::IntoIter<Rule<F, X>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}
