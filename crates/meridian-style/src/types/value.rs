//! Property value representation.
//!
//! A property value is a sequence of tokens. Most tokens are plain
//! literals (`red`, `2`, `10px`, `#ff0000`); a token can also be a function
//! call with its own argument values, or a scalar expression embedded in
//! bracket syntax and parsed by the collaborating expression engine.

/// One style-property token.
///
/// The type parameter `X` is the expression engine's opaque handle for an
/// embedded scalar expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<X> {
    /// A bare token: identifier, number, measured number, percentage,
    /// quoted-string content, or hex color.
    Literal(String),
    /// A function call with ordered arguments, e.g. `url(...)` or
    /// `symbol(circle)`.
    Function(String, Vec<Value<X>>),
    /// An embedded scalar expression, e.g. `[population * 2]`.
    Expression(X),
}

impl<X> Value<X> {
    /// Create a literal token.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Create a function-call token.
    pub fn function(name: impl Into<String>, args: Vec<Value<X>>) -> Self {
        Self::Function(name.into(), args)
    }

    /// Get the literal text if this is a [`Value::Literal`].
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            _ => None,
        }
    }
}

/// A named property with one or more fallback value-sets.
///
/// The outer list of `alternatives` models comma-separated fallbacks; each
/// inner list is a space-separated multi-value (e.g. a dash pattern like
/// `2 4`). `fill: a b, c` therefore parses to `[[a, b], [c]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property<X> {
    /// Property name as written in the stylesheet.
    pub name: String,
    /// Comma-separated fallbacks, each a space-separated value list.
    pub alternatives: Vec<Vec<Value<X>>>,
}

impl<X> Property<X> {
    /// Create a property from its full alternatives list.
    pub fn new(name: impl Into<String>, alternatives: Vec<Vec<Value<X>>>) -> Self {
        Self {
            name: name.into(),
            alternatives,
        }
    }

    /// Create a property holding a single value.
    pub fn single(name: impl Into<String>, value: Value<X>) -> Self {
        Self::new(name, vec![vec![value]])
    }

    /// The first (preferred) value-set.
    pub fn preferred(&self) -> Option<&[Value<X>]> {
        self.alternatives.first().map(Vec::as_slice)
    }
}
