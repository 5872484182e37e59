//! Selector type definitions.

use std::fmt;

/// A boolean selector over feature attributes.
///
/// The type parameter `F` is the expression engine's opaque handle for an
/// embedded boolean filter. The enum is closed on purpose: the grouping
/// engine and downstream translators match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector<F> {
    /// `*` - matches every feature.
    Accept,
    /// Matches features by type name.
    Typename(String),
    /// `#fid` - matches a single feature by identifier.
    Id(String),
    /// `[@attr > n]` - numeric attribute comparison shorthand.
    Pseudo(PseudoFilter),
    /// An embedded boolean filter, e.g. `[population > 10000]`.
    Filter(F),
    /// Conjunction of selectors. An empty conjunction is always true.
    And(Vec<Selector<F>>),
    /// Disjunction of selectors. An empty disjunction is always false.
    Or(Vec<Selector<F>>),
}

impl<F> Selector<F> {
    /// Create a type-name selector.
    pub fn typename(name: impl Into<String>) -> Self {
        Self::Typename(name.into())
    }

    /// Create a feature-id selector.
    pub fn id(fid: impl Into<String>) -> Self {
        Self::Id(fid.into())
    }

    /// Create a numeric comparison selector.
    pub fn pseudo(attribute: impl Into<String>, comparator: Comparator, threshold: f64) -> Self {
        Self::Pseudo(PseudoFilter {
            attribute: attribute.into(),
            comparator,
            threshold,
        })
    }

    /// Conjunction of `parts`, collapsing a singleton to its only child.
    ///
    /// An empty input yields the always-true identity `And([])`.
    pub fn conjunction(mut parts: Vec<Selector<F>>) -> Self {
        match parts.len() {
            1 => parts.swap_remove(0),
            _ => Self::And(parts),
        }
    }

    /// Disjunction of `parts`, collapsing a singleton to its only child.
    ///
    /// An empty input yields the always-false identity `Or([])`.
    pub fn disjunction(mut parts: Vec<Selector<F>>) -> Self {
        match parts.len() {
            1 => parts.swap_remove(0),
            _ => Self::Or(parts),
        }
    }
}

/// Numeric attribute comparison used by the `[@attr > n]` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoFilter {
    /// Attribute name (without the `@`).
    pub attribute: String,
    /// Comparison operator.
    pub comparator: Comparator,
    /// Right-hand numeric operand.
    pub threshold: f64,
}

impl fmt::Display for PseudoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[@{} {} {}]", self.attribute, self.comparator, self.threshold)
    }
}

/// Comparison operator for [`PseudoFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `=`
    EqualTo,
}

impl Comparator {
    /// The operator as written in a stylesheet.
    pub fn symbol(&self) -> char {
        match self {
            Self::GreaterThan => '>',
            Self::LessThan => '<',
            Self::EqualTo => '=',
        }
    }

    /// Parse a comparator from its symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '>' => Some(Self::GreaterThan),
            '<' => Some(Self::LessThan),
            '=' => Some(Self::EqualTo),
            _ => None,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rendering sub-pass a property block is scoped to.
///
/// Pseudo-elements like `:stroke` or `:mark(2)` do not constrain which
/// features a rule matches; they tag which rendering pass the rule's
/// properties apply to. Absence means the default pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Context {
    /// A plain pseudo-element, e.g. `:mark`.
    PseudoClass(String),
    /// A pseudo-element with a numeric argument, e.g. `:mark(2)`. The
    /// argument is kept as text.
    ParameterizedPseudoClass(String, String),
}

impl Context {
    /// The pseudo-element name.
    pub fn name(&self) -> &str {
        match self {
            Self::PseudoClass(name) | Self::ParameterizedPseudoClass(name, _) => name,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PseudoClass(name) => write!(f, ":{}", name),
            Self::ParameterizedPseudoClass(name, arg) => write!(f, ":{}({})", name, arg),
        }
    }
}

/// One comma-separated unit of a selector list, as matched by the grammar:
/// selector tokens interleaved with pseudo-element tokens, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleSelector<F> {
    /// The matched tokens.
    pub tokens: Vec<SelectorToken<F>>,
}

/// A single token inside a [`SimpleSelector`].
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorToken<F> {
    /// A basic selector constraining which features match.
    Basic(Selector<F>),
    /// A pseudo-element tagging the rendering sub-pass.
    Context(Context),
}

impl<F> SimpleSelector<F> {
    /// Create a simple selector from its token list.
    pub fn new(tokens: Vec<SelectorToken<F>>) -> Self {
        Self { tokens }
    }

    /// The first pseudo-element token, if any.
    pub fn context(&self) -> Option<&Context> {
        self.tokens.iter().find_map(|token| match token {
            SelectorToken::Context(context) => Some(context),
            SelectorToken::Basic(_) => None,
        })
    }
}

impl<F: Clone> SimpleSelector<F> {
    /// Conjunction of the selector tokens; pseudo-element tokens are
    /// ignored. A lone token collapses to itself.
    pub fn combined(&self) -> Selector<F> {
        let parts = self
            .tokens
            .iter()
            .filter_map(|token| match token {
                SelectorToken::Basic(selector) => Some(selector.clone()),
                SelectorToken::Context(_) => None,
            })
            .collect();
        Selector::conjunction(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type PlainSelector = Selector<String>;

    #[test]
    fn conjunction_collapses_singleton() {
        let sel = PlainSelector::conjunction(vec![Selector::typename("roads")]);
        assert_eq!(sel, Selector::Typename("roads".into()));

        let sel = PlainSelector::conjunction(vec![
            Selector::typename("roads"),
            Selector::Filter("lanes > 2".into()),
        ]);
        assert!(matches!(sel, Selector::And(ref parts) if parts.len() == 2));
    }

    #[test]
    fn empty_combinators_are_identities() {
        assert_eq!(PlainSelector::conjunction(vec![]), Selector::And(vec![]));
        assert_eq!(PlainSelector::disjunction(vec![]), Selector::Or(vec![]));
    }

    #[test]
    fn simple_selector_takes_first_context() {
        let simple: SimpleSelector<String> = SimpleSelector::new(vec![
            SelectorToken::Basic(Selector::typename("roads")),
            SelectorToken::Context(Context::PseudoClass("stroke".into())),
            SelectorToken::Context(Context::PseudoClass("mark".into())),
        ]);

        assert_eq!(simple.context().unwrap().name(), "stroke");
        assert_eq!(simple.combined(), Selector::Typename("roads".into()));
    }

    #[test]
    fn context_display() {
        assert_eq!(Context::PseudoClass("mark".into()).to_string(), ":mark");
        assert_eq!(
            Context::ParameterizedPseudoClass("mark".into(), "2".into()).to_string(),
            ":mark(2)"
        );
    }
}
