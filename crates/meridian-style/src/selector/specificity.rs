//! Cascade specificity calculation.

use std::iter::Sum;
use std::ops::Add;

use super::{Selector, SelectorToken, SimpleSelector};

/// Cascade priority as an (id, filter, type) tuple.
///
/// - id: feature-id selectors
/// - filter: embedded filters and `[@attr op n]` comparisons
/// - type: type-name selectors
///
/// Compared lexicographically, so any id selector outweighs any combination
/// of filters and any filter outweighs any combination of type names:
/// `(1,0,0) > (0,99,99)`. The wildcard `*` carries no weight at all.
/// Addition is componentwise, commutative, with [`Specificity::ZERO`] as
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Zero specificity (wildcard selector).
    pub const ZERO: Self = Self(0, 0, 0);

    /// Calculate the specificity of a selector.
    ///
    /// Conjunctions sum the weights of their children. Disjunctions are
    /// never built from mixed-priority members by the grouping engine, so
    /// scoring one takes the maximum of its children, which equals every
    /// member's weight on grouped output.
    pub fn of_selector<F>(selector: &Selector<F>) -> Self {
        match selector {
            Selector::Accept => Self::ZERO,
            Selector::Typename(_) => Self(0, 0, 1),
            Selector::Id(_) => Self(1, 0, 0),
            Selector::Pseudo(_) | Selector::Filter(_) => Self(0, 1, 0),
            Selector::And(parts) => parts.iter().map(Self::of_selector).sum(),
            Selector::Or(parts) => parts
                .iter()
                .map(Self::of_selector)
                .max()
                .unwrap_or(Self::ZERO),
        }
    }

    /// Calculate the specificity of one comma-separated selector unit.
    ///
    /// Only selector tokens are weighed; pseudo-element tokens tag a
    /// rendering pass and carry no cascade priority.
    pub fn of_simple_selector<F>(simple: &SimpleSelector<F>) -> Self {
        simple
            .tokens
            .iter()
            .map(|token| match token {
                SelectorToken::Basic(selector) => Self::of_selector(selector),
                SelectorToken::Context(_) => Self::ZERO,
            })
            .sum()
    }

    /// Get the feature-id selector count.
    pub fn ids(&self) -> u32 {
        self.0
    }

    /// Get the filter/comparison count.
    pub fn filters(&self) -> u32 {
        self.1
    }

    /// Get the type-name selector count.
    pub fn typenames(&self) -> u32 {
        self.2
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl Sum for Specificity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Specificity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}
