//! Single style rule definition.

use crate::selector::{Context, Selector, Specificity};
use crate::types::Property;

/// Free-text title attached to a rule.
///
/// Taken from the last comment block immediately preceding the rule in the
/// stylesheet; empty when the rule has no preceding comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    /// The title text, if any.
    pub title: Option<String>,
}

impl Description {
    /// An empty description.
    pub fn none() -> Self {
        Self::default()
    }

    /// A description with the given title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Whether no title is attached.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
    }
}

/// A property block paired with the rendering sub-pass it applies to.
///
/// `context: None` means the default pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<X> {
    /// The rendering sub-pass, if the selector named one.
    pub context: Option<Context>,
    /// The properties to apply under that pass.
    pub properties: Vec<Property<X>>,
}

impl<X> Binding<X> {
    /// Create a binding.
    pub fn new(context: Option<Context>, properties: Vec<Property<X>>) -> Self {
        Self {
            context,
            properties,
        }
    }
}

/// A style rule pairing a selector with its rendering bindings.
///
/// Each rule has:
/// - An optional description taken from the preceding comment
/// - A single combined selector, normally a disjunction of conjunctions
/// - One binding per source selector, pairing an optional rendering
///   context with the property block
///
/// Every selector folded into one rule shares the same cascade
/// specificity; the parser splits mixed-priority selector lists into
/// separate rules before they get here.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<F, X> {
    /// Title from the nearest preceding comment block.
    pub description: Description,
    /// The combined selector for matching features.
    pub selector: Selector<F>,
    /// Rendering contexts paired with the property block.
    pub bindings: Vec<Binding<X>>,
}

impl<F, X> Rule<F, X> {
    /// Create a new rule.
    pub fn new(description: Description, selector: Selector<F>, bindings: Vec<Binding<X>>) -> Self {
        Self {
            description,
            selector,
            bindings,
        }
    }

    /// The cascade priority of this rule's selector.
    pub fn specificity(&self) -> Specificity {
        Specificity::of_selector(&self.selector)
    }

    /// The properties bound to the default rendering pass, if any.
    pub fn default_properties(&self) -> Option<&[Property<X>]> {
        self.bindings
            .iter()
            .find(|binding| binding.context.is_none())
            .map(|binding| binding.properties.as_slice())
    }

    /// Iterate over the named rendering contexts this rule touches.
    pub fn contexts(&self) -> impl Iterator<Item = &Context> {
        self.bindings
            .iter()
            .filter_map(|binding| binding.context.as_ref())
    }
}
