//! Specificity-based regrouping of parsed selector lists.
//!
//! A single textual rule may list selectors of different cascade priority
//! (`#roads.45, * { ... }`). Folding those into one disjunction would erase
//! the priority difference the downstream cascade resolver orders rules by,
//! so the list is split: one output rule per distinct specificity, in
//! first-occurrence order. Selectors that share a priority stay together in
//! one disjunction, each keeping its own rendering context.

use super::{Selector, SimpleSelector, Specificity};
use crate::rules::{Binding, Description, Rule};
use crate::types::Property;

/// Split a parsed selector list into one rule per distinct specificity.
///
/// Each selector unit contributes one [`Binding`] to its group's rule,
/// pairing the unit's rendering context (if any) with the shared property
/// block. Two units in one group may carry the same context; duplicate
/// bindings are kept as-is rather than merged.
///
/// Grouping is stable: groups appear in the order their specificity first
/// occurs in the source list, not sorted by weight. Re-running the split on
/// its own output is a no-op, since every emitted rule is internally
/// uniform in specificity.
pub fn split<F, X>(
    description: Description,
    selectors: Vec<SimpleSelector<F>>,
    properties: Vec<Property<X>>,
) -> Vec<Rule<F, X>>
where
    F: Clone,
    X: Clone,
{
    let mut groups: Vec<(Specificity, Vec<SimpleSelector<F>>)> = Vec::new();

    for selector in selectors {
        let specificity = Specificity::of_simple_selector(&selector);
        match groups.iter_mut().find(|(existing, _)| *existing == specificity) {
            Some((_, members)) => members.push(selector),
            None => groups.push((specificity, vec![selector])),
        }
    }

    groups
        .into_iter()
        .map(|(_, members)| {
            let combined = members.iter().map(SimpleSelector::combined).collect();
            let bindings = members
                .iter()
                .map(|member| Binding::new(member.context().cloned(), properties.clone()))
                .collect();
            Rule::new(
                description.clone(),
                Selector::disjunction(combined),
                bindings,
            )
        })
        .collect()
}
