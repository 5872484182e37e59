//! Disambiguation of bracketed embedded expressions.
//!
//! The bracket syntax deliberately reuses one notation for two different
//! sub-grammars: a boolean filter in selector position, a scalar expression
//! in value position. The bracket's own syntax cannot tell them apart; the
//! surrounding grammar decides which interpretation is required, and each
//! candidate is attempted against the collaborating engine in a fixed
//! order. Exactly one of the two grammars must accept the text; there is no
//! coercion between them.

use crate::engine::ExpressionEngine;
use crate::parser::Position;
use crate::selector::Selector;
use crate::types::Value;
use crate::{Error, Result};

/// Resolve bracketed text appearing in selector position.
///
/// The filter grammar is attempted first. Text that the engine accepts only
/// as a scalar expression is rejected: the language does not coerce scalar
/// values into booleans.
pub fn resolve_selector<E: ExpressionEngine>(
    engine: &E,
    text: &str,
    at: Position,
) -> Result<Selector<E::Filter>> {
    let rejected = match engine.parse_filter(text) {
        Ok(filter) => {
            tracing::trace!("bracket expression '{}' resolved as filter", text);
            return Ok(Selector::Filter(filter));
        }
        Err(e) => e,
    };

    match engine.parse_expression(text) {
        Ok(_) => Err(Error::embedded(
            format!("'{text}' is a scalar expression, but selector position requires a boolean filter"),
            at,
        )),
        Err(_) => Err(Error::embedded(
            format!("'{text}' is not a valid filter: {rejected}"),
            at,
        )),
    }
}

/// Resolve bracketed text appearing in value position.
///
/// The expression grammar is attempted first. Text that the engine accepts
/// only as a boolean filter is rejected: a filter is not usable where a
/// scalar value is expected.
pub fn resolve_value<E: ExpressionEngine>(
    engine: &E,
    text: &str,
    at: Position,
) -> Result<Value<E::Expression>> {
    let rejected = match engine.parse_expression(text) {
        Ok(expression) => {
            tracing::trace!("bracket expression '{}' resolved as scalar expression", text);
            return Ok(Value::Expression(expression));
        }
        Err(e) => e,
    };

    match engine.parse_filter(text) {
        Ok(_) => Err(Error::embedded(
            format!("'{text}' is a boolean filter, but value position requires a scalar expression"),
            at,
        )),
        Err(_) => Err(Error::embedded(
            format!("'{text}' is not a valid expression: {rejected}"),
            at,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::StubEngine;

    const AT: Position = Position { line: 1, column: 1 };

    #[test]
    fn filter_text_resolves_in_selector_position() {
        let selector = resolve_selector(&StubEngine, "population > 10000", AT).unwrap();
        assert_eq!(
            selector,
            Selector::Filter("population > 10000".to_string())
        );
    }

    #[test]
    fn expression_text_resolves_in_value_position() {
        let value = resolve_value(&StubEngine, "population * 2", AT).unwrap();
        assert_eq!(value, Value::Expression("population * 2".to_string()));
    }

    #[test]
    fn scalar_expression_is_rejected_in_selector_position() {
        let err = resolve_selector(&StubEngine, "population * 2", AT).unwrap_err();
        assert!(matches!(err, Error::EmbeddedExpression { .. }));
    }

    #[test]
    fn filter_is_rejected_in_value_position() {
        let err = resolve_value(&StubEngine, "population > 10000", AT).unwrap_err();
        assert!(matches!(err, Error::EmbeddedExpression { .. }));
    }

    #[test]
    fn garbage_is_rejected_in_both_positions() {
        assert!(resolve_selector(&StubEngine, "%%", AT).is_err());
        assert!(resolve_value(&StubEngine, "%%", AT).is_err());
    }
}
