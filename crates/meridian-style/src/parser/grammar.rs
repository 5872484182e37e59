//! Recursive-descent grammar for the stylesheet language.
//!
//! A stylesheet is a sequence of rule definitions:
//!
//! ```text
//! stylesheet      := rule*
//! rule            := comment* selector-list block
//! selector-list   := simple-selector (',' simple-selector)*
//! simple-selector := (basic-selector | pseudo-element)+
//! basic-selector  := '*' | '#' fid | typename | '[@' ident cmp number ']'
//!                   | '[' raw ']'
//! pseudo-element  := ':' ident | ':' ident '(' number ')'
//! block           := '{' property (';' property)* ';'? '}'
//! property        := propname ':' value-list (',' value-list)*
//! ```
//!
//! Whitespace and `/* ... */` comments are skipped between tokens; the last
//! comment of a run immediately preceding a rule becomes the rule's
//! description. Every production is a pure function from a cursor to a
//! result plus the cursor past what it consumed; the first error aborts the
//! whole parse with no partial rule list.

use crate::engine::ExpressionEngine;
use crate::parser::cursor::{Cursor, Position};
use crate::parser::embedded;
use crate::rules::{Description, Rule};
use crate::selector::{
    Comparator, Context, PseudoFilter, Selector, SelectorToken, SimpleSelector,
};
use crate::types::{Property, Value};
use crate::{Error, Result};

/// Parse a stylesheet string into cascade-ready rules.
///
/// Bracketed embedded expressions are handed to `engine`; a bracket in
/// selector position must parse as a boolean filter, one in value position
/// as a scalar expression.
///
/// Rules come back in source order, except that a rule whose selector list
/// mixes cascade priorities is split into one rule per distinct priority
/// (see [`crate::selector::split`]), so every returned rule is internally
/// uniform and the downstream cascade can order rules by specificity alone.
///
/// # Errors
///
/// Any structural violation fails the whole parse: no partial rule list is
/// returned, and the error carries the line/column of the first unconsumed
/// input along with what was expected there.
pub fn parse_css<E: ExpressionEngine>(
    css: &str,
    engine: &E,
) -> Result<Vec<Rule<E::Filter, E::Expression>>> {
    let mut rules = Vec::new();
    let mut cursor = Cursor::new(css);

    loop {
        let (comments, next) = skip_trivia(cursor)?;
        cursor = next;

        if cursor.is_at_end() {
            break;
        }

        let description = match comments.last() {
            Some(text) => Description::with_title(text.clone()),
            None => Description::none(),
        };

        let (selectors, next) = parse_selector_list(cursor, engine)?;
        let (properties, next) = parse_block(next, engine)?;
        cursor = next;

        rules.extend(crate::selector::split(description, selectors, properties));
    }

    tracing::debug!("parsed stylesheet: {} rules", rules.len());
    Ok(rules)
}

/// Skip whitespace and comments, returning the comment texts crossed.
fn skip_trivia(cursor: Cursor<'_>) -> Result<(Vec<String>, Cursor<'_>)> {
    let mut comments = Vec::new();
    let mut cursor = cursor;

    loop {
        while let Some(ch) = cursor.peek() {
            if ch.is_whitespace() {
                cursor = cursor.advance(ch.len_utf8());
            } else {
                break;
            }
        }

        if !cursor.starts_with("/*") {
            break;
        }

        let open = cursor;
        let body = cursor.advance(2);
        let Some(end) = body.rest().find("*/") else {
            return Err(Error::lexical("unterminated comment", open.position()));
        };
        comments.push(comment_text(&body.rest()[..end]));
        cursor = body.advance(end + 2);
    }

    Ok((comments, cursor))
}

/// Strip the decorative margin from a comment body.
fn comment_text(body: &str) -> String {
    body.lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_selector_list<'a, E: ExpressionEngine>(
    cursor: Cursor<'a>,
    engine: &E,
) -> Result<(Vec<SimpleSelector<E::Filter>>, Cursor<'a>)> {
    let (first, mut cursor) = parse_simple_selector(cursor, engine)?;
    let mut selectors = vec![first];

    loop {
        let (_, ahead) = skip_trivia(cursor)?;
        if ahead.peek() == Some(',') {
            let (selector, next) = parse_simple_selector(ahead.advance(1), engine)?;
            selectors.push(selector);
            cursor = next;
        } else {
            cursor = ahead;
            break;
        }
    }

    Ok((selectors, cursor))
}

fn parse_simple_selector<'a, E: ExpressionEngine>(
    cursor: Cursor<'a>,
    engine: &E,
) -> Result<(SimpleSelector<E::Filter>, Cursor<'a>)> {
    let (_, mut cursor) = skip_trivia(cursor)?;
    let mut tokens = Vec::new();

    loop {
        match cursor.peek() {
            None | Some(',') | Some('{') => break,
            Some(_) => {
                let (token, next) = parse_selector_token(cursor, engine)?;
                tokens.push(token);
                let (_, next) = skip_trivia(next)?;
                cursor = next;
            }
        }
    }

    if tokens.is_empty() {
        return Err(Error::syntax("a selector", cursor.position()));
    }

    Ok((SimpleSelector::new(tokens), cursor))
}

fn parse_selector_token<'a, E: ExpressionEngine>(
    cursor: Cursor<'a>,
    engine: &E,
) -> Result<(SelectorToken<E::Filter>, Cursor<'a>)> {
    match cursor.peek() {
        Some('*') => Ok((SelectorToken::Basic(Selector::Accept), cursor.advance(1))),

        Some('#') => {
            let (fid, next) = parse_feature_id(cursor.advance(1))?;
            Ok((SelectorToken::Basic(Selector::Id(fid.to_string())), next))
        }

        Some(':') => {
            let (context, next) = parse_pseudo_element(cursor)?;
            Ok((SelectorToken::Context(context), next))
        }

        Some('[') if cursor.starts_with("[@") => {
            let (pseudo, next) = parse_pseudo_numeric(cursor)?;
            Ok((SelectorToken::Basic(Selector::Pseudo(pseudo)), next))
        }

        Some('[') => {
            let open = cursor.position();
            let (text, next) = parse_bracket_raw(cursor)?;
            let selector = embedded::resolve_selector(engine, text.trim(), open)?;
            Ok((SelectorToken::Basic(selector), next))
        }

        Some(ch) if ch.is_ascii_alphabetic() => {
            let (name, next) = parse_identifier(cursor)?;
            Ok((
                SelectorToken::Basic(Selector::Typename(name.to_string())),
                next,
            ))
        }

        _ => Err(Error::syntax("a selector", cursor.position())),
    }
}

/// identifier: a letter followed by letters, digits, hyphens, underscores.
fn parse_identifier(cursor: Cursor<'_>) -> Result<(&str, Cursor<'_>)> {
    scan_name(cursor, false)
}

/// fid: like an identifier, but `.` is also allowed inside.
fn parse_feature_id(cursor: Cursor<'_>) -> Result<(&str, Cursor<'_>)> {
    scan_name(cursor, true)
}

fn scan_name(cursor: Cursor<'_>, allow_dots: bool) -> Result<(&str, Cursor<'_>)> {
    match cursor.peek() {
        Some(ch) if ch.is_ascii_alphabetic() => {}
        _ => return Err(Error::syntax("an identifier", cursor.position())),
    }

    let mut end = cursor;
    while let Some(ch) = end.peek() {
        let continues =
            ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || (allow_dots && ch == '.');
        if continues {
            end = end.advance(ch.len_utf8());
        } else {
            break;
        }
    }

    Ok((cursor.text_until(&end), end))
}

/// numeric-literal: optional sign, digits, optional fraction.
fn scan_number(cursor: Cursor<'_>) -> Result<(&str, Cursor<'_>)> {
    let start = cursor;
    let mut end = cursor;

    if end.peek() == Some('-') {
        end = end.advance(1);
    }

    let int_start = end.offset();
    while matches!(end.peek(), Some(c) if c.is_ascii_digit()) {
        end = end.advance(1);
    }
    if end.offset() == int_start {
        return Err(Error::syntax("a number", start.position()));
    }

    if end.peek() == Some('.') {
        let mut frac = end.advance(1);
        let frac_start = frac.offset();
        while matches!(frac.peek(), Some(c) if c.is_ascii_digit()) {
            frac = frac.advance(1);
        }
        if frac.offset() > frac_start {
            end = frac;
        }
    }

    Ok((start.text_until(&end), end))
}

/// pseudo-element: `:name` or `:name(number)`.
fn parse_pseudo_element(cursor: Cursor<'_>) -> Result<(Context, Cursor<'_>)> {
    let (name, cursor) = parse_identifier(cursor.advance(1))?;

    if cursor.peek() != Some('(') {
        return Ok((Context::PseudoClass(name.to_string()), cursor));
    }

    let (_, inner) = skip_trivia(cursor.advance(1))?;
    let (number, inner) = scan_number(inner)?;
    let (_, inner) = skip_trivia(inner)?;
    if inner.peek() != Some(')') {
        return Err(Error::syntax(
            "')' to close the pseudo-element argument",
            inner.position(),
        ));
    }

    Ok((
        Context::ParameterizedPseudoClass(name.to_string(), number.to_string()),
        inner.advance(1),
    ))
}

/// pseudo-numeric: `[@attr > n]` comparison shorthand.
fn parse_pseudo_numeric(cursor: Cursor<'_>) -> Result<(PseudoFilter, Cursor<'_>)> {
    let (attribute, cursor) = parse_identifier(cursor.advance(2))?;
    let (_, cursor) = skip_trivia(cursor)?;

    let comparator = cursor
        .peek()
        .and_then(Comparator::from_symbol)
        .ok_or_else(|| Error::syntax("a comparator ('>', '<' or '=')", cursor.position()))?;

    let (_, cursor) = skip_trivia(cursor.advance(1))?;
    let (number, cursor) = scan_number(cursor)?;
    let threshold: f64 = number
        .parse()
        .map_err(|_| Error::lexical(format!("malformed number '{number}'"), cursor.position()))?;

    let (_, cursor) = skip_trivia(cursor)?;
    if cursor.peek() != Some(']') {
        return Err(Error::syntax(
            "']' to close the comparison",
            cursor.position(),
        ));
    }

    Ok((
        PseudoFilter {
            attribute: attribute.to_string(),
            comparator,
            threshold,
        },
        cursor.advance(1),
    ))
}

/// Capture the raw text between a balanced pair of brackets. Text inside a
/// matching pair of quotes is opaque, so a `]` in a string literal does not
/// terminate the capture early.
fn parse_bracket_raw(cursor: Cursor<'_>) -> Result<(&str, Cursor<'_>)> {
    let open = cursor;
    let inner_start = cursor.advance(1);
    let mut current = inner_start;
    let mut depth = 1usize;

    while let Some((ch, next)) = current.bump() {
        match ch {
            '\'' | '"' => current = skip_quoted(next, ch, current.position())?,
            '[' => {
                depth += 1;
                current = next;
            }
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((inner_start.text_until(&current), next));
                }
                current = next;
            }
            _ => current = next,
        }
    }

    Err(Error::lexical(
        "unterminated bracket expression",
        open.position(),
    ))
}

/// Advance past a quoted run, starting just after the opening quote.
fn skip_quoted(cursor: Cursor<'_>, quote: char, opened_at: Position) -> Result<Cursor<'_>> {
    let mut current = cursor;
    while let Some((ch, next)) = current.bump() {
        if ch == '\\' {
            current = next.bump().map(|(_, after)| after).unwrap_or(next);
        } else if ch == quote {
            return Ok(next);
        } else {
            current = next;
        }
    }
    Err(Error::lexical("unterminated string", opened_at))
}

/// block: `{ property (';' property)* ';'? }`.
fn parse_block<'a, E: ExpressionEngine>(
    cursor: Cursor<'a>,
    engine: &E,
) -> Result<(Vec<Property<E::Expression>>, Cursor<'a>)> {
    let (_, cursor) = skip_trivia(cursor)?;
    if cursor.peek() != Some('{') {
        return Err(Error::syntax("'{' to open the rule block", cursor.position()));
    }

    let mut properties = Vec::new();
    let (_, mut cursor) = skip_trivia(cursor.advance(1))?;

    loop {
        match cursor.peek() {
            Some('}') => {
                cursor = cursor.advance(1);
                break;
            }
            Some(';') => {
                let (_, next) = skip_trivia(cursor.advance(1))?;
                cursor = next;
            }
            None => {
                return Err(Error::syntax("'}' to close the rule block", cursor.position()));
            }
            Some(_) => {
                let (property, next) = parse_property(cursor, engine)?;
                properties.push(property);
                let (_, next) = skip_trivia(next)?;
                match next.peek() {
                    Some(';') | Some('}') => cursor = next,
                    _ => {
                        return Err(Error::syntax("';' or '}' after a property", next.position()));
                    }
                }
            }
        }
    }

    Ok((properties, cursor))
}

/// property: `propname ':' value-list (',' value-list)*`.
fn parse_property<'a, E: ExpressionEngine>(
    cursor: Cursor<'a>,
    engine: &E,
) -> Result<(Property<E::Expression>, Cursor<'a>)> {
    let (name, cursor) = parse_property_name(cursor)?;

    let (_, cursor) = skip_trivia(cursor)?;
    if cursor.peek() != Some(':') {
        return Err(Error::syntax(
            format!("':' after property name '{name}'"),
            cursor.position(),
        ));
    }

    let (first, mut cursor) = parse_value_list(cursor.advance(1), engine)?;
    let mut alternatives = vec![first];

    loop {
        let (_, ahead) = skip_trivia(cursor)?;
        if ahead.peek() == Some(',') {
            let (list, next) = parse_value_list(ahead.advance(1), engine)?;
            alternatives.push(list);
            cursor = next;
        } else {
            cursor = ahead;
            break;
        }
    }

    Ok((Property::new(name, alternatives), cursor))
}

/// propname: an identifier, optionally with a single leading hyphen.
fn parse_property_name(cursor: Cursor<'_>) -> Result<(String, Cursor<'_>)> {
    if cursor.peek() == Some('-') {
        let rest = cursor.advance(1);
        if matches!(rest.peek(), Some(c) if c.is_ascii_alphabetic()) {
            let (name, next) = parse_identifier(rest)?;
            return Ok((format!("-{name}"), next));
        }
        return Err(Error::syntax("a property name", cursor.position()));
    }

    let (name, next) =
        parse_identifier(cursor).map_err(|_| Error::syntax("a property name", cursor.position()))?;
    Ok((name.to_string(), next))
}

/// value-list: one or more space-separated values.
fn parse_value_list<'a, E: ExpressionEngine>(
    cursor: Cursor<'a>,
    engine: &E,
) -> Result<(Vec<Value<E::Expression>>, Cursor<'a>)> {
    let (_, cursor) = skip_trivia(cursor)?;
    let (first, mut cursor) = parse_value(cursor, engine)?;
    let mut values = vec![first];

    loop {
        let (_, ahead) = skip_trivia(cursor)?;
        match ahead.peek() {
            None | Some(';') | Some('}') | Some(',') => {
                cursor = ahead;
                break;
            }
            Some(_) => {
                let (value, next) = parse_value(ahead, engine)?;
                values.push(value);
                cursor = next;
            }
        }
    }

    Ok((values, cursor))
}

fn parse_value<'a, E: ExpressionEngine>(
    cursor: Cursor<'a>,
    engine: &E,
) -> Result<(Value<E::Expression>, Cursor<'a>)> {
    match cursor.peek() {
        Some('[') => {
            let open = cursor.position();
            let (text, next) = parse_bracket_raw(cursor)?;
            let value = embedded::resolve_value(engine, text.trim(), open)?;
            Ok((value, next))
        }
        Some(quote @ ('\'' | '"')) => parse_quoted_string(cursor, quote),
        Some('#') => parse_color(cursor),
        Some(ch) if ch.is_ascii_digit() || ch == '-' => parse_numeric(cursor),
        Some(ch) if ch.is_ascii_alphabetic() => parse_identifier_value(cursor, engine),
        _ => Err(Error::syntax("a value", cursor.position())),
    }
}

/// quoted-string: the quotes are not part of the captured value.
fn parse_quoted_string<X>(cursor: Cursor<'_>, quote: char) -> Result<(Value<X>, Cursor<'_>)> {
    let open = cursor;
    let mut current = cursor.advance(1);

    while let Some((ch, next)) = current.bump() {
        if ch == '\\' {
            current = next.bump().map(|(_, after)| after).unwrap_or(next);
        } else if ch == quote {
            let content = open.advance(1).text_until(&current);
            return Ok((Value::Literal(content.to_string()), next));
        } else {
            current = next;
        }
    }

    Err(Error::lexical("unterminated string", open.position()))
}

/// color: `#` followed by 6 or 3 hex digits.
fn parse_color<X>(cursor: Cursor<'_>) -> Result<(Value<X>, Cursor<'_>)> {
    let start = cursor;
    let mut end = cursor.advance(1);

    while matches!(end.peek(), Some(c) if c.is_ascii_hexdigit()) {
        end = end.advance(1);
    }

    let digits = start.advance(1).text_until(&end);
    if digits.len() != 6 && digits.len() != 3 {
        return Err(Error::lexical(
            format!("malformed color '#{digits}': expected 3 or 6 hex digits"),
            start.position(),
        ));
    }

    Ok((Value::Literal(start.text_until(&end).to_string()), end))
}

/// numeric-literal, percentage, or measured-number, kept as written. The
/// classes are mutually exclusive and tried in that priority order.
fn parse_numeric<X>(cursor: Cursor<'_>) -> Result<(Value<X>, Cursor<'_>)> {
    let start = cursor;
    let (_, end) = scan_number(cursor)?;

    if end.peek() == Some('%') {
        let end = end.advance(1);
        return Ok((Value::Literal(start.text_until(&end).to_string()), end));
    }

    let mut unit_end = end;
    while matches!(unit_end.peek(), Some(c) if c.is_ascii_alphabetic()) {
        unit_end = unit_end.advance(1);
    }

    Ok((Value::Literal(start.text_until(&unit_end).to_string()), unit_end))
}

/// identifier, function-call, or url-literal.
fn parse_identifier_value<'a, E: ExpressionEngine>(
    cursor: Cursor<'a>,
    engine: &E,
) -> Result<(Value<E::Expression>, Cursor<'a>)> {
    let (name, next) = parse_identifier(cursor)?;

    if next.peek() != Some('(') {
        return Ok((Value::Literal(name.to_string()), next));
    }

    if name.eq_ignore_ascii_case("url") {
        return parse_url_literal(next, cursor.position());
    }

    parse_function_call(name, next, engine)
}

/// url-literal: the argument is captured verbatim (surrounding quotes
/// stripped), since unquoted paths may contain characters the value
/// grammar would otherwise reject.
fn parse_url_literal<X>(cursor: Cursor<'_>, opened_at: Position) -> Result<(Value<X>, Cursor<'_>)> {
    let inner_start = cursor.advance(1);
    let mut current = inner_start;
    let mut depth = 1usize;

    while let Some((ch, next)) = current.bump() {
        match ch {
            '\'' | '"' => current = skip_quoted(next, ch, current.position())?,
            '(' => {
                depth += 1;
                current = next;
            }
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let target = strip_quotes(inner_start.text_until(&current).trim());
                    return Ok((
                        Value::Function("url".to_string(), vec![Value::Literal(target.to_string())]),
                        next,
                    ));
                }
                current = next;
            }
            _ => current = next,
        }
    }

    Err(Error::lexical("unterminated url literal", opened_at))
}

fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if text.len() >= 2 && (bytes[0] == b'\'' || bytes[0] == b'"') && bytes[text.len() - 1] == bytes[0]
    {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// function-call: `name '(' value (',' value)* ')'`.
fn parse_function_call<'a, E: ExpressionEngine>(
    name: &str,
    cursor: Cursor<'a>,
    engine: &E,
) -> Result<(Value<E::Expression>, Cursor<'a>)> {
    let mut args = Vec::new();
    let (_, mut current) = skip_trivia(cursor.advance(1))?;

    if current.peek() == Some(')') {
        return Ok((Value::Function(name.to_string(), args), current.advance(1)));
    }

    loop {
        let (value, next) = parse_value(current, engine)?;
        args.push(value);

        let (_, next) = skip_trivia(next)?;
        match next.peek() {
            Some(',') => {
                let (_, after) = skip_trivia(next.advance(1))?;
                current = after;
            }
            Some(')') => {
                return Ok((Value::Function(name.to_string(), args), next.advance(1)));
            }
            _ => {
                return Err(Error::syntax(
                    "',' or ')' in function arguments",
                    next.position(),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::StubEngine;
    use crate::rules::Binding;

    fn parse(css: &str) -> Result<Vec<Rule<String, String>>> {
        parse_css(css, &StubEngine)
    }

    #[test]
    fn wildcard_rule_round_trip() {
        let rules = parse("* { fill: red; }").unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, Selector::Accept);
        assert_eq!(
            rules[0].bindings,
            vec![Binding::new(
                None,
                vec![Property::single("fill", Value::literal("red"))]
            )]
        );
        assert!(rules[0].description.is_empty());
    }

    #[test]
    fn parse_is_deterministic() {
        let css = "/* Roads */ roads [lanes > 2]:stroke { stroke: #303030, blue; }";
        assert_eq!(parse(css).unwrap(), parse(css).unwrap());
    }

    #[test]
    fn multi_value_alternatives() {
        let rules = parse("#a { stroke-width: 2 4, 1 1; }").unwrap();

        assert_eq!(rules.len(), 1);
        let property = &rules[0].bindings[0].properties[0];
        assert_eq!(property.name, "stroke-width");
        assert_eq!(
            property.alternatives,
            vec![
                vec![Value::literal("2"), Value::literal("4")],
                vec![Value::literal("1"), Value::literal("1")],
            ]
        );
    }

    #[test]
    fn mixed_specificity_list_splits() {
        let rules = parse("#a, * { fill: red; }").unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].selector, Selector::Id("a".into()));
        assert_eq!(rules[1].selector, Selector::Accept);
        let props = vec![Property::single("fill", Value::literal("red"))];
        assert_eq!(rules[0].bindings, vec![Binding::new(None, props.clone())]);
        assert_eq!(rules[1].bindings, vec![Binding::new(None, props)]);
    }

    #[test]
    fn equal_specificity_list_keeps_contexts_in_one_rule() {
        let rules = parse("roads:mark, rivers:stroke { fill: red; }").unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules[0].selector,
            Selector::Or(vec![
                Selector::Typename("roads".into()),
                Selector::Typename("rivers".into()),
            ])
        );
        assert_eq!(rules[0].bindings.len(), 2);
        assert_eq!(
            rules[0].bindings[0].context,
            Some(Context::PseudoClass("mark".into()))
        );
        assert_eq!(
            rules[0].bindings[1].context,
            Some(Context::PseudoClass("stroke".into()))
        );
        assert_eq!(
            rules[0].bindings[0].properties,
            rules[0].bindings[1].properties
        );
    }

    #[test]
    fn bracket_in_selector_position_is_a_filter() {
        let rules = parse("[population > 10000] { fill: red; }").unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules[0].selector,
            Selector::Filter("population > 10000".into())
        );
    }

    #[test]
    fn bracket_in_value_position_is_an_expression() {
        let rules = parse("* { fill: [population * 2]; }").unwrap();

        assert_eq!(
            rules[0].bindings[0].properties[0].alternatives,
            vec![vec![Value::Expression("population * 2".into())]]
        );
    }

    #[test]
    fn arithmetic_bracket_in_selector_position_is_an_error() {
        let err = parse("[population * 2] { fill: red; }").unwrap_err();
        assert!(matches!(err, Error::EmbeddedExpression { .. }));
    }

    #[test]
    fn typename_and_filter_form_a_conjunction() {
        let rules = parse("roads [lanes > 2] { stroke: black; }").unwrap();

        assert_eq!(
            rules[0].selector,
            Selector::And(vec![
                Selector::Typename("roads".into()),
                Selector::Filter("lanes > 2".into()),
            ])
        );
    }

    #[test]
    fn pseudo_numeric_comparison() {
        let rules = parse("[@scale > 1000] { stroke: blue; }").unwrap();

        assert_eq!(
            rules[0].selector,
            Selector::pseudo("scale", Comparator::GreaterThan, 1000.0)
        );
    }

    #[test]
    fn quote_aware_bracket_capture() {
        let rules = parse("[name = 'a ] b'] { fill: red; }").unwrap();

        assert_eq!(rules[0].selector, Selector::Filter("name = 'a ] b'".into()));
    }

    #[test]
    fn parameterized_pseudo_element() {
        let rules = parse("roads:mark(2) { size: 3; }").unwrap();

        assert_eq!(
            rules[0].bindings[0].context,
            Some(Context::ParameterizedPseudoClass("mark".into(), "2".into()))
        );
    }

    #[test]
    fn feature_id_allows_dots() {
        let rules = parse("#states.45 { fill: red; }").unwrap();
        assert_eq!(rules[0].selector, Selector::Id("states.45".into()));
    }

    #[test]
    fn comment_run_becomes_description() {
        let rules = parse("/* ignored */ /* Major roads */ roads { stroke: black; }").unwrap();

        assert_eq!(rules[0].description, Description::with_title("Major roads"));
    }

    #[test]
    fn comments_inside_rules_are_skipped() {
        let rules = parse("roads /* c1 */ { /* c2 */ stroke: black; /* c3 */ }").unwrap();

        assert_eq!(rules.len(), 1);
        assert!(rules[0].description.is_empty());
        assert_eq!(rules[0].bindings[0].properties.len(), 1);
    }

    #[test]
    fn lexical_value_classes() {
        let rules =
            parse("* { stroke-width: 10px; opacity: 50%; fill: #ff0000; label: 'main st'; }")
                .unwrap();

        let properties = &rules[0].bindings[0].properties;
        assert_eq!(properties[0].alternatives, vec![vec![Value::literal("10px")]]);
        assert_eq!(properties[1].alternatives, vec![vec![Value::literal("50%")]]);
        assert_eq!(
            properties[2].alternatives,
            vec![vec![Value::literal("#ff0000")]]
        );
        assert_eq!(
            properties[3].alternatives,
            vec![vec![Value::literal("main st")]]
        );
    }

    #[test]
    fn url_and_function_values() {
        let rules = parse("* { mark: url(http://example.com/a.png); width: sum(2, 3); }").unwrap();

        let properties = &rules[0].bindings[0].properties;
        assert_eq!(
            properties[0].alternatives,
            vec![vec![Value::function(
                "url",
                vec![Value::literal("http://example.com/a.png")]
            )]]
        );
        assert_eq!(
            properties[1].alternatives,
            vec![vec![Value::function(
                "sum",
                vec![Value::literal("2"), Value::literal("3")]
            )]]
        );
    }

    #[test]
    fn missing_colon_fails_at_the_value() {
        let err = parse("#a { fill red }").unwrap_err();

        match err {
            Error::Syntax {
                expected,
                line,
                column,
            } => {
                assert!(expected.contains("':'"), "unexpected expectation: {expected}");
                assert_eq!((line, column), (1, 11));
            }
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn whole_parse_fails_as_a_unit() {
        let err = parse("* { fill: red; }\n#a { fill red }").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));
    }

    #[test]
    fn unterminated_constructs_are_lexical_errors() {
        assert!(matches!(
            parse("/* never closed").unwrap_err(),
            Error::Lexical { .. }
        ));
        assert!(matches!(
            parse("[population > 10 { fill: red; }").unwrap_err(),
            Error::Lexical { .. }
        ));
        assert!(matches!(
            parse("* { label: 'open; }").unwrap_err(),
            Error::Lexical { .. }
        ));
    }

    #[test]
    fn unterminated_block_is_a_syntax_error() {
        assert!(matches!(
            parse("* { fill: red; ").unwrap_err(),
            Error::Syntax { .. }
        ));
    }

    #[test]
    fn missing_selector_is_a_syntax_error() {
        assert!(matches!(
            parse("{ fill: red; }").unwrap_err(),
            Error::Syntax { .. }
        ));
    }

    #[test]
    fn trailing_semicolon_and_empty_stylesheet() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   /* just a comment */  ").unwrap().is_empty());

        let rules = parse("* { fill: red; stroke: blue }").unwrap();
        assert_eq!(rules[0].bindings[0].properties.len(), 2);
    }

    #[test]
    fn hyphen_leading_property_name() {
        let rules = parse("* { -gt-label-priority: 10; }").unwrap();
        assert_eq!(
            rules[0].bindings[0].properties[0].name,
            "-gt-label-priority"
        );
    }
}
