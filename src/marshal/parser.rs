//! Nom grammar for RFC 4512 definition descriptions.
//!
//! The parser only tokenizes: it yields the leading identifier and an
//! ordered list of `(label, values)` clauses. What a label means is decided
//! by the marshal engine for the target kind.
//!
//! ## Accepted value forms
//!
//! - quoted strings: `'caseIgnoreMatch'` (with `\27` / `\5C` escapes)
//! - bare words: OIDs, descriptors, rule IDs, `noidlen` such as `1.2.3{64}`
//! - parenthesised lists of either, separated by whitespace and/or `$`

use crate::value_objects::unescape_qdstring;
use nom::{
    Finish, IResult,
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, value},
    multi::many0,
    sequence::{delimited, preceded, tuple},
};

/// Labels that stand alone without a value.
const FLAG_LABELS: &[&str] = &[
    "OBSOLETE",
    "SINGLE-VALUE",
    "COLLECTIVE",
    "NO-USER-MODIFICATION",
    "ABSTRACT",
    "STRUCTURAL",
    "AUXILIARY",
];

/// One `LABEL value...` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Uppercased label.
    pub label: String,
    pub values: Vec<String>,
}

impl Clause {
    pub fn new<I, S>(label: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.to_ascii_uppercase(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_flag(&self) -> bool {
        is_flag_label(&self.label)
    }
}

/// Tokenized definition: leading identifier plus clauses in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDefinition {
    pub identifier: String,
    pub clauses: Vec<Clause>,
}

pub(crate) fn is_flag_label(label: &str) -> bool {
    FLAG_LABELS.iter().any(|f| f.eq_ignore_ascii_case(label))
}

/// Collapse runs of whitespace (including line breaks) to single spaces.
pub fn sanitize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a complete definition. The error string carries the unparsed
/// remainder.
pub fn parse_definition(input: &str) -> Result<RawDefinition, String> {
    all_consuming(definition)(input)
        .finish()
        .map(|(_, def)| def)
        .map_err(|e| {
            let rest: String = e.input.chars().take(32).collect();
            format!("syntax error near '{rest}'")
        })
}

fn definition(input: &str) -> IResult<&str, RawDefinition> {
    let (input, (identifier, clauses)) = delimited(
        tuple((multispace0, char('('), multispace0)),
        tuple((bare_word, many0(preceded(multispace1, clause)))),
        tuple((multispace0, char(')'), multispace0)),
    )(input)?;

    Ok((
        input,
        RawDefinition {
            identifier: identifier.to_string(),
            clauses,
        },
    ))
}

fn clause(input: &str) -> IResult<&str, Clause> {
    let (input, label) = label(input)?;
    if is_flag_label(label) {
        return Ok((input, Clause::new(label, Vec::<String>::new())));
    }
    let (input, values) = preceded(multispace1, clause_value)(input)?;
    Ok((input, Clause::new(label, values)))
}

fn label(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

fn clause_value(input: &str) -> IResult<&str, Vec<String>> {
    alt((
        value_list,
        map(quoted, |s| vec![s]),
        map(bare_word, |s| vec![s.to_string()]),
    ))(input)
}

fn value_list(input: &str) -> IResult<&str, Vec<String>> {
    let item = alt((
        map(quoted, Some),
        map(bare_word, |s: &str| Some(s.to_string())),
        value(None, char('$')),
    ));
    let (input, items) = delimited(
        char('('),
        many0(preceded(multispace0, item)),
        preceded(multispace0, char(')')),
    )(input)?;
    Ok((input, items.into_iter().flatten().collect()))
}

fn quoted(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
        unescape_qdstring,
    )(input)
}

fn bare_word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && !matches!(c, '(' | ')' | '\'' | '$'))(input)
}
