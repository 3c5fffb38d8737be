//! Provides parsers for names.

use crate::parsed_types::Name;
use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::take_while;
use nom::character::complete::satisfy;
use nom::combinator::recognize;
use nom::sequence::pair;

/// Parses a name, i.e. a letter followed by any number of letters, digits,
/// `-` or `_`.
///
/// ## Example
/// ```
/// # use lazylifted::parsers::{parse_name, preamble::*};
/// assert!(parse_name(Span::new("abcde")).is_value("abcde".into()));
/// assert!(parse_name(Span::new("a-1_2")).is_value("a-1_2".into()));
/// assert!(parse_name(Span::new("Z01")).is_value("Z01".into()));
/// assert!(parse_name(Span::new("x-_-_")).is_value("x-_-_".into()));
///
/// assert!(parse_name(Span::new("")).is_err());
/// assert!(parse_name(Span::new(".")).is_err());
/// assert!(parse_name(Span::new("-abc")).is_err());
/// assert!(parse_name(Span::new("0124")).is_err());
/// assert!(parse_name(Span::new("-1")).is_err());
///```
pub fn parse_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Name> {
    let (remainder, span) = recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
    ))(input.into())?;

    Ok((remainder, Name::new(*span.fragment())))
}

impl crate::parsers::Parser for Name {
    type Item = Name;

    /// Parses a name.
    ///
    /// ## See also
    /// See [`parse_name`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_name(input)
    }
}
