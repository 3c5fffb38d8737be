//! Provides parsers for types.

use crate::parsed_types::Type;
use crate::parsers::{parse_primitive_type, prefix_expr, space_separated_list1};
use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::combinator::map;

/// Parses a type, i.e. `<primitive-type> | (either <primitive-type>+)`.
///
/// ## Example
/// ```
/// # use lazylifted::parsers::{parse_type, preamble::*};
/// # use lazylifted::parsed_types::*;
/// assert!(parse_type(Span::new("object")).is_value(Type::Exactly(PrimitiveType::from("object"))));
/// assert!(parse_type(Span::new("(either state country)")).is_value(
///     Type::EitherOf(vec![PrimitiveType::from("state"), PrimitiveType::from("country")])
/// ));
/// ```
pub fn parse_type<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Type> {
    let either = map(
        prefix_expr("either", space_separated_list1(parse_primitive_type)),
        Type::EitherOf,
    );
    let exactly = map(parse_primitive_type, Type::Exactly);

    alt((either, exactly))(input.into())
}

impl crate::parsers::Parser for Type {
    type Item = Type;

    /// See [`parse_type`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_type(input)
    }
}
