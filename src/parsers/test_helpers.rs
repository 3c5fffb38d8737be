//! Test-only helpers for asserting on [`ParseResult`]s, used throughout the
//! doctests and unit tests in [`crate::parsers`].

use crate::parsers::{ParseError, Span};
use nom::IResult;

/// Asserts on the value produced by a parse, ignoring the remaining input.
pub trait UnwrapValue<T> {
    fn is_value(&self, expected: T) -> bool;
}

impl<'a, T> UnwrapValue<T> for Result<(Span<'a>, T), nom::Err<ParseError<'a>>>
where
    T: PartialEq + Clone,
{
    fn is_value(&self, expected: T) -> bool {
        match self {
            Ok((_, value)) => value == &expected,
            Err(_) => false,
        }
    }
}

/// Asserts on both the value and the fact that the parse consumed all input.
pub(crate) trait Match<T> {
    fn is_exactly(&self, expected: T) -> bool;
}

impl<'a, T> Match<T> for IResult<Span<'a>, T, ParseError<'a>>
where
    T: PartialEq + Clone,
{
    fn is_exactly(&self, expected: T) -> bool {
        match self {
            Ok((remainder, value)) => remainder.fragment().is_empty() && value == &expected,
            Err(_) => false,
        }
    }
}
