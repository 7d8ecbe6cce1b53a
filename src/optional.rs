use crate::parser::Parser;
use crate::result::{ParseResult, Success};

/// Parser combinator that turns a failure of the wrapped parser into `None`
///
/// On failure no input is consumed: the original input is returned as the
/// remainder. Only recoverable failures are absorbed.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(input) {
            Ok(success) => Ok(success.map(Some)),
            Err(error) if error.is_recoverable() => Ok(Success::new(None, input)),
            Err(error) => Err(error),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::fold::fold1;
    use crate::lift::lift2;
    use crate::pure::pure;
    use crate::text::{char, string};
    use proptest::prelude::*;

    #[test]
    fn test_optional_present() {
        let parser = optional(char('-'));
        assert_eq!(parser.parse("-5"), Ok(Success::new(Some('-'), "5")));
    }

    #[test]
    fn test_optional_absent_keeps_input() {
        let parser = optional(char('-'));
        assert_eq!(parser.parse("5"), Ok(Success::new(None, "5")));
    }

    #[test]
    fn test_optional_empty_input() {
        let parser = char('-').optional();
        assert_eq!(parser.parse(""), Ok(Success::new(None, "")));
    }

    #[test]
    fn test_optional_then_required() {
        let parser = lift2(|sign, word| (sign, word), optional(char('+')), string("ab"));
        assert_eq!(parser.parse("+abc"), Ok(Success::new((Some('+'), "ab"), "c")));
        assert_eq!(parser.parse("abc"), Ok(Success::new((None, "ab"), "c")));
    }

    #[test]
    fn test_optional_does_not_absorb_contract_errors() {
        let parser = optional(fold1(pure(Vec::<u8>::new()), |a, b| a + b));
        assert_eq!(parser.parse("x"), Err(ParseError::EmptyFold));
    }

    proptest! {
        #[test]
        fn test_optional_failure_consumes_nothing(input in "[b-z]\\PC*") {
            let parser = string("abc");
            prop_assert!(parser.parse(&input).is_err());
            prop_assert_eq!(optional(parser).parse(&input), Ok(Success::new(None, input.as_str())));
        }
    }
}
