use crate::modules::calculator::core::operator::Operator;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown input token: {0:?}")]
    UnknownToken(String),
}

/// One discrete unit of calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorInput {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Negate,
    Percent,
}

impl FromStr for CalculatorInput {
    type Err = InputError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "." => Ok(CalculatorInput::Decimal),
            "=" => Ok(CalculatorInput::Equals),
            "clear" => Ok(CalculatorInput::Clear),
            "negate" => Ok(CalculatorInput::Negate),
            "percent" => Ok(CalculatorInput::Percent),
            _ => {
                if let Ok(operator) = token.parse::<Operator>() {
                    return Ok(CalculatorInput::Operator(operator));
                }
                match token.as_bytes() {
                    [digit @ b'0'..=b'9'] => Ok(CalculatorInput::Digit(digit - b'0')),
                    _ => Err(InputError::UnknownToken(token.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
mod calculator_input_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", CalculatorInput::Digit(0))]
    #[case("7", CalculatorInput::Digit(7))]
    #[case("9", CalculatorInput::Digit(9))]
    #[case(".", CalculatorInput::Decimal)]
    #[case("+", CalculatorInput::Operator(Operator::Add))]
    #[case("/", CalculatorInput::Operator(Operator::Divide))]
    #[case("=", CalculatorInput::Equals)]
    #[case("clear", CalculatorInput::Clear)]
    #[case("negate", CalculatorInput::Negate)]
    #[case("percent", CalculatorInput::Percent)]
    fn it_should_parse_every_token_of_the_alphabet(
        #[case] token: &str,
        #[case] expected: CalculatorInput,
    ) {
        assert_eq!(token.parse::<CalculatorInput>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("10")]
    #[case("x")]
    #[case("Clear")]
    #[case(" 1")]
    fn it_should_reject_tokens_outside_the_alphabet(#[case] token: &str) {
        assert_eq!(
            token.parse::<CalculatorInput>(),
            Err(InputError::UnknownToken(token.to_string()))
        );
    }
}
