use std::fmt::Display;
use std::num::ParseFloatError;

#[derive(Debug, PartialEq)]
pub enum JsonError {
    ParseError,
    BrokenTree,
}

impl Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonError::ParseError => write!(f, "input is not valid JSON"),
            JsonError::BrokenTree => write!(f, "syntax tree is missing an expected node"),
        }
    }
}

impl From<ParseFloatError> for JsonError {
    fn from(_err: ParseFloatError) -> Self {
        JsonError::ParseError
    }
}
