use std::fmt::Display;
use std::io;

#[derive(Debug)]
pub enum FlushError {
    Write(io::Error),
}

impl Display for FlushError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlushError::Write(err) => write!(f, "failed to write log batch: {}", err),
        }
    }
}

impl From<io::Error> for FlushError {
    fn from(err: io::Error) -> Self {
        FlushError::Write(err)
    }
}
