/// Errors raised while decoding a single numeral string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base {base}: must be between 2 and 36")]
    InvalidBase { base: i64 },
    #[error("invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
    #[error("empty value")]
    EmptyValue,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("root {index}: {source}")]
    InvalidRoot {
        index: u64,
        #[source]
        source: DecodeError,
    },
    #[error("not enough roots: {available} available, {required} required")]
    InsufficientRoots { required: u64, available: u64 },
    #[error("malformed descriptor: n={n}, k={k}")]
    MalformedDescriptor { n: i64, k: i64 },
    #[error("no roots to reduce")]
    NoRoots,
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}

impl Error {
    /// Returns the index of the root entry which caused the error, if any.
    pub fn index(&self) -> Option<u64> {
        match self {
            Error::InvalidRoot { index, .. } => Some(*index),
            _ => None,
        }
    }
}
