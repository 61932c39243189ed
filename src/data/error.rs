/// Errors raised while reading or scanning a series.
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    /// The input could not be opened or read.
    #[error("source unavailable ({origin}): {source}")]
    SourceUnavailable {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The input ended before the series was filled. `in_header` is set
    /// when it ended before any data could be read.
    #[error("truncated input: {}", describe_truncation(.parsed, .expected, .in_header))]
    TruncatedInput {
        parsed: usize,
        expected: usize,
        in_header: bool,
    },

    /// A token could not be read as the expected integer format.
    #[error("malformed token at index {index}: '{text}'")]
    MalformedToken { index: usize, text: String },

    /// Invalid configuration or argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SeriesError {
    pub(crate) fn io(origin: impl Into<String>, source: std::io::Error) -> Self {
        SeriesError::SourceUnavailable {
            origin: origin.into(),
            source,
        }
    }
}

fn describe_truncation(parsed: &usize, expected: &usize, in_header: &bool) -> String {
    if *in_header {
        "source ended before the header was complete".to_string()
    } else {
        format!("parsed {parsed} of {expected} entries")
    }
}

pub type Result<T> = std::result::Result<T, SeriesError>;
