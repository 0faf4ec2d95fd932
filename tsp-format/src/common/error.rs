#[cfg(test)]
#[path = "../../tests/unit/common/error_test.rs"]
mod error_test;

/// An error returned by readers and index resolution.
#[derive(Debug)]
pub enum ReadError {
    /// A required section marker never appears in the input.
    MissingSection {
        /// The marker token which was expected, e.g. `NODE_COORD_SECTION`.
        marker: &'static str,
    },

    /// A data line cannot be parsed into the expected field count or types.
    MalformedInput {
        /// One-based line number within the input.
        line: usize,
        /// Content of the line without trailing whitespaces.
        content: String,
        /// A short description of what is wrong with the line.
        reason: String,
    },

    /// A tour section is present, but it has no entries.
    EmptyTour,

    /// An underlying file system or io error, kept as is.
    FileAccess(std::io::Error),

    /// A point index does not reference any point.
    IndexOutOfRange {
        /// The index as written in the input.
        index: usize,
        /// Amount of points available.
        size: usize,
    },

    /// A point index is visited more than once by a tour.
    DuplicateIndex {
        /// The index as written in the input.
        index: usize,
    },
}

/// A type alias for result type with `ReadError`.
pub type ReadResult<T> = Result<T, ReadError>;

impl ReadError {
    pub(crate) fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::MalformedInput { line, content: content.trim_end().to_string(), reason: reason.into() }
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSection { marker } => write!(f, "cannot find '{marker}' section"),
            Self::MalformedInput { line, content, reason } => write!(f, "{reason} at line {line}: '{content}'"),
            Self::EmptyTour => write!(f, "tour section has no entries"),
            Self::FileAccess(err) => write!(f, "{err}"),
            Self::IndexOutOfRange { index, size } => {
                write!(f, "point index {index} is out of range, total points: {size}")
            }
            Self::DuplicateIndex { index } => write!(f, "point index {index} is visited more than once"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(value: std::io::Error) -> Self {
        Self::FileAccess(value)
    }
}

impl PartialEq<Self> for ReadError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingSection { marker: lhs }, Self::MissingSection { marker: rhs }) => lhs == rhs,
            (
                Self::MalformedInput { line: l_line, content: l_content, reason: l_reason },
                Self::MalformedInput { line: r_line, content: r_content, reason: r_reason },
            ) => l_line == r_line && l_content == r_content && l_reason == r_reason,
            (Self::EmptyTour, Self::EmptyTour) => true,
            // NOTE io errors are not comparable, so only their kinds are checked
            (Self::FileAccess(lhs), Self::FileAccess(rhs)) => lhs.kind() == rhs.kind(),
            (
                Self::IndexOutOfRange { index: l_index, size: l_size },
                Self::IndexOutOfRange { index: r_index, size: r_size },
            ) => l_index == r_index && l_size == r_size,
            (Self::DuplicateIndex { index: lhs }, Self::DuplicateIndex { index: rhs }) => lhs == rhs,
            _ => false,
        }
    }
}
