use std::error;
use std::fmt;
use std::result;

/// The classification of an error. Every error raised by this crate is
/// synchronous and indicates bad input or misuse; none are transient, so
/// there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A required value was missing or a precondition on an argument failed.
    InvalidArgument,
    /// A numeric field lies outside its legal bound.
    OutOfRange,
    /// An enumerated field holds its `Invalid` sentinel.
    InvalidEnumValue,
    /// Two operands have different kinds (calendar, fiscal, generic).
    KindMismatch,
    /// Start and end granularities differ where uniformity is required.
    GranularityMismatch,
    /// A granularity is finer (or coarser) than the operation allows.
    IncompatibleGranularity,
    /// Arithmetic was attempted on an unbounded unit of time.
    CannotAdjustUnbounded,
    /// Enumeration was attempted through an unbounded unit of time.
    CannotEnumerateUnbounded,
    /// A sortable string matched a known pattern but its fields are invalid.
    MalformedValue,
    /// A sortable string matched no known pattern.
    UnrecognizedFormat,
    /// A parsed value is not of the type the caller asked for.
    TypeMismatch,
    /// Boundaries do not align with the coarser granularity requested.
    Overflow,
    /// The kind and granularity combination cannot support the operation.
    NotSupported,
}

/// Error returned by all fallible operations in this crate. It carries a
/// kind, so callers can branch on the failure, and a message naming the
/// offending field or value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub fn new(kind: ErrorKind, message: &str) -> Error {
        Error {
            kind,
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Shorthand for an `OutOfRange` error naming the field, the value and
    /// the inclusive bounds it violated.
    pub fn out_of_range<T: fmt::Display>(field: &str, value: T, min: T, max: T) -> Error {
        Error::new(
            ErrorKind::OutOfRange,
            &format!("{} is {}, which is outside the range [{}, {}]", field, value, min, max),
        )
    }

    /// Shorthand for an `InvalidEnumValue` error naming the field.
    pub fn invalid_enum(field: &str) -> Error {
        Error::new(
            ErrorKind::InvalidEnumValue,
            &format!("{} is Invalid", field),
        )
    }

    /// Rewraps an error under a different kind, keeping its message. Used
    /// where the caller's view of the failure differs from the callee's, for
    /// example a range check failing while parsing a string.
    pub fn with_kind(self, kind: ErrorKind) -> Error {
        Error {
            kind,
            message: self.message,
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}
