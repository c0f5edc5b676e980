//! Errors produced by the [`checked`](crate::checked) entry points. The shape is partially modeled
//! after `std::io::Error`: a small [`ErrorKind`] that callers can match on, plus details for
//! display.

use std::error;
use std::fmt::{self, Debug, Display, Formatter};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// A required argument (the collection, the input sequence, or the predicate) was not
    /// provided. This is always reported before the collection is touched.
    InvalidArgument,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "A required argument was not provided"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    argument: &'static str,
}

impl Error {
    pub fn new(kind: ErrorKind, argument: &'static str) -> Self {
        Error { kind, argument }
    }

    /// Shorthand for an [`ErrorKind::InvalidArgument`] error naming the missing argument.
    pub fn missing(argument: &'static str) -> Self {
        Error::new(ErrorKind::InvalidArgument, argument)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The name of the argument which caused this error.
    pub fn argument(&self) -> &'static str {
        self.argument
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {:?}", &self.kind, &self.argument)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: `{}`", self.kind, self.argument)
    }
}

impl error::Error for Error {}
