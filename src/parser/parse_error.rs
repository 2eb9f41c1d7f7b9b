use crate::error::{Error, FormatError};
use nom::{error::ParseError, Err, IResult, Offset};

/// Analogous to nom's IResult.
pub type ArchiveResult<I, T> = IResult<I, T, ArchiveError<I>>;

#[derive(Debug, PartialEq)]
pub struct ArchiveError<I> {
    pub kind: ErrorKind<I>,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind<I> {
    Nom(I, nom::error::ErrorKind),
    Format(I, FormatError),
}

impl<I> ArchiveError<I> {
    pub(crate) fn from_format_error(input: I, error: FormatError) -> Self {
        Self {
            kind: ErrorKind::Format(input, error),
        }
    }

    pub fn format_error(&self) -> FormatError {
        match &self.kind {
            // The table parsers only use complete combinators, which report a short read as an
            // error rather than Incomplete.
            ErrorKind::Nom(_, _) => FormatError::Truncated,
            ErrorKind::Format(_, error) => *error,
        }
    }
}

impl<'a> ArchiveError<&'a [u8]> {
    /// The byte offset into `origin` at which parsing stopped.
    pub fn offset(&self, origin: &'a [u8]) -> usize {
        match &self.kind {
            ErrorKind::Nom(i, _) | ErrorKind::Format(i, _) => origin.offset(i),
        }
    }

    pub(crate) fn into_table_error(self, origin: &'a [u8]) -> Error {
        Error::TableRead {
            offset: self.offset(origin),
            cause: self.format_error(),
        }
    }
}

/// Converts a failed table parse over `origin` into the crate error.
pub(crate) fn table_error(origin: &[u8], err: Err<ArchiveError<&[u8]>>) -> Error {
    match err {
        Err::Error(e) | Err::Failure(e) => e.into_table_error(origin),
        Err::Incomplete(_) => unreachable!("table parsers only use complete combinators"),
    }
}

impl<I> ParseError<I> for ArchiveError<I> {
    fn from_error_kind(input: I, kind: nom::error::ErrorKind) -> Self {
        Self {
            kind: ErrorKind::Nom(input, kind),
        }
    }

    fn append(_input: I, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}
