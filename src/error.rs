use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort an encode or a decode.
#[derive(Error, Debug)]
pub enum Error {
    #[error("too many distinct characters to index, the table holds at most {max}")]
    CapacityExceeded { max: usize },
    #[error("could not read input text")]
    InputRead(#[source] io::Error),
    #[error("input has a null character at position {position}, which is reserved for the table terminator")]
    NullSymbol { position: usize },
    #[error("could not read symbol table at byte {offset}")]
    TableRead {
        offset: usize,
        #[source]
        cause: FormatError,
    },
    #[error("bad archive, index {index} is out of bounds for a table of {table_len} symbols")]
    IndexOutOfRange { index: u8, table_len: usize },
    #[error("could not read index")]
    IndexRead(#[source] io::Error),
    #[error("could not write output")]
    Write(#[from] io::Error),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolError {
    #[error("the table is full at {max} symbols")]
    TableFull { max: usize },
    #[error("symbol {0:?} is already in the table")]
    Duplicate(char),
    #[error("the null character is reserved for the table terminator")]
    Reserved,
}

/// Reasons the table section of an archive is unreadable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("archive ended before the table terminator")]
    Truncated,
    #[error("{0:#x} is not a unicode scalar value")]
    InvalidScalar(u32),
    #[error("symbol {0:?} appears twice in the table")]
    DuplicateSymbol(char),
    #[error("more than {max} symbols before the table terminator")]
    TooManySymbols { max: usize },
    #[error("input failed before the table terminator: {0}")]
    Unreadable(io::ErrorKind),
}

impl From<SymbolError> for FormatError {
    fn from(error: SymbolError) -> Self {
        match error {
            SymbolError::TableFull { max } => FormatError::TooManySymbols { max },
            SymbolError::Duplicate(symbol) => FormatError::DuplicateSymbol(symbol),
            // The terminator ends the table before a null could be pushed.
            SymbolError::Reserved => FormatError::InvalidScalar(0),
        }
    }
}
