//! nom parsers for the table section of an archive.

mod parse_error;

pub use self::parse_error::{ArchiveError, ArchiveResult, ErrorKind};
pub(crate) use self::parse_error::table_error;

use crate::binary::TABLE_TERMINATOR;
use crate::error::FormatError;
use crate::symbols::SymbolTable;
use nom::{number::complete::le_u32, Err};

/// Takes one scalar value from the table section. The terminator is returned as `None`.
pub fn take_table_entry(input: &[u8]) -> ArchiveResult<&[u8], Option<char>> {
    let (rest, value) = match le_u32::<_, ArchiveError<&[u8]>>(input) {
        Ok(ok) => ok,
        Err(_) => {
            return Err(Err::Failure(ArchiveError::from_format_error(
                input,
                FormatError::Truncated,
            )))
        }
    };

    if value == TABLE_TERMINATOR {
        return Ok((rest, None));
    }

    match std::char::from_u32(value) {
        Some(symbol) => Ok((rest, Some(symbol))),
        None => Err(Err::Failure(ArchiveError::from_format_error(
            input,
            FormatError::InvalidScalar(value),
        ))),
    }
}

/// Takes table entries up to and including the terminator.
/// The remaining input is the index section.
pub fn take_symbol_table(input: &[u8]) -> ArchiveResult<&[u8], SymbolTable> {
    let mut table = SymbolTable::new();
    let mut input = input;
    loop {
        let (rest, entry) = take_table_entry(input)?;
        match entry {
            None => return Ok((rest, table)),
            Some(symbol) => {
                if let Err(e) = table.push(symbol) {
                    return Err(Err::Failure(ArchiveError::from_format_error(
                        input,
                        e.into(),
                    )));
                }
            }
        }
        input = rest;
    }
}
