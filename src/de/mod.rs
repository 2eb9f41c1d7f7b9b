use crate::archive::Archive;
use crate::binary::{MAX_SYMBOLS, SCALAR_WIDTH, TERMINATOR_BYTES};
use crate::error::{Error, FormatError, Result};
use crate::options::Options;
use crate::parser::{table_error, take_symbol_table};
use crate::symbols::SymbolTable;
use itertools::Itertools;
use log::debug;
use std::io::{self, BufReader, BufWriter, Read, Write};

/// Reads an archive from `reader` and writes the decoded text to `writer` as UTF-8.
///
/// The table section is read up to its terminator before any text is produced. The indices are
/// then read one at a time and each is written out as soon as it is looked up, so a bad index or
/// a failing reader stops the decode after the text before it has been delivered. The output is
/// flushed before returning, on failure as well as on success.
pub fn decode<R: Read, W: Write>(reader: R, writer: W, options: &Options) -> Result<()> {
    let mut input = BufReader::new(reader);
    let mut section = Vec::new();
    let read = read_table_section(&mut input, &mut section);

    let table = match take_symbol_table(&section) {
        Ok((_, table)) => table,
        Err(e) => {
            // A malformed word that did arrive outranks the read failure that cut the table short.
            return Err(match (table_error(&section, e), read) {
                (
                    Error::TableRead {
                        cause: FormatError::Truncated,
                        ..
                    },
                    Err(io_error),
                ) => Error::TableRead {
                    offset: section.len(),
                    cause: FormatError::Unreadable(io_error.kind()),
                },
                (error, _) => error,
            });
        }
    };
    if options.diagnostics_enabled() {
        log_table(&table, section.len());
    }

    let mut out = BufWriter::new(writer);
    let written = write_text(&table, input, &mut out);
    let flushed = out.flush();
    written?;
    flushed?;
    Ok(())
}

/// Decodes an archive held in memory.
///
/// ```
/// let text = runez::from_slice(&[0x61, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
/// assert_eq!(text, "aa");
/// ```
pub fn from_slice(bytes: &[u8]) -> Result<String> {
    Archive::from_slice(bytes)?.to_text()
}

/// Copies words from `input` into `section` until the table terminator, a short word at the end
/// of input, or one word more than a full table.
fn read_table_section<R: Read>(input: &mut R, section: &mut Vec<u8>) -> io::Result<()> {
    let mut word = [0u8; SCALAR_WIDTH];
    for _ in 0..=MAX_SYMBOLS {
        let mut filled = 0;
        while filled < SCALAR_WIDTH {
            match input.read(&mut word[filled..]) {
                Ok(0) => return Ok(()),
                Ok(n) => {
                    section.extend_from_slice(&word[filled..filled + n]);
                    filled += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        if word == TERMINATOR_BYTES {
            return Ok(());
        }
    }
    Ok(())
}

fn write_text<R: Read, W: Write>(table: &SymbolTable, input: R, out: &mut W) -> Result<()> {
    let mut buf = [0u8; 4];
    for byte in input.bytes() {
        let index = byte.map_err(Error::IndexRead)?;
        let symbol = table.get(index).ok_or(Error::IndexOutOfRange {
            index,
            table_len: table.len(),
        })?;
        out.write_all(symbol.encode_utf8(&mut buf).as_bytes())?;
    }
    Ok(())
}

fn log_table(table: &SymbolTable, terminator_end: usize) {
    debug!("hit table terminator, index section starts at byte {}", terminator_end);
    debug!(
        "table = {{{}}}",
        table.symbols().iter().map(|symbol| format!("{:?}", symbol)).join(", ")
    );
}
