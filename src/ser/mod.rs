use crate::archive::Archive;
use crate::error::{Error, Result, SymbolError};
use crate::options::Options;
use crate::symbols::SymbolTable;
use log::debug;
use std::io::{BufWriter, Read, Write};

/// A writer takes a text one character at a time and produces its archive.
///
/// The table has to precede the indices in the binary form, and an index is only final once the
/// table is, so nothing can be written until the whole text has been taken in. The writer holds
/// the table and the indices in memory until [`Writer::finish`].
#[derive(Debug, Default)]
pub struct Writer {
    // distinct characters seen so far
    table: SymbolTable,
    // one index per character taken in
    indices: Vec<u8>,
}

impl Writer {
    pub fn new() -> Writer {
        Writer::default()
    }

    /// Number of characters taken in.
    pub fn position(&self) -> usize {
        self.indices.len()
    }

    pub fn append(&mut self, symbol: char) -> Result<()> {
        let position = self.position();
        let index = self.table.intern(symbol).map_err(|e| match e {
            SymbolError::TableFull { max } => Error::CapacityExceeded { max },
            SymbolError::Reserved => Error::NullSymbol { position },
            SymbolError::Duplicate(_) => unreachable!("intern reuses the index of a known symbol"),
        })?;
        self.indices.push(index);
        Ok(())
    }

    pub fn extend(&mut self, text: &str) -> Result<()> {
        for symbol in text.chars() {
            self.append(symbol)?;
        }
        Ok(())
    }

    pub fn finish(self) -> Archive {
        Archive::from_parts(self.table, self.indices)
    }
}

/// Reads all of `reader` as UTF-8 text and writes its archive to `writer`.
///
/// Nothing is written unless the whole text could be read and indexed. The output is flushed
/// before returning, on failure as well as on success.
pub fn encode<R: Read, W: Write>(mut reader: R, writer: W, options: &Options) -> Result<()> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::InputRead)?;

    let archive = Archive::from_text(&text)?;
    if options.diagnostics_enabled() {
        log_table(&archive);
    }

    let mut out = BufWriter::new(writer);
    let written = archive.write_to(&mut out);
    let flushed = out.flush();
    written?;
    flushed?;
    Ok(())
}

/// Encodes `text` into a new byte vector.
///
/// ```
/// let bytes = runez::to_bytes("aaaa").unwrap();
/// assert_eq!(bytes, [0x61, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn to_bytes(text: &str) -> Result<Vec<u8>> {
    Ok(Archive::from_text(text)?.to_bytes())
}

fn log_table(archive: &Archive) {
    for (index, symbol) in archive.table().iter() {
        debug!("{:?} has index {}", symbol, index);
    }
    debug!(
        "emitting {} table entries and {} indices ({} bytes)",
        archive.table().len(),
        archive.indices().len(),
        archive.len_bytes()
    );
}
