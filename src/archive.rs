use crate::binary::{scalar_bytes, SCALAR_WIDTH, TERMINATOR_BYTES};
use crate::error::{Error, Result};
use crate::parser::{table_error, take_symbol_table};
use crate::ser::Writer;
use crate::symbols::SymbolTable;
use std::io::{self, Write};
use std::slice;

/// A symbol table together with the index of every character of the text it was built from.
///
/// An `Archive` holds exactly what the binary format holds. Indices are only checked against
/// the table when they are expanded, so an archive read from bytes may still contain indices
/// that fail with [`Error::IndexOutOfRange`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Archive {
    table: SymbolTable,
    indices: Vec<u8>,
}

impl Archive {
    /// Builds the archive of `text`.
    ///
    /// ```
    /// use runez::Archive;
    /// let archive = Archive::from_text("banana").unwrap();
    /// assert_eq!(archive.table().symbols(), &['b', 'a', 'n']);
    /// assert_eq!(archive.indices(), &[0, 1, 2, 1, 2, 1]);
    /// ```
    pub fn from_text(text: &str) -> Result<Archive> {
        let mut writer = Writer::new();
        writer.extend(text)?;
        Ok(writer.finish())
    }

    pub(crate) fn from_parts(table: SymbolTable, indices: Vec<u8>) -> Archive {
        Archive { table, indices }
    }

    /// Reads an archive from its binary form. Only the table section is validated.
    pub fn from_slice(bytes: &[u8]) -> Result<Archive> {
        let (indices, table) = take_symbol_table(bytes).map_err(|e| table_error(bytes, e))?;
        Ok(Archive::from_parts(table, indices.to_vec()))
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Size of the binary form.
    pub fn len_bytes(&self) -> usize {
        (self.table.len() + 1) * SCALAR_WIDTH + self.indices.len()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for symbol in self.table.symbols() {
            writer.write_all(&scalar_bytes(*symbol))?;
        }
        writer.write_all(&TERMINATOR_BYTES)?;
        writer.write_all(&self.indices)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len_bytes());
        for symbol in self.table.symbols() {
            bytes.extend_from_slice(&scalar_bytes(*symbol));
        }
        bytes.extend_from_slice(&TERMINATOR_BYTES);
        bytes.extend_from_slice(&self.indices);
        bytes
    }

    /// The characters of the text, in order.
    pub fn symbols(&self) -> Symbols<'_> {
        Symbols {
            table: &self.table,
            indices: self.indices.iter(),
        }
    }

    pub fn to_text(&self) -> Result<String> {
        self.symbols().collect()
    }
}

/// Iterator over the characters named by a run of indices.
/// Yields [`Error::IndexOutOfRange`] for an index the table does not hold.
#[derive(Clone, Debug)]
pub struct Symbols<'a> {
    table: &'a SymbolTable,
    indices: slice::Iter<'a, u8>,
}

impl<'a> Iterator for Symbols<'a> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.indices.next()?;
        let table = self.table;
        Some(table.get(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            table_len: table.len(),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}
