use crate::binary::MAX_SYMBOLS;
use crate::error::SymbolError;
use std::collections::HashMap;
use std::fmt;

/// ## SymbolTable
///
/// Stores the distinct characters of a text, each bound to the one-octet index it is written as.
///
/// ### Semantics
/// Indices are assigned in order of first occurrence, starting at 0, so the table is fully
/// determined by the text it was built from. Mapping from index to symbol is a plain array
/// lookup. Mapping from symbol to index goes through a map that answers `None` for symbols the
/// table has not seen, which keeps "absent" distinct from the perfectly valid index 0.
///
/// A table never holds more than 256 symbols, never holds the same symbol twice and never holds
/// the null character, which is reserved for the table terminator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolTable {
    symbols: Vec<char>,
    indices: HashMap<char, u8>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        // len() <= MAX_SYMBOLS, so every position fits in an index
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| (index as u8, *symbol))
    }

    pub fn index_of(&self, symbol: char) -> Option<u8> {
        self.indices.get(&symbol).copied()
    }

    pub fn get(&self, index: u8) -> Option<char> {
        self.symbols.get(index as usize).copied()
    }

    /// Returns the index of `symbol`, assigning it the next free index on first sight.
    pub fn intern(&mut self, symbol: char) -> Result<u8, SymbolError> {
        match self.index_of(symbol) {
            Some(index) => Ok(index),
            None => self.insert(symbol),
        }
    }

    /// Appends a symbol that must not already be in the table.
    pub fn push(&mut self, symbol: char) -> Result<u8, SymbolError> {
        if self.indices.contains_key(&symbol) {
            return Err(SymbolError::Duplicate(symbol));
        }
        self.insert(symbol)
    }

    fn insert(&mut self, symbol: char) -> Result<u8, SymbolError> {
        if symbol == '\0' {
            return Err(SymbolError::Reserved);
        }
        if self.symbols.len() >= MAX_SYMBOLS {
            return Err(SymbolError::TableFull { max: MAX_SYMBOLS });
        }
        let index = self.symbols.len() as u8;
        self.symbols.push(symbol);
        self.indices.insert(symbol, index);
        Ok(index)
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table = {{")?;
        for symbol in &self.symbols {
            writeln!(f, "{:?},", symbol)?;
        }
        write!(f, "}}")
    }
}
