//! A small archival codec for text.
//!
//! An archive stores the distinct characters of a text once, in a table, and then every character
//! of the text as a one-byte index into that table. A text can therefore use at most 256
//! distinct characters.
//!
//! ```
//! let bytes = runez::to_bytes("banana").unwrap();
//! assert_eq!(runez::from_slice(&bytes).unwrap(), "banana");
//! ```
//!
//! [`encode`] and [`decode`] do the same over any `Read`/`Write` pair, taking an [`Options`]
//! value that switches on diagnostic logging through the `log` facade.
pub mod archive;
pub mod binary;
pub mod de;
pub mod error;
pub mod options;
pub mod parser;
pub mod ser;
pub mod symbols;


pub use archive::Archive;
pub use de::{decode, from_slice};
pub use error::{Error, Result};
pub use options::Options;
pub use ser::{encode, to_bytes};
pub use symbols::SymbolTable;
