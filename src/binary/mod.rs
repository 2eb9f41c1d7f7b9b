//! Special values and types related to the binary archive format.

/// ## Archive Layout
///
/// An archive is a table section followed by an index section. There is no header, no length
/// prefix and no trailer: the table ends at its terminator and the index section ends with the
/// stream.
///
/// ```text
///                     31                                0
///                    +-----------------------------------+
/// table section      |  symbol 0 (scalar value, LE u32)  |
///                    +===================================+
///                    :  symbol 1 (scalar value, LE u32)  :
///                    +===================================+
///                                     ⋮
///                    +===================================+
///                    :  symbol N-1                       :
///                    +-----------------------------------+
///                    |  terminator (0x00000000)          |
///                    +-----------------------------------+
///
///                     7     0
///                    +-------+
/// index section      | index |   one octet per character of the original text
///                    +=======+
///                        ⋮
/// ```
///
/// Symbols appear in the order in which they first occur in the text, so the first character of
/// the text always has index 0. Every index must be less than N.
///
/// ## Scalar Values
///
/// Each table entry is a Unicode scalar value stored as four little-endian octets. Surrogates
/// and values above U+10FFFF are not scalar values and make the table unreadable.
/// The scalar value 0 is reserved for the terminator and can never be a table entry.
pub const SCALAR_WIDTH: usize = 4;

/// The table entry marking the end of the table section.
pub const TABLE_TERMINATOR: u32 = 0;

/// The most entries a table can hold. Indices are a single octet.
pub const MAX_SYMBOLS: usize = 1 << 8;

/// The octets of the table terminator as written to an archive.
pub(crate) const TERMINATOR_BYTES: [u8; SCALAR_WIDTH] = TABLE_TERMINATOR.to_le_bytes();

/// Returns the four octets that represent `symbol` in the table section.
pub(crate) const fn scalar_bytes(symbol: char) -> [u8; SCALAR_WIDTH] {
    (symbol as u32).to_le_bytes()
}
