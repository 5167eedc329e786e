//! Immutable symbol sequences.

use std::fmt;
use std::ops::Deref;

/// An ordered, finite, immutable sequence of symbols.
///
/// The engine itself works on plain `&[u8]`; `Sequence` is the owned form
/// callers keep around (and that dereferences to a slice).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence {
    symbols: Box<[u8]>,
}

impl Sequence {
    pub fn new(symbols: impl Into<Box<[u8]>>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    /// `len` copies of `symbol`.
    pub fn repeat(symbol: u8, len: usize) -> Self {
        Self::new(vec![symbol; len])
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Deref for Sequence {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.symbols
    }
}

impl AsRef<[u8]> for Sequence {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

impl From<&[u8]> for Sequence {
    fn from(symbols: &[u8]) -> Self {
        Self::new(symbols)
    }
}

impl From<Vec<u8>> for Sequence {
    fn from(symbols: Vec<u8>) -> Self {
        Self::new(symbols)
    }
}

impl From<&str> for Sequence {
    fn from(symbols: &str) -> Self {
        Self::new(symbols.as_bytes())
    }
}

impl From<String> for Sequence {
    fn from(symbols: String) -> Self {
        Self::new(symbols.into_bytes())
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence(\"{}\")", self.symbols.escape_ascii())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols.escape_ascii())
    }
}
