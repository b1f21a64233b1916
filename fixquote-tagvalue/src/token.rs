/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Lexical tokens produced by the [`Scanner`](crate::Scanner).

/// One lexical token of the tag=value wire format.
///
/// Every variant except [`Token::EndOfStream`] carries the literal text it
/// matched; the single-byte separators carry their byte directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The underlying byte source is exhausted.
    EndOfStream,
    /// The configured field separator.
    Separator(u8),
    /// The `=` between a tag and its value.
    TagValueSeparator,
    /// A tag literal: text terminated by `=`.
    Tag(String),
    /// A value literal: text terminated by the field separator.
    Value(String),
}

impl Token {
    /// Byte length of the matched literal.
    #[inline]
    #[must_use]
    pub fn literal_len(&self) -> usize {
        match self {
            Self::EndOfStream => 0,
            Self::Separator(_) | Self::TagValueSeparator => 1,
            Self::Tag(literal) | Self::Value(literal) => literal.len(),
        }
    }

    /// Returns true if this token ends the token stream.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}
