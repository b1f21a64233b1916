/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Byte-level tokenizer for the tag=value wire format.
//!
//! The scanner pulls one byte at a time from any [`Read`] source and
//! classifies the stream into [`Token`]s. Literal collection needs exactly
//! one byte of pushback: the boundary byte that terminates a tag or value
//! is unread and re-delivered on the next call.

use crate::token::Token;
use std::io::{self, BufReader, Read};

/// SOH (Start of Header), the wire format's historical field separator.
pub const SOH: u8 = 0x01;

/// The tag/value boundary byte.
pub const EQUALS: u8 = b'=';

/// Pull tokenizer over a byte source.
///
/// A scanner is restartable only by constructing a new instance over a
/// fresh source. A failed or short read behaves as stream exhaustion.
#[derive(Debug)]
pub struct Scanner<R> {
    /// Buffered byte source.
    reader: BufReader<R>,
    /// The single byte of pushback capacity.
    pushback: Option<u8>,
    /// Configured field separator.
    separator: u8,
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner over `source` with the given field separator.
    ///
    /// # Arguments
    /// * `source` - The byte source to tokenize
    /// * `separator` - The field separator byte, typically [`SOH`]
    pub fn new(source: R, separator: u8) -> Self {
        Self {
            reader: BufReader::new(source),
            pushback: None,
            separator,
        }
    }

    /// Reads the next token from the source.
    ///
    /// A single boundary byte is classified on its own; anything else opens
    /// a literal that runs until the next boundary byte, which decides
    /// whether the literal was a tag (`=`) or a value (separator). Once the
    /// source is exhausted every further call yields
    /// [`Token::EndOfStream`].
    pub fn scan(&mut self) -> Token {
        let Some(byte) = self.read_byte() else {
            return Token::EndOfStream;
        };

        if byte == EQUALS {
            return Token::TagValueSeparator;
        }
        if byte == self.separator {
            return Token::Separator(byte);
        }

        // Neither boundary byte: this opens a tag or value literal.
        self.unread(byte);
        self.scan_literal()
    }

    /// Collects a literal until a boundary byte classifies it.
    ///
    /// A literal cut off by the end of the source has no boundary byte and
    /// therefore no definitive classification; it is reported as stream
    /// exhaustion instead.
    fn scan_literal(&mut self) -> Token {
        let mut literal = String::new();
        loop {
            match self.read_byte() {
                None => return Token::EndOfStream,
                Some(EQUALS) => {
                    self.unread(EQUALS);
                    return Token::Tag(literal);
                }
                Some(byte) if byte == self.separator => {
                    self.unread(byte);
                    return Token::Value(literal);
                }
                Some(byte) => literal.push(char::from(byte)),
            }
        }
    }

    /// Returns the next byte, honoring pushback first.
    fn read_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pushback.take() {
            return Some(byte);
        }

        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return None,
                Ok(_) => return Some(buf[0]),
                Err(ref err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(_) => return None,
            }
        }
    }

    /// Places a byte back so the next read re-delivers it.
    fn unread(&mut self, byte: u8) {
        self.pushback = Some(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &[u8], separator: u8) -> Vec<Token> {
        let mut scanner = Scanner::new(input, separator);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.scan();
            let end = token.is_end();
            tokens.push(token);
            if end {
                break;
            }
        }
        tokens
    }

    #[test]
    fn test_scan_single_field() {
        assert_eq!(
            collect(b"8=FIX.4.4\x01", SOH),
            vec![
                Token::Tag("8".to_string()),
                Token::TagValueSeparator,
                Token::Value("FIX.4.4".to_string()),
                Token::Separator(SOH),
                Token::EndOfStream,
            ]
        );
    }

    #[test]
    fn test_scan_custom_separator() {
        assert_eq!(
            collect(b"55=EURUSD|268=2|", b'|'),
            vec![
                Token::Tag("55".to_string()),
                Token::TagValueSeparator,
                Token::Value("EURUSD".to_string()),
                Token::Separator(b'|'),
                Token::Tag("268".to_string()),
                Token::TagValueSeparator,
                Token::Value("2".to_string()),
                Token::Separator(b'|'),
                Token::EndOfStream,
            ]
        );
    }

    #[test]
    fn test_scan_empty_source() {
        assert_eq!(collect(b"", SOH), vec![Token::EndOfStream]);
    }

    #[test]
    fn test_scan_keeps_returning_end() {
        let mut scanner = Scanner::new(b"".as_slice(), SOH);
        assert_eq!(scanner.scan(), Token::EndOfStream);
        assert_eq!(scanner.scan(), Token::EndOfStream);
    }

    #[test]
    fn test_scan_literal_cut_off_by_end() {
        // "FIX.4" never reaches a boundary byte, so it cannot be classified.
        assert_eq!(
            collect(b"8=FIX.4", SOH),
            vec![
                Token::Tag("8".to_string()),
                Token::TagValueSeparator,
                Token::EndOfStream,
            ]
        );
    }

    #[test]
    fn test_scan_consecutive_boundaries() {
        assert_eq!(
            collect(b"a==b\x01", SOH),
            vec![
                Token::Tag("a".to_string()),
                Token::TagValueSeparator,
                Token::TagValueSeparator,
                Token::Value("b".to_string()),
                Token::Separator(SOH),
                Token::EndOfStream,
            ]
        );
    }

    #[test]
    fn test_pushback_does_not_lose_bytes() {
        let mut scanner = Scanner::new(b"269=0\x01270=1.5\x01".as_slice(), SOH);
        let mut consumed = 0;
        loop {
            let token = scanner.scan();
            if token.is_end() {
                break;
            }
            consumed += token.literal_len();
        }
        assert_eq!(consumed, b"269=0\x01270=1.5\x01".len());
    }
}
