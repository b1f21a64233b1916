/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Streaming quote message parser.
//!
//! The parser drives the [`Scanner`] over a byte source, uses the declared
//! body length (tag 9) to locate the message boundary, reads the checksum
//! trailer, and finalizes each message with a checksum validation. One
//! message is decoded per [`Parser::parse`] call; iteration ends when the
//! call returns [`DecodeError::EndOfStream`].
//!
//! A parser instance exclusively owns its source and is fully synchronous:
//! each call performs a bounded sequence of reads and carries no
//! thread-safety guarantees. Independent instances over independent sources
//! may run in parallel.

use crate::scanner::{SOH, Scanner};
use crate::token::Token;
use fixquote_core::error::DecodeError;
use fixquote_core::message::Message;
use fixquote_core::types::tags;
use std::io::Read;

/// Streaming parser producing one validated [`Message`] per call.
///
/// After a framing or integrity error the caller may keep calling
/// [`Parser::parse`] to attempt the next message, but no resynchronization
/// is performed; on a torn stream the caller must discard the source.
#[derive(Debug)]
pub struct Parser<R> {
    /// Tokenizer over the owned byte source.
    scanner: Scanner<R>,
    /// Tag whose value is expected next.
    current_tag: Option<u32>,
    /// Body length declared by tag 9; zero until seen.
    body_length: usize,
    /// Bytes consumed since the body length became known.
    read_body_length: usize,
    /// Messages accepted since construction.
    correct_messages: u64,
    /// Messages rejected since construction.
    incorrect_messages: u64,
}

impl<R: Read> Parser<R> {
    /// Creates a parser over `source` using the default [`SOH`] separator.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self::with_separator(source, SOH)
    }

    /// Creates a parser over `source` with an explicit field separator.
    ///
    /// # Arguments
    /// * `source` - The byte source, exclusively owned by this parser
    /// * `separator` - The single separator byte delimiting fields
    #[must_use]
    pub fn with_separator(source: R, separator: u8) -> Self {
        Self {
            scanner: Scanner::new(source, separator),
            current_tag: None,
            body_length: 0,
            read_body_length: 0,
            correct_messages: 0,
            incorrect_messages: 0,
        }
    }

    /// Decodes the next message from the source.
    ///
    /// Scans tokens, forwarding each (tag, value) pair to the message model
    /// and appending every literal to the raw checksum buffer. Once the
    /// bytes consumed after the body-length value exceed the declared body
    /// length, the body is complete and only the `10=NNN` trailer remains;
    /// the message is then finalized by checksum validation.
    ///
    /// # Errors
    /// - [`DecodeError::EndOfStream`]: the source is exhausted (normal
    ///   termination of iteration)
    /// - [`DecodeError::MissingChecksum`]: the trailer is absent or
    ///   malformed at the expected position
    /// - [`DecodeError::ChecksumMismatch`]: the declared checksum does not
    ///   match the computed one
    /// - [`DecodeError::InvalidFieldValue`] / [`DecodeError::UnexpectedEntry`]:
    ///   a field-level rejection from the message model
    pub fn parse(&mut self) -> Result<Message, DecodeError> {
        let mut message = Message::new();
        self.current_tag = None;
        self.body_length = 0;
        self.read_body_length = 0;

        loop {
            let token = self.scanner.scan();
            if self.body_length != 0 {
                self.read_body_length += token.literal_len();
            }

            match &token {
                Token::EndOfStream => return Err(DecodeError::EndOfStream),
                Token::Tag(literal) => self.current_tag = literal.parse().ok(),
                Token::Value(literal) => {
                    if self.current_tag == Some(tags::BODY_LENGTH) {
                        self.body_length = match literal.parse() {
                            Ok(length) => length,
                            Err(_) => {
                                return Err(self.reject(DecodeError::InvalidFieldValue {
                                    tag: tags::BODY_LENGTH,
                                    value: literal.clone(),
                                }));
                            }
                        };
                    }
                    if let Some(tag) = self.current_tag {
                        if let Err(err) = message.add(tag, literal) {
                            return Err(self.reject(err));
                        }
                    }
                }
                Token::Separator(_) | Token::TagValueSeparator => {}
            }

            match &token {
                Token::Tag(literal) | Token::Value(literal) => {
                    message.append_raw(literal.as_bytes());
                }
                Token::Separator(separator) => message.append_raw(&[*separator]),
                Token::TagValueSeparator => message.append_raw(b"="),
                Token::EndOfStream => {}
            }

            if self.body_length != 0 && self.read_body_length > self.body_length {
                // Body complete; only the checksum trailer remains.
                if let Err(err) = self.read_trailer(&mut message) {
                    return Err(self.reject(err));
                }
                break;
            }
        }

        match message.validate() {
            Ok(()) => {
                self.correct_messages += 1;
                Ok(message)
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Messages accepted since this parser was constructed.
    #[inline]
    #[must_use]
    pub const fn correct_message_count(&self) -> u64 {
        self.correct_messages
    }

    /// Messages rejected (framing, integrity, or field-level failures)
    /// since this parser was constructed.
    #[inline]
    #[must_use]
    pub const fn incorrect_message_count(&self) -> u64 {
        self.incorrect_messages
    }

    /// Reads the `10=NNN` checksum trailer that must follow the body.
    ///
    /// The trailer bytes are not appended to the raw buffer: the checksum
    /// covers everything before its own tag.
    fn read_trailer(&mut self, message: &mut Message) -> Result<(), DecodeError> {
        match self.scanner.scan() {
            Token::Tag(literal) if literal.parse() == Ok(tags::CHECKSUM) => {}
            _ => return Err(DecodeError::MissingChecksum),
        }

        // The tag/value boundary between the checksum tag and its value.
        self.scanner.scan();

        let value = match self.scanner.scan() {
            Token::Value(literal) => literal,
            _ => return Err(DecodeError::MissingChecksum),
        };
        message.add(tags::CHECKSUM, &value)?;

        // The terminating separator, when present.
        self.scanner.scan();
        Ok(())
    }

    /// Counts a rejected message and passes the error through.
    fn reject(&mut self, error: DecodeError) -> DecodeError {
        self.incorrect_messages += 1;
        error
    }
}
