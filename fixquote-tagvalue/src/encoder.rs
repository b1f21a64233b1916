/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Quote message encoder.
//!
//! Builds well-formed tag=value messages for the decoder's wire format:
//! fields are appended in caller order, while BeginString (8), BodyLength
//! (9), and CheckSum (10) are produced automatically on
//! [`Encoder::finish`].

use bytes::{BufMut, BytesMut};
use fixquote_core::checksum::{checksum_of, format_checksum};
use fixquote_core::types::tags;

use crate::scanner::SOH;

/// Builder for one wire message.
#[derive(Debug)]
pub struct Encoder {
    /// Buffer for the message body (between BodyLength and CheckSum).
    body: BytesMut,
    /// The BeginString value (e.g. "FIX.4.4").
    version: &'static str,
    /// Field separator emitted between tag=value pairs.
    separator: u8,
}

impl Encoder {
    /// Creates an encoder with the given BeginString and the default
    /// [`SOH`] separator.
    ///
    /// # Arguments
    /// * `version` - The protocol version string (e.g. "FIX.4.4")
    #[must_use]
    pub fn new(version: &'static str) -> Self {
        Self {
            body: BytesMut::with_capacity(256),
            version,
            separator: SOH,
        }
    }

    /// Sets the field separator byte.
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Appends a field with a string value.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `value` - The field value
    #[inline]
    pub fn put_str(&mut self, tag: u32, value: &str) {
        self.put_raw(tag, value.as_bytes());
    }

    /// Appends a field with an unsigned integer value.
    #[inline]
    pub fn put_uint(&mut self, tag: u32, value: u64) {
        let mut buf = itoa::Buffer::new();
        self.put_raw(tag, buf.format(value).as_bytes());
    }

    /// Appends a field with a decimal float value.
    #[inline]
    pub fn put_float(&mut self, tag: u32, value: f64) {
        self.put_raw(tag, format!("{value}").as_bytes());
    }

    /// Appends a field with raw value bytes.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `value` - The field value bytes
    pub fn put_raw(&mut self, tag: u32, value: &[u8]) {
        let mut tag_buf = itoa::Buffer::new();
        self.body.put_slice(tag_buf.format(tag).as_bytes());
        self.body.put_u8(b'=');
        self.body.put_slice(value);
        self.body.put_u8(self.separator);
    }

    /// Finalizes the message and returns the complete encoded bytes.
    ///
    /// Prepends BeginString and BodyLength (the body's byte count), then
    /// appends the CheckSum trailer computed over everything before it.
    #[must_use]
    pub fn finish(self) -> BytesMut {
        let mut tag_buf = itoa::Buffer::new();
        let mut len_buf = itoa::Buffer::new();

        let mut message = BytesMut::with_capacity(self.body.len() + 32);
        message.put_slice(tag_buf.format(tags::BEGIN_STRING).as_bytes());
        message.put_u8(b'=');
        message.put_slice(self.version.as_bytes());
        message.put_u8(self.separator);
        message.put_slice(tag_buf.format(tags::BODY_LENGTH).as_bytes());
        message.put_u8(b'=');
        message.put_slice(len_buf.format(self.body.len()).as_bytes());
        message.put_u8(self.separator);
        message.put_slice(&self.body);

        let checksum = format_checksum(checksum_of(&message));
        message.put_slice(tag_buf.format(tags::CHECKSUM).as_bytes());
        message.put_u8(b'=');
        message.put_slice(checksum.as_bytes());
        message.put_u8(self.separator);

        message
    }

    /// Returns the current body length in bytes.
    #[inline]
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Clears the body for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.body.clear();
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new("FIX.4.4")
    }
}
