/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Incremental quote message model.
//!
//! This module provides:
//! - [`Message`]: the accumulator that receives (tag, value) pairs one at a
//!   time and mutates typed fields or entry-group state
//! - [`Header`], [`Component`], [`Body`], [`Tail`]: the four sub-records of
//!   a decoded quote
//! - [`Entry`]: one priced entry of the repeating group
//!
//! Dispatch from tag number to field is a static table of typed setters, so
//! every coercion is statically checked. The message also accumulates the
//! raw bytes consumed so far; [`Message::validate`] computes the checksum
//! over that buffer and compares it against the declared trailer.

use crate::checksum::{checksum_of, parse_checksum};
use crate::error::DecodeError;
use crate::types::{Side, tags};
use arrayvec::ArrayString;
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Header part of a quote message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Protocol version string (tag 8).
    pub version: String,
    /// Declared body length in bytes (tag 9).
    pub body_length: u64,
    /// Message type code (tag 35).
    pub msg_type: String,
    /// Sending time, kept verbatim (tag 52).
    pub sending_time: String,
}

/// Instrument component of a quote message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Component {
    /// Instrument identifier (tag 55).
    pub symbol: String,
}

/// One priced entry of the repeating group (tags 269/270/271).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Entry side (tag 269).
    pub side: Side,
    /// Entry price (tag 270).
    pub price: f64,
    /// Entry amount (tag 271).
    pub amount: f64,
}

/// Body part of a quote message: the declared entry count and the entry
/// arena it sizes.
///
/// The arena is allocated exactly once per count declaration and filled
/// through a cursor: each side tag (269) opens the next slot, and price and
/// amount tags mutate the slot currently open. Re-declaring the count
/// discards any partially filled entries and closes the cursor again.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    /// Declared number of entries (tag 268).
    pub entry_count: u64,
    /// The entries, in wire occurrence order.
    pub entries: SmallVec<[Entry; 4]>,
    /// Index of the entry currently being filled; `None` until the first
    /// side tag arrives.
    #[serde(skip)]
    cursor: Option<usize>,
}

/// Tail part of a quote message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tail {
    /// Declared checksum, exactly three ASCII digits (tag 10).
    pub checksum: ArrayString<3>,
}

/// A quote message under incremental assembly.
///
/// A `Message` is created empty at the start of each parse attempt, mutated
/// field by field as tokens arrive, finalized by [`Message::validate`], and
/// then owned by the caller with no further mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Header sub-record.
    pub header: Header,
    /// Instrument sub-record.
    pub component: Component,
    /// Body sub-record with the entry group.
    pub body: Body,
    /// Tail sub-record.
    pub tail: Tail,
    /// Raw bytes consumed so far, kept only for checksum computation.
    #[serde(skip)]
    raw: BytesMut,
}

/// Typed setter bound to one field of [`Message`].
///
/// The variant selects the coercion applied to the raw value text before
/// the bound function runs.
#[derive(Clone, Copy)]
enum FieldSetter {
    /// Passes the raw text through unchanged.
    Str(fn(&mut Message, &str) -> Result<(), DecodeError>),
    /// Coerces through a base-10 unsigned integer parse.
    Uint(fn(&mut Message, u64) -> Result<(), DecodeError>),
    /// Coerces through a decimal float parse.
    Float(fn(&mut Message, f64) -> Result<(), DecodeError>),
}

/// Fixed tag-to-setter dispatch table, constructed once and never mutated.
static FIELD_SETTERS: [(u32, FieldSetter); 10] = [
    (tags::BEGIN_STRING, FieldSetter::Str(set_version)),
    (tags::BODY_LENGTH, FieldSetter::Uint(set_body_length)),
    (tags::MSG_TYPE, FieldSetter::Str(set_msg_type)),
    (tags::SENDING_TIME, FieldSetter::Str(set_sending_time)),
    (tags::SYMBOL, FieldSetter::Str(set_symbol)),
    (tags::NO_MD_ENTRIES, FieldSetter::Uint(set_entry_count)),
    (tags::MD_ENTRY_TYPE, FieldSetter::Str(set_entry_side)),
    (tags::MD_ENTRY_PX, FieldSetter::Float(set_entry_price)),
    (tags::MD_ENTRY_SIZE, FieldSetter::Float(set_entry_amount)),
    (tags::CHECKSUM, FieldSetter::Str(set_checksum)),
];

fn set_version(message: &mut Message, value: &str) -> Result<(), DecodeError> {
    message.header.version = value.to_owned();
    Ok(())
}

fn set_body_length(message: &mut Message, value: u64) -> Result<(), DecodeError> {
    message.header.body_length = value;
    Ok(())
}

fn set_msg_type(message: &mut Message, value: &str) -> Result<(), DecodeError> {
    message.header.msg_type = value.to_owned();
    Ok(())
}

fn set_sending_time(message: &mut Message, value: &str) -> Result<(), DecodeError> {
    message.header.sending_time = value.to_owned();
    Ok(())
}

fn set_symbol(message: &mut Message, value: &str) -> Result<(), DecodeError> {
    message.component.symbol = value.to_owned();
    Ok(())
}

/// Sizes the entry arena and closes the cursor. Partially filled entries
/// from an earlier declaration are discarded.
fn set_entry_count(message: &mut Message, value: u64) -> Result<(), DecodeError> {
    message.body.entry_count = value;
    message.body.entries.clear();
    message.body.entries.resize(value as usize, Entry::default());
    message.body.cursor = None;
    Ok(())
}

/// Opens the next entry slot and sets its side.
fn set_entry_side(message: &mut Message, value: &str) -> Result<(), DecodeError> {
    let side = match value.as_bytes() {
        [c] => Side::try_from(*c).ok(),
        _ => None,
    }
    .ok_or_else(|| DecodeError::InvalidFieldValue {
        tag: tags::MD_ENTRY_TYPE,
        value: value.to_owned(),
    })?;

    let next = message.body.cursor.map_or(0, |index| index + 1);
    if next >= message.body.entries.len() {
        return Err(DecodeError::UnexpectedEntry {
            tag: tags::MD_ENTRY_TYPE,
            declared: message.body.entry_count,
        });
    }
    message.body.cursor = Some(next);
    message.body.entries[next].side = side;
    Ok(())
}

fn set_entry_price(message: &mut Message, value: f64) -> Result<(), DecodeError> {
    let index = message.body.open_entry(tags::MD_ENTRY_PX)?;
    message.body.entries[index].price = value;
    Ok(())
}

fn set_entry_amount(message: &mut Message, value: f64) -> Result<(), DecodeError> {
    let index = message.body.open_entry(tags::MD_ENTRY_SIZE)?;
    message.body.entries[index].amount = value;
    Ok(())
}

/// Stores the declared checksum. A value that is not exactly three ASCII
/// digits in 0-255 is a malformed trailer.
fn set_checksum(message: &mut Message, value: &str) -> Result<(), DecodeError> {
    if parse_checksum(value).is_none() {
        return Err(DecodeError::MissingChecksum);
    }
    message.tail.checksum =
        ArrayString::from(value).map_err(|_| DecodeError::MissingChecksum)?;
    Ok(())
}

impl Body {
    /// Returns the index of the entry currently open for mutation.
    fn open_entry(&self, tag: u32) -> Result<usize, DecodeError> {
        self.cursor.ok_or(DecodeError::UnexpectedEntry {
            tag,
            declared: self.entry_count,
        })
    }
}

impl Message {
    /// Creates an empty message ready for assembly.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one (tag, value) pair to the message.
    ///
    /// Known tags are routed through the static setter table, which coerces
    /// the value to the field's type. The entry-count tag additionally
    /// (re)allocates the entry arena. Unknown tags are skipped; their bytes
    /// still count toward framing and the checksum.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `value` - The raw value text from the wire
    ///
    /// # Errors
    /// Returns [`DecodeError::InvalidFieldValue`] if a numeric coercion
    /// fails, [`DecodeError::UnexpectedEntry`] if an entry-group tag lands
    /// outside the declared range, or [`DecodeError::MissingChecksum`] if
    /// the checksum value is malformed.
    pub fn add(&mut self, tag: u32, value: &str) -> Result<(), DecodeError> {
        let Some((_, setter)) = FIELD_SETTERS.iter().find(|(entry, _)| *entry == tag) else {
            return Ok(());
        };

        match *setter {
            FieldSetter::Str(set) => set(self, value),
            FieldSetter::Uint(set) => {
                let parsed = value.parse().map_err(|_| DecodeError::InvalidFieldValue {
                    tag,
                    value: value.to_owned(),
                })?;
                set(self, parsed)
            }
            FieldSetter::Float(set) => {
                let parsed = value.parse().map_err(|_| DecodeError::InvalidFieldValue {
                    tag,
                    value: value.to_owned(),
                })?;
                set(self, parsed)
            }
        }
    }

    /// Appends a literal to the raw accumulation buffer.
    ///
    /// Every token literal encountered before the checksum trailer must be
    /// appended, in wire order: tag codes, values, and separators alike.
    #[inline]
    pub fn append_raw(&mut self, literal: &[u8]) {
        self.raw.extend_from_slice(literal);
    }

    /// Number of raw bytes accumulated so far.
    #[inline]
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.raw.len()
    }

    /// Verifies the declared checksum against the accumulated raw bytes.
    ///
    /// # Errors
    /// Returns [`DecodeError::MissingChecksum`] if no well-formed checksum
    /// was stored, or [`DecodeError::ChecksumMismatch`] if the declared
    /// value differs from the computed one.
    pub fn validate(&self) -> Result<(), DecodeError> {
        let declared =
            parse_checksum(&self.tail.checksum).ok_or(DecodeError::MissingChecksum)?;
        let calculated = checksum_of(&self.raw);
        if calculated != declared {
            return Err(DecodeError::ChecksumMismatch {
                calculated,
                declared,
            });
        }
        Ok(())
    }
}
