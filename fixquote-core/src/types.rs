/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Core wire types for quote message decoding.
//!
//! This module provides:
//! - [`tags`]: The fixed tag numbers understood by the decoder
//! - [`Side`]: Entry side enumeration (tag 269)

use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag numbers of the fixed quote-message schema.
///
/// The mapping from tag to field is process-wide immutable: the full set of
/// tags the decoder understands is exactly the constants below. Any other
/// tag encountered on the wire is skipped (its bytes still count toward the
/// body length and the checksum).
pub mod tags {
    /// BeginString (8): protocol version string, e.g. "FIX.4.4".
    pub const BEGIN_STRING: u32 = 8;
    /// BodyLength (9): byte count of the message body, used for framing.
    pub const BODY_LENGTH: u32 = 9;
    /// MsgType (35): message type code, e.g. "W".
    pub const MSG_TYPE: u32 = 35;
    /// SendingTime (52): transmission timestamp, kept verbatim.
    pub const SENDING_TIME: u32 = 52;
    /// Symbol (55): instrument identifier.
    pub const SYMBOL: u32 = 55;
    /// NoMDEntries (268): declared count of priced entries.
    pub const NO_MD_ENTRIES: u32 = 268;
    /// MDEntryType (269): side of one entry, "0" buy or "1" sell.
    pub const MD_ENTRY_TYPE: u32 = 269;
    /// MDEntryPx (270): price of the current entry.
    pub const MD_ENTRY_PX: u32 = 270;
    /// MDEntrySize (271): amount of the current entry.
    pub const MD_ENTRY_SIZE: u32 = 271;
    /// CheckSum (10): three-digit zero-padded sum-mod-256 trailer.
    pub const CHECKSUM: u32 = 10;
}

/// Entry side enumeration (tag 269).
///
/// The market-data entry type is encoded on the wire as a single digit:
/// "0" for a bid, "1" for an offer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromPrimitive,
    ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Bid entry.
    #[default]
    Buy = b'0',
    /// Offer entry.
    Sell = b'1',
}

impl Side {
    /// Creates a Side from its wire character.
    ///
    /// # Arguments
    /// * `c` - The character representing the side
    ///
    /// # Returns
    /// `Some(Side)` if the character is valid, `None` otherwise.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Buy),
            '1' => Some(Self::Sell),
            _ => None,
        }
    }

    /// Returns the wire character for this side.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Returns true if this is the buy side.
    #[must_use]
    pub const fn is_buy(self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Returns true if this is the sell side.
    #[must_use]
    pub const fn is_sell(self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<u8> for Side {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_char(value as char).ok_or(())
    }
}
