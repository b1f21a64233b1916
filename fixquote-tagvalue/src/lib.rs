/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixQuote Tag-Value
//!
//! Streaming tag=value tokenization, parsing, and encoding for the FixQuote
//! market-data decoder.
//!
//! This crate provides the wire-facing half of the decoding pipeline:
//! - **Scanner**: pull tokenizer over any `std::io::Read` source with one
//!   byte of pushback
//! - **Parser**: framing and checksum state machine producing one validated
//!   [`Message`] per call
//! - **Encoder**: builder for well-formed messages with automatic
//!   BodyLength and CheckSum
//!
//! The field separator is configurable per instance and defaults to SOH
//! (0x01), the wire format's historical delimiter.

pub mod encoder;
pub mod parser;
pub mod scanner;
pub mod token;

pub use encoder::Encoder;
pub use fixquote_core::message::Message;
pub use parser::Parser;
pub use scanner::{EQUALS, SOH, Scanner};
pub use token::Token;
