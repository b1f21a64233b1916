/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixQuote
//!
//! A streaming decoder for FIX tag=value market-data quote messages.
//!
//! FixQuote reads a raw byte source, frames each message by its declared
//! body length, verifies the trailing sum-mod-256 checksum, and hands the
//! caller a typed quote with one or more priced entries.
//!
//! ## Quick Start
//!
//! ```rust
//! use fixquote::prelude::*;
//!
//! let wire = b"8=FIX.4.4\x019=21\x0135=W\x0155=EURUSD\x01268=0\x0110=134\x01";
//! let mut parser = Parser::new(wire.as_slice());
//!
//! let message = parser.parse().unwrap();
//! assert_eq!(message.component.symbol, "EURUSD");
//! assert_eq!(parser.parse(), Err(DecodeError::EndOfStream));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Message model, checksum, wire types, and error definitions
//! - [`tagvalue`]: Scanner, parser state machine, and encoder

pub mod core {
    //! Message model, checksum, wire types, and error definitions.
    pub use fixquote_core::*;
}

pub mod tagvalue {
    //! Scanner, parser state machine, and encoder.
    pub use fixquote_tagvalue::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixquote_core::{
        Body, Component, DecodeError, Entry, FixError, Header, Message, Result, Side, Tail,
        checksum_of, format_checksum, parse_checksum, tags,
    };

    // Wire handling
    pub use fixquote_tagvalue::{Encoder, Parser, SOH, Scanner, Token};
}
