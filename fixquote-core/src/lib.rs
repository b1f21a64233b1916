/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixQuote Core
//!
//! Core types, message model, and error definitions for the FixQuote
//! market-data decoder.
//!
//! This crate provides the fundamental building blocks used across the
//! FixQuote crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Wire types**: The fixed tag set and the [`Side`] enumeration
//! - **Checksum**: Sum-of-bytes mod 256 with 3-digit wire formatting
//! - **Message model**: The incremental [`Message`] accumulator with its
//!   static tag-to-setter dispatch table
//!
//! ## Incremental assembly
//!
//! A [`Message`] receives one (tag, value) pair at a time from the parser,
//! coerces each value to its field's type, and tracks the raw bytes consumed
//! so the trailing checksum can be verified before the message is handed to
//! the caller.

pub mod checksum;
pub mod error;
pub mod message;
pub mod types;

pub use checksum::{checksum_of, format_checksum, parse_checksum};
pub use error::{DecodeError, FixError, Result};
pub use message::{Body, Component, Entry, Header, Message, Tail};
pub use types::{Side, tags};
