//! Quote reader example.
//!
//! Decodes a stream of market-data quote messages and logs each one. Pass a
//! file path to read captured wire data, or run without arguments to decode
//! a generated sample stream.

use std::env;
use std::fs::File;
use std::io::Read;

use anyhow::Context;
use tracing::{info, warn};

use fixquote::prelude::*;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Builds a small sample stream of two snapshots.
fn sample_stream() -> Vec<u8> {
    let mut stream = Vec::new();
    for (symbol, bid, offer) in [("EURUSD", 1.31678, 1.31667), ("GBPUSD", 1.2701, 1.2699)] {
        let mut encoder = Encoder::new("FIX.4.4");
        encoder.put_str(tags::MSG_TYPE, "W");
        encoder.put_str(tags::SENDING_TIME, "20180206-21:43:36.000");
        encoder.put_str(tags::SYMBOL, symbol);
        encoder.put_uint(tags::NO_MD_ENTRIES, 2);
        encoder.put_str(tags::MD_ENTRY_TYPE, "0");
        encoder.put_float(tags::MD_ENTRY_PX, bid);
        encoder.put_float(tags::MD_ENTRY_SIZE, 100000.0);
        encoder.put_str(tags::MD_ENTRY_TYPE, "1");
        encoder.put_float(tags::MD_ENTRY_PX, offer);
        encoder.put_float(tags::MD_ENTRY_SIZE, 100000.0);
        stream.extend_from_slice(&encoder.finish());
    }
    stream
}

fn run(source: impl Read) -> anyhow::Result<()> {
    let mut parser = Parser::new(source);
    loop {
        match parser.parse() {
            Ok(message) => {
                info!(
                    "{} at {}",
                    message.component.symbol, message.header.sending_time
                );
                for entry in &message.body.entries {
                    let side = if entry.side.is_buy() { "buy" } else { "sell" };
                    info!("  {side} {} @ {}", entry.amount, entry.price);
                }
            }
            Err(DecodeError::EndOfStream) => break,
            Err(err) => warn!("rejected message: {err}"),
        }
    }
    info!(
        "done: {} accepted, {} rejected",
        parser.correct_message_count(),
        parser.incorrect_message_count()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();

    match env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("cannot open {path}"))?;
            run(file)
        }
        None => run(sample_stream().as_slice()),
    }
}
