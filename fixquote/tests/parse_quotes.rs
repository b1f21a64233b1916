/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! End-to-end decoding tests over the public API.

use fixquote::prelude::*;

/// The reference market-data snapshot, SOH-delimited.
const SNAPSHOT: &[u8] = b"8=FIX.4.4\x019=142\x0135=W\x0134=0\x0149=justtech\x01\
52=20180206-21:43:36.000\x0156=user\x01262=TEST\x0155=EURUSD\x01268=2\x01\
269=0\x01270=1.31678\x01271=100000.0\x01269=1\x01270=1.31667\x01\
271=100000.0\x0110=057\x01";

#[test]
fn decodes_reference_snapshot() {
    let mut parser = Parser::new(SNAPSHOT);
    let message = parser.parse().expect("snapshot must decode");

    assert_eq!(
        message.header,
        Header {
            version: "FIX.4.4".to_string(),
            body_length: 142,
            msg_type: "W".to_string(),
            sending_time: "20180206-21:43:36.000".to_string(),
        }
    );
    assert_eq!(message.component.symbol, "EURUSD");
    assert_eq!(message.body.entry_count, 2);
    assert_eq!(
        message.body.entries.as_slice(),
        [
            Entry {
                side: Side::Buy,
                price: 1.31678,
                amount: 100000.0,
            },
            Entry {
                side: Side::Sell,
                price: 1.31667,
                amount: 100000.0,
            },
        ]
    );
    assert_eq!(message.tail.checksum.as_str(), "057");
}

#[test]
fn rejects_wrong_declared_checksum() {
    // Same bytes with the trailer changed from 057 to 054.
    let mut tampered = SNAPSHOT.to_vec();
    let last_digit = tampered.len() - 2;
    assert_eq!(tampered[last_digit], b'7');
    tampered[last_digit] = b'4';

    let mut parser = Parser::new(tampered.as_slice());
    assert_eq!(
        parser.parse(),
        Err(DecodeError::ChecksumMismatch {
            calculated: 57,
            declared: 54,
        })
    );
    assert_eq!(parser.correct_message_count(), 0);
    assert_eq!(parser.incorrect_message_count(), 1);
}

#[test]
fn one_byte_flip_breaks_integrity() {
    // Flip one byte of the checksummed prefix: EURUSD -> FURUSD bumps the
    // byte sum by one while the declared trailer stays 057.
    let mut flipped = SNAPSHOT.to_vec();
    let position = SNAPSHOT
        .windows(6)
        .position(|window| window == b"EURUSD")
        .unwrap();
    flipped[position] = b'F';

    let mut parser = Parser::new(flipped.as_slice());
    assert_eq!(
        parser.parse(),
        Err(DecodeError::ChecksumMismatch {
            calculated: 58,
            declared: 57,
        })
    );
}

#[test]
fn decodes_concatenated_messages_in_order() {
    let mut stream = Vec::new();
    stream.extend_from_slice(SNAPSHOT);

    let mut second = Encoder::new("FIX.4.4");
    second.put_str(tags::MSG_TYPE, "W");
    second.put_str(tags::SYMBOL, "GBPUSD");
    second.put_uint(tags::NO_MD_ENTRIES, 1);
    second.put_str(tags::MD_ENTRY_TYPE, "1");
    second.put_float(tags::MD_ENTRY_PX, 1.2701);
    second.put_float(tags::MD_ENTRY_SIZE, 250000.0);
    stream.extend_from_slice(&second.finish());

    let mut parser = Parser::new(stream.as_slice());

    let first = parser.parse().unwrap();
    assert_eq!(first.component.symbol, "EURUSD");

    let second = parser.parse().unwrap();
    assert_eq!(second.component.symbol, "GBPUSD");
    assert_eq!(second.body.entries.len(), 1);
    assert!(second.body.entries[0].side.is_sell());
    assert_eq!(second.body.entries[0].price, 1.2701);

    assert_eq!(parser.parse(), Err(DecodeError::EndOfStream));
    assert_eq!(parser.correct_message_count(), 2);
    assert_eq!(parser.incorrect_message_count(), 0);
}

#[test]
fn entry_occurrence_order_is_preserved() {
    let sides = ["0", "1", "1", "0"];
    let mut encoder = Encoder::new("FIX.4.4");
    encoder.put_str(tags::MSG_TYPE, "W");
    encoder.put_str(tags::SYMBOL, "USDJPY");
    encoder.put_uint(tags::NO_MD_ENTRIES, sides.len() as u64);
    for (index, side) in sides.iter().enumerate() {
        encoder.put_str(tags::MD_ENTRY_TYPE, side);
        encoder.put_float(tags::MD_ENTRY_PX, 150.0 + index as f64);
        encoder.put_float(tags::MD_ENTRY_SIZE, 1000.0 * (index + 1) as f64);
    }

    let wire = encoder.finish();
    let mut parser = Parser::new(&wire[..]);
    let message = parser.parse().unwrap();

    assert_eq!(message.body.entries.len(), sides.len());
    for (index, entry) in message.body.entries.iter().enumerate() {
        assert_eq!(entry.side, Side::from_char(sides[index].chars().next().unwrap()).unwrap());
        assert_eq!(entry.price, 150.0 + index as f64);
        assert_eq!(entry.amount, 1000.0 * (index + 1) as f64);
    }
}

#[test]
fn roundtrip_with_custom_separator() {
    let mut encoder = Encoder::new("FIX.4.4").with_separator(b'|');
    encoder.put_str(tags::MSG_TYPE, "W");
    encoder.put_str(tags::SENDING_TIME, "20180206-21:43:36.000");
    encoder.put_str(tags::SYMBOL, "EURUSD");
    encoder.put_uint(tags::NO_MD_ENTRIES, 1);
    encoder.put_str(tags::MD_ENTRY_TYPE, "0");
    encoder.put_float(tags::MD_ENTRY_PX, 1.31678);
    encoder.put_float(tags::MD_ENTRY_SIZE, 100000.0);

    let wire = encoder.finish();
    let mut parser = Parser::with_separator(&wire[..], b'|');
    let message = parser.parse().unwrap();

    assert_eq!(message.component.symbol, "EURUSD");
    assert_eq!(message.body.entries[0].price, 1.31678);
    assert_eq!(message.body.entries[0].amount, 100000.0);
    assert_eq!(parser.parse(), Err(DecodeError::EndOfStream));
}

#[test]
fn body_without_trailer_is_a_framing_error() {
    // The declared body ends, but a regular field follows instead of 10=.
    let wire = b"8=FIX.4.4\x019=5\x0135=W\x0155=EURUSD\x01";
    let mut parser = Parser::new(wire.as_slice());
    assert_eq!(parser.parse(), Err(DecodeError::MissingChecksum));
    assert_eq!(parser.incorrect_message_count(), 1);
}

#[test]
fn stream_remains_usable_after_integrity_error() {
    let mut tampered = SNAPSHOT.to_vec();
    let last_digit = tampered.len() - 2;
    tampered[last_digit] = b'4';

    let mut stream = Vec::new();
    stream.extend_from_slice(&tampered);
    stream.extend_from_slice(SNAPSHOT);

    let mut parser = Parser::new(stream.as_slice());
    assert!(matches!(
        parser.parse(),
        Err(DecodeError::ChecksumMismatch { .. })
    ));
    let recovered = parser.parse().unwrap();
    assert_eq!(recovered.component.symbol, "EURUSD");
    assert_eq!(parser.correct_message_count(), 1);
    assert_eq!(parser.incorrect_message_count(), 1);
}
