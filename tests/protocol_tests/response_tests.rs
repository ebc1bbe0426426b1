//! Response Tests
//!
//! These tests verify:
//! - Line classification (OK / ACK / data)
//! - ACK anatomy parsing
//! - Greeting and protocol version parsing
//! - Stream reading up to the terminator

use std::io::Cursor;

use mpdlink::protocol::{
    parse_greeting, read_greeting, read_response, write_command, Ack, Line, ProtocolVersion,
    Response, Terminal,
};
use mpdlink::MpdError;

fn data(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn test_classify_ok() {
    assert_eq!(Line::classify("OK\n"), Line::Ok);
    assert!(Line::classify("OK").is_terminator());
}

#[test]
fn test_classify_data() {
    assert_eq!(
        Line::classify("Title: Money: The Song\n"),
        Line::Data {
            key: "Title".to_string(),
            value: "Money: The Song".to_string()
        }
    );
}

#[test]
fn test_classify_data_without_space_after_colon() {
    assert_eq!(
        Line::classify("key:value"),
        Line::Data {
            key: "key".to_string(),
            value: "value".to_string()
        }
    );
}

#[test]
fn test_classify_data_with_empty_value() {
    assert_eq!(
        Line::classify("Name: "),
        Line::Data {
            key: "Name".to_string(),
            value: String::new()
        }
    );
}

#[test]
fn test_ack_with_colon_is_not_data() {
    let line = Line::classify("ACK [50@0] {play} song doesn't exist: \"10\"\n");
    match line {
        Line::Ack(ack) => {
            assert_eq!(ack.code, 50);
            assert_eq!(ack.index, 0);
            assert_eq!(ack.command, "play");
            assert_eq!(ack.message, "song doesn't exist: \"10\"");
        }
        other => panic!("Expected ACK, got {:?}", other),
    }
}

#[test]
fn test_ack_in_command_list_position() {
    match Line::classify("ACK [2@3] {setvol} Invalid volume value") {
        Line::Ack(ack) => {
            assert_eq!(ack.code, 2);
            assert_eq!(ack.index, 3);
            assert_eq!(ack.command, "setvol");
        }
        other => panic!("Expected ACK, got {:?}", other),
    }
}

#[test]
fn test_malformed_ack_keeps_message() {
    match Line::classify("ACK something odd happened") {
        Line::Ack(ack) => {
            assert_eq!(ack.code, 0);
            assert_eq!(ack.command, "");
            assert_eq!(ack.message, "something odd happened");
        }
        other => panic!("Expected ACK, got {:?}", other),
    }
}

#[test]
fn test_ack_display() {
    let ack = Ack {
        code: 5,
        index: 0,
        command: "foo".to_string(),
        message: "unknown command \"foo\"".to_string(),
    };
    assert_eq!(ack.to_string(), "[5@0] {foo} unknown command \"foo\"");
}

// =============================================================================
// Greeting Tests
// =============================================================================

#[test]
fn test_parse_greeting() {
    assert_eq!(
        parse_greeting("OK MPD 0.16.0\n").unwrap(),
        ProtocolVersion::new(0, 16, 0)
    );
}

#[test]
fn test_parse_greeting_rejects_other_products() {
    assert!(matches!(
        parse_greeting("OK FOO 1.0.0\n"),
        Err(MpdError::Handshake(_))
    ));
    assert!(matches!(parse_greeting("OK\n"), Err(MpdError::Handshake(_))));
    assert!(matches!(
        parse_greeting("OK MPD banana\n"),
        Err(MpdError::Handshake(_))
    ));
}

#[test]
fn test_version_parse_and_order() {
    let v014: ProtocolVersion = "0.14.0".parse().unwrap();
    let v015: ProtocolVersion = "0.15".parse().unwrap();
    let v016: ProtocolVersion = "0.16.2".parse().unwrap();

    assert_eq!(v015, ProtocolVersion::new(0, 15, 0));
    assert!(v014 < v015);
    assert!(v015 < v016);
    assert!(ProtocolVersion::new(1, 0, 0) > v016);
    assert_eq!(v016.to_string(), "0.16.2");
    assert!("1.2.3.4".parse::<ProtocolVersion>().is_err());
}

#[test]
fn test_version_rejects_empty_and_garbage() {
    for input in ["", "   ", "0..1", "0.x.1", "v0.16"] {
        assert!(
            matches!(input.parse::<ProtocolVersion>(), Err(MpdError::Handshake(_))),
            "accepted {:?}",
            input
        );
    }
}

#[test]
fn test_read_greeting_from_empty_stream() {
    let mut reader = Cursor::new(Vec::<u8>::new());
    assert!(matches!(
        read_greeting(&mut reader),
        Err(MpdError::Handshake(_))
    ));
}

// =============================================================================
// Stream Reading Tests
// =============================================================================

#[test]
fn test_read_empty_ok() {
    let mut reader = Cursor::new(b"OK\n".to_vec());
    let response = read_response(&mut reader).unwrap();
    assert!(response.is_ok());
    assert!(response.lines.is_empty());
}

#[test]
fn test_read_data_then_ok() {
    let mut reader = Cursor::new(b"volume: 50\nstate: play\nOK\n".to_vec());
    let response = read_response(&mut reader).unwrap();
    assert_eq!(
        response,
        Response::ok(vec![data("volume", "50"), data("state", "play")])
    );
}

#[test]
fn test_read_stops_at_terminator() {
    let mut reader = Cursor::new(b"OK\nvolume: 80\nOK\n".to_vec());

    let first = read_response(&mut reader).unwrap();
    assert!(first.lines.is_empty());

    let second = read_response(&mut reader).unwrap();
    assert_eq!(second.lines, vec![data("volume", "80")]);
}

#[test]
fn test_read_ack_keeps_preceding_lines() {
    let mut reader = Cursor::new(b"file: a.mp3\nACK [50@0] {add} No such file\n".to_vec());
    let response = read_response(&mut reader).unwrap();

    assert_eq!(response.lines, vec![data("file", "a.mp3")]);
    assert_eq!(response.ack_ref().map(|a| a.code), Some(50));
    assert!(matches!(response.terminal, Terminal::Ack(_)));
}

#[test]
fn test_eof_before_terminator_is_transport_error() {
    let mut reader = Cursor::new(b"volume: 50\nstate: pl".to_vec());
    assert!(matches!(
        read_response(&mut reader),
        Err(MpdError::Transport(_))
    ));
}

#[test]
fn test_into_result_on_ack() {
    let mut reader = Cursor::new(b"ACK [5@0] {foo} unknown command\n".to_vec());
    let response = read_response(&mut reader).unwrap();
    match response.into_result() {
        Err(MpdError::Protocol(ack)) => assert_eq!(ack.message, "unknown command"),
        other => panic!("Expected protocol error, got {:?}", other),
    }
}

#[test]
fn test_write_command() {
    let mut out = Vec::new();
    write_command(&mut out, "play 3\n").unwrap();
    assert_eq!(out, b"play 3\n");
}
