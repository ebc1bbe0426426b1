//! Tests for the Status Attribute Model
//!
//! These tests verify:
//! - Getters read the snapshot without a round trip
//! - Version gating for getters and setters
//! - Setters echo the written value into the snapshot
//! - ACK handling leaves the snapshot untouched
//! - Status refresh replaces the snapshot wholesale
//! - replay_gain_mode always queries the server

#[path = "../common/mod.rs"]
mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{default_handler, status_reply, Action, MockServer};
use mpdlink::status::{self, ATTRIBUTES, CONSUME, ELAPSED, PLAYLIST_LENGTH, SINGLE, VOLUME};
use mpdlink::{Client, MpdError, PlayState, ProtocolVersion};

fn connect(version: &str) -> (MockServer, Client) {
    let server = MockServer::start(version, default_handler);
    let client = Client::connect(server.config()).unwrap();
    (server, client)
}

// =============================================================================
// Registry Tests
// =============================================================================

#[test]
fn test_registry_entries() {
    assert_eq!(ATTRIBUTES.len(), 21);

    let volume = status::lookup("volume").unwrap();
    assert_eq!(volume.set_command, Some("setvol"));
    assert!(!volume.is_read_only());

    let crossfade = status::lookup("crossfade").unwrap();
    assert_eq!(crossfade.key, "xfade");

    assert!(PLAYLIST_LENGTH.is_read_only());
    assert_eq!(PLAYLIST_LENGTH.key, "playlistlength");
    assert_eq!(SINGLE.min_version, ProtocolVersion::new(0, 15, 0));
    assert_eq!(CONSUME.min_version, ProtocolVersion::new(0, 15, 0));
    assert_eq!(ELAPSED.min_version, ProtocolVersion::new(0, 16, 0));
    assert!(status::lookup("replay_gain_mode").is_none());
}

// =============================================================================
// Getter Tests
// =============================================================================

#[test]
fn test_getters_read_snapshot_without_round_trip() {
    let (server, client) = connect("0.16.0");

    assert_eq!(client.volume().unwrap(), Some(50));
    assert_eq!(client.repeat().unwrap(), Some(false));
    assert_eq!(client.random().unwrap(), Some(true));
    assert_eq!(client.state().unwrap(), Some(PlayState::Play));
    assert_eq!(client.elapsed().unwrap(), Some(42.5));
    assert_eq!(client.crossfade().unwrap(), Some(0));
    assert_eq!(client.get(&PLAYLIST_LENGTH).unwrap(), Some("3"));
    assert_eq!(client.attribute("song_id").unwrap(), Some("12"));

    // Field the server did not report
    assert_eq!(client.attribute("next_song").unwrap(), None);

    assert_eq!(server.command_names(), vec!["status"]);
}

#[test]
fn test_single_requires_0_15() {
    let (_server, client) = connect("0.14.0");

    match client.single() {
        Err(MpdError::Version {
            attribute,
            required,
            actual,
        }) => {
            assert_eq!(attribute, "single");
            assert_eq!(required, ProtocolVersion::new(0, 15, 0));
            assert_eq!(actual, ProtocolVersion::new(0, 14, 0));
        }
        other => panic!("Expected version error, got {:?}", other),
    }

    let (_server, client) = connect("0.16.0");
    assert_eq!(client.single().unwrap(), Some(false));
}

#[test]
fn test_elapsed_requires_0_16() {
    let (_server, client) = connect("0.15.0");
    assert!(matches!(client.elapsed(), Err(MpdError::Version { .. })));
    assert_eq!(client.consume().unwrap(), Some(false));
}

#[test]
fn test_unknown_attribute() {
    let (_server, client) = connect("0.16.0");
    assert!(matches!(
        client.attribute("loudness"),
        Err(MpdError::UnknownAttribute(_))
    ));
}

// =============================================================================
// Setter Tests
// =============================================================================

#[test]
fn test_set_volume_echoes_without_round_trip() {
    let (server, mut client) = connect("0.16.0");

    assert_eq!(client.set_volume(80).unwrap(), Some(80));
    assert_eq!(client.volume().unwrap(), Some(80));
    assert_eq!(client.status().get("volume"), Some("80"));

    let received = server.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[1], vec!["setvol", "80"]);
}

#[test]
fn test_set_below_min_version_sends_nothing() {
    let (server, mut client) = connect("0.14.0");

    assert!(matches!(
        client.set_single(true),
        Err(MpdError::Version { .. })
    ));
    assert!(matches!(
        client.set(&CONSUME, "1"),
        Err(MpdError::Version { .. })
    ));
    assert_eq!(server.command_names(), vec!["status"]);
}

#[test]
fn test_set_read_only_attribute() {
    let (server, mut client) = connect("0.16.0");

    assert!(matches!(
        client.set_attribute("state", "pause"),
        Err(MpdError::ReadOnly(_))
    ));
    assert_eq!(server.command_names(), vec!["status"]);
}

#[test]
fn test_set_flags_and_crossfade() {
    let (server, mut client) = connect("0.16.0");

    assert_eq!(client.set_repeat(true).unwrap(), Some(true));
    assert_eq!(client.set_random(false).unwrap(), Some(false));
    assert_eq!(client.set_consume(true).unwrap(), Some(true));
    assert_eq!(client.set_crossfade(5).unwrap(), Some(5));

    assert_eq!(client.repeat().unwrap(), Some(true));
    assert_eq!(client.status().get("xfade"), Some("5"));

    let received = server.received();
    assert_eq!(received[1], vec!["repeat", "1"]);
    assert_eq!(received[2], vec!["random", "0"]);
    assert_eq!(received[3], vec!["consume", "1"]);
    assert_eq!(received[4], vec!["crossfade", "5"]);
}

#[test]
fn test_set_by_name() {
    let (server, mut client) = connect("0.16.0");

    assert_eq!(
        client.set_attribute("mix_ramp_db", "-17").unwrap(),
        Some("-17".to_string())
    );
    assert_eq!(client.attribute("mix_ramp_db").unwrap(), Some("-17"));
    assert_eq!(server.received()[1], vec!["mixrampdb", "-17"]);
}

#[test]
fn test_set_rejected_leaves_snapshot() {
    let server = MockServer::start("0.16.0", |tokens| match tokens[0].as_str() {
        "setvol" => Action::Reply("ACK [2@0] {setvol} Invalid volume value\n".to_string()),
        _ => default_handler(tokens),
    });
    let mut client = Client::connect(server.config()).unwrap();

    assert_eq!(client.set(&VOLUME, "150").unwrap(), None);
    assert_eq!(client.set_volume(99).unwrap(), None);
    assert_eq!(client.volume().unwrap(), Some(50));
    assert_eq!(client.last_error().map(|ack| ack.code), Some(2));
}

// =============================================================================
// Refresh Tests
// =============================================================================

#[test]
fn test_refresh_replaces_snapshot() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let server = MockServer::start("0.16.0", move |tokens| match tokens[0].as_str() {
        "status" if counter.fetch_add(1, Ordering::SeqCst) > 0 => {
            Action::Reply("volume: 10\nstate: stop\nOK\n".to_string())
        }
        _ => default_handler(tokens),
    });
    let mut client = Client::connect(server.config()).unwrap();
    assert_eq!(client.attribute("song").unwrap(), Some("1"));

    client.refresh_status().unwrap();

    assert_eq!(client.volume().unwrap(), Some(10));
    assert_eq!(client.state().unwrap(), Some(PlayState::Stop));
    assert_eq!(client.attribute("song").unwrap(), None);
    assert_eq!(client.status().len(), 2);
}

#[test]
fn test_refresh_ack_keeps_snapshot() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let server = MockServer::start("0.16.0", move |tokens| match tokens[0].as_str() {
        "status" if counter.fetch_add(1, Ordering::SeqCst) > 0 => {
            Action::Reply("ACK [4@0] {status} you don't have permission\n".to_string())
        }
        "status" => status_reply(65),
        _ => default_handler(tokens),
    });
    let mut client = Client::connect(server.config()).unwrap();

    client.refresh_status().unwrap();

    assert_eq!(client.volume().unwrap(), Some(65));
    assert_eq!(client.last_error().map(|ack| ack.code), Some(4));
}

// =============================================================================
// Replay Gain Tests
// =============================================================================

#[test]
fn test_replay_gain_mode_queries_server() {
    let server = MockServer::start("0.16.0", |tokens| match tokens[0].as_str() {
        "replay_gain_status" => Action::Reply("replay_gain_mode: track\nOK\n".to_string()),
        _ => default_handler(tokens),
    });
    let mut client = Client::connect(server.config()).unwrap();

    assert_eq!(
        client.replay_gain_mode(Some("track")).unwrap(),
        Some("track".to_string())
    );
    assert_eq!(client.replay_gain_mode(None).unwrap(), Some("track".to_string()));

    assert_eq!(
        server.received()[1..],
        [
            vec!["replay_gain_mode".to_string(), "track".to_string()],
            vec!["replay_gain_status".to_string()],
            vec!["replay_gain_status".to_string()],
        ]
    );
}

#[test]
fn test_replay_gain_mode_rejected_set_still_queries() {
    let server = MockServer::start("0.16.0", |tokens| match tokens[0].as_str() {
        "replay_gain_mode" => {
            Action::Reply("ACK [2@0] {replay_gain_mode} Unrecognized mode\n".to_string())
        }
        "replay_gain_status" => Action::Reply("replay_gain_mode: off\nOK\n".to_string()),
        _ => default_handler(tokens),
    });
    let mut client = Client::connect(server.config()).unwrap();

    assert_eq!(
        client.replay_gain_mode(Some("loud")).unwrap(),
        Some("off".to_string())
    );
    assert_eq!(
        server.command_names(),
        vec!["status", "replay_gain_mode", "replay_gain_status"]
    );

    // The successful query does not hide the rejected set
    let ack = client.last_error().unwrap();
    assert_eq!(ack.code, 2);
    assert_eq!(ack.command, "replay_gain_mode");

    // A plain query afterwards clears it
    client.replay_gain_mode(None).unwrap();
    assert!(client.last_error().is_none());
}
