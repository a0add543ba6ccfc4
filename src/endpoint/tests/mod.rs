//! Tests for the simulated endpoint lifecycle, driven end-to-end against
//! discovery on the in-memory `FakeBus`.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crate::bus::{BusClient, BusError, FakeBus};
use crate::discovery::discover;
use crate::endpoint::SimulatedPlayer;
use crate::mpris::{MPRIS_OBJECT_PATH, MPRIS_ROOT_INTERFACE};

#[tokio::test]
async fn started_player_is_discovered() {
    let bus = Arc::new(FakeBus::new());
    let player = SimulatedPlayer::start(Arc::clone(&bus), "demo", "Demo Player")
        .await
        .unwrap();

    assert_eq!(player.bus_name(), "org.mpris.MediaPlayer2.demo");

    let records = discover(bus.as_ref()).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].bus_name, "org.mpris.MediaPlayer2.demo");
    assert_eq!(records[0].identity, "Demo Player");
}

#[tokio::test]
async fn stopped_player_is_no_longer_discovered() {
    let bus = Arc::new(FakeBus::new());
    let mut player = SimulatedPlayer::start(Arc::clone(&bus), "demo", "Demo Player")
        .await
        .unwrap();

    player.stop().await.unwrap();

    let records = discover(bus.as_ref()).await.unwrap();
    assert!(records.is_empty());
    assert!(!bus.has_name("org.mpris.MediaPlayer2.demo").await);
}

#[tokio::test]
async fn stop_is_idempotent() {
    let bus = Arc::new(FakeBus::new());
    let mut player = SimulatedPlayer::start(Arc::clone(&bus), "demo", "Demo Player")
        .await
        .unwrap();

    player.stop().await.unwrap();
    player.stop().await.unwrap();

    assert!(!bus.has_name("org.mpris.MediaPlayer2.demo").await);
}

#[tokio::test]
async fn second_registration_with_same_suffix_fails() {
    let bus = Arc::new(FakeBus::new());
    let _first = SimulatedPlayer::start(Arc::clone(&bus), "demo", "First")
        .await
        .unwrap();

    let second = SimulatedPlayer::start(Arc::clone(&bus), "demo", "Second").await;
    assert!(matches!(second, Err(BusError::NameTaken(name)) if name == "org.mpris.MediaPlayer2.demo"));

    // The first registration survives the conflict and stays discoverable.
    let records = discover(bus.as_ref()).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].identity, "First");
}

#[tokio::test]
async fn conflicting_registration_does_not_leak_its_object() {
    let bus = Arc::new(FakeBus::new());
    let _first = SimulatedPlayer::start(Arc::clone(&bus), "demo", "First")
        .await
        .unwrap();
    let second = SimulatedPlayer::start(Arc::clone(&bus), "demo", "Second").await;
    assert!(matches!(second, Err(BusError::NameTaken(_))));

    // A later registration that serves nothing of its own must not adopt
    // the root object staged by the losing start.
    bus.register_name("org.mpris.MediaPlayer2.bare")
        .await
        .unwrap();

    let records = discover(bus.as_ref()).await.unwrap();
    let identities: Vec<&str> = records.iter().map(|r| r.identity.as_str()).collect();
    assert_eq!(identities, vec!["First"]);
}

#[tokio::test]
async fn players_with_distinct_suffixes_coexist() {
    let bus = Arc::new(FakeBus::new());
    let _one = SimulatedPlayer::start(Arc::clone(&bus), "one", "Player One")
        .await
        .unwrap();
    let _two = SimulatedPlayer::start(Arc::clone(&bus), "two", "Player Two")
        .await
        .unwrap();

    let records = discover(bus.as_ref()).await.unwrap();
    let identities: Vec<&str> = records.iter().map(|r| r.identity.as_str()).collect();
    assert_eq!(identities, vec!["Player One", "Player Two"]);
}

#[tokio::test]
async fn raise_and_quit_are_accepted_as_noops() {
    let bus = Arc::new(FakeBus::new());
    let player = SimulatedPlayer::start(Arc::clone(&bus), "demo", "Demo Player")
        .await
        .unwrap();

    for member in ["Raise", "Quit"] {
        bus.call_method(
            player.bus_name(),
            MPRIS_OBJECT_PATH,
            MPRIS_ROOT_INTERFACE,
            member,
        )
        .await
        .unwrap();
    }
}

#[tokio::test]
async fn unimplemented_methods_are_answered_with_an_error() {
    let bus = Arc::new(FakeBus::new());
    let player = SimulatedPlayer::start(Arc::clone(&bus), "demo", "Demo Player")
        .await
        .unwrap();

    let result = bus
        .call_method(
            player.bus_name(),
            MPRIS_OBJECT_PATH,
            "org.mpris.MediaPlayer2.Player",
            "Play",
        )
        .await;

    assert!(matches!(result, Err(BusError::NotSupported { .. })));

    // The endpoint is still serving afterwards.
    let records = discover(bus.as_ref()).await.unwrap();
    assert_eq!(records.len(), 1);
}
