//! End-to-end script runs over a snapshot file

use maxiplay_cli::{CliConfig, ListSource, Player, SnapshotCatalog};
use maxiplay_core::AudioId;
use maxiplay_playback::{PlaybackEvent, PlayerStatus};
use std::io::Write;
use std::sync::Arc;

const SNAPSHOT: &str = r#"{
    "latest": {"audios": [
        {"id":"l1","title":"Latest one","category":"Tech","file":"https://cdn/l1.mp3","owner":{"id":"u1","name":"Ada"}},
        {"id":"l2","title":"Latest two","category":"Tech","file":"https://cdn/l2.mp3","owner":{"id":"u1","name":"Ada"}},
        {"id":"l3","title":"Latest three","category":"Arts","file":"https://cdn/l3.mp3","owner":{"id":"u2","name":"Bo"}}
    ]},
    "favorites": {"audios": [
        {"id":"l3","title":"Latest three","category":"Arts","file":"https://cdn/l3.mp3","owner":{"id":"u2","name":"Bo"}},
        {"id":"f1","title":"Fav","category":"Kids & Family","file":"https://cdn/f1.mp3","owner":{"id":"u2","name":"Bo"}}
    ]}
}"#;

fn player() -> Player {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();
    let catalog = SnapshotCatalog::open(file.path()).unwrap();

    let config = CliConfig::default();
    let list: ListSource = config.catalog.default_list.parse().unwrap();
    Player::new(Arc::new(catalog), list, config.playback)
        .expect("player with default config")
}

#[tokio::test]
async fn test_press_toggle_and_navigate() {
    let player = player();

    let report = player.run("press:l1").await;
    assert_eq!(report.status, PlayerStatus::Playing);
    assert_eq!(report.current_item, Some(AudioId::new("l1")));
    assert_eq!(
        report.events.last(),
        Some(&PlaybackEvent::TrackChanged {
            item_id: AudioId::new("l1"),
            previous_item_id: None,
        })
    );

    // Pressing the playing item pauses it
    let report = player.run("press:l1").await;
    assert_eq!(report.status, PlayerStatus::Paused);
    assert_eq!(report.events, vec![PlaybackEvent::Paused]);

    let report = player.run("prev").await;
    assert!(report.error.is_none());
    assert_eq!(report.current_item, Some(AudioId::new("l1")));
    assert!(report.events.is_empty());

    let report = player.run("next").await;
    assert_eq!(report.current_item, Some(AudioId::new("l2")));
}

#[tokio::test]
async fn test_same_item_from_other_list_switches_queue() {
    let player = player();
    player.run("press:l3").await;

    // Same id, different list, engine playing: the press toggles
    let report = player.run("press:l3@favorites").await;
    assert_eq!(report.status, PlayerStatus::Paused);
    assert_eq!(report.queue.len(), 3);

    let report = player.run("press:f1@favorites").await;
    assert_eq!(report.status, PlayerStatus::Playing);
    assert_eq!(report.queue, vec![AudioId::new("l3"), AudioId::new("f1")]);
    assert!(report
        .events
        .contains(&PlaybackEvent::QueueReplaced { length: 2 }));
}

#[tokio::test]
async fn test_seek_skip_and_rate_report() {
    let player = player();
    player.run("press:l2").await;

    let report = player.run("seek:42").await;
    assert_eq!(
        report.events,
        vec![PlaybackEvent::Seeked {
            position_ms: 42_000
        }]
    );

    let report = player.run("skip:-").await;
    assert_eq!(
        report.events,
        vec![PlaybackEvent::Seeked {
            position_ms: 32_000
        }]
    );

    let report = player.run("rate:2").await;
    assert_eq!(report.playback_rate, 2.0);
    assert_eq!(
        report.events,
        vec![PlaybackEvent::RateChanged { rate: 2.0 }]
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["currentItem"], "l2");
    assert_eq!(json["status"], "Playing");
}
