//! Property tests for queue equality and navigation

use maxiplay_core::{AudioId, AudioItem, Category, Owner, ProfileId};
use maxiplay_playback::{
    MemoryEngine, PlaybackConfig, PlaybackController, PlaybackEngine, PlaybackQueue, SessionStore,
};
use proptest::prelude::*;
use std::sync::Arc;

fn item(id: &str, title: &str) -> AudioItem {
    AudioItem {
        id: AudioId::new(id),
        title: title.to_string(),
        about: String::new(),
        category: Category::Others,
        file: format!("https://cdn.example.com/{}.mp3", id),
        poster: None,
        owner: Owner {
            id: ProfileId::new("p"),
            name: "P".to_string(),
        },
    }
}

fn unique_ids(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,6}", 1..max)
        .prop_map(|set| set.into_iter().collect())
}

#[derive(Debug, Clone, Copy)]
enum Nav {
    Next,
    Previous,
}

fn nav() -> impl Strategy<Value = Nav> {
    prop_oneof![Just(Nav::Next), Just(Nav::Previous)]
}

proptest! {
    #[test]
    fn same_ids_are_same_queue_regardless_of_titles(
        ids in unique_ids(12),
        suffix in "[A-Z]{0,4}",
    ) {
        let original: Vec<_> = ids.iter().map(|id| item(id, "t")).collect();
        let refetched: Vec<_> = ids
            .iter()
            .map(|id| item(id, &format!("t{}", suffix)))
            .collect();

        let queue = PlaybackQueue::new(original);
        prop_assert!(queue.is_same_queue(&refetched));
        prop_assert_eq!(queue, PlaybackQueue::new(refetched));
    }

    #[test]
    fn any_change_of_order_or_length_is_a_different_queue(
        ids in unique_ids(12),
        swap in any::<prop::sample::Index>(),
    ) {
        let items: Vec<_> = ids.iter().map(|id| item(id, "t")).collect();
        let queue = PlaybackQueue::new(items.clone());

        let mut shorter = items.clone();
        shorter.pop();
        prop_assert!(!queue.is_same_queue(&shorter));

        let mut longer = items.clone();
        longer.push(item("zzzzzzz", "t"));
        prop_assert!(!queue.is_same_queue(&longer));

        if items.len() > 1 {
            let i = swap.index(items.len() - 1);
            let mut swapped = items;
            swapped.swap(i, i + 1);
            prop_assert!(!queue.is_same_queue(&swapped));
        }
    }

    #[test]
    fn session_item_tracks_engine_index_through_navigation(
        ids in unique_ids(8),
        start in any::<prop::sample::Index>(),
        moves in prop::collection::vec(nav(), 0..20),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let items: Vec<_> = ids.iter().map(|id| item(id, "t")).collect();
            let engine = Arc::new(MemoryEngine::new());
            let session = Arc::new(SessionStore::new());
            let config = PlaybackConfig::default();
            let controller = PlaybackController::new(engine.clone(), session.clone(), config)
                .expect("valid playback config");

            let start = start.index(items.len());
            controller
                .on_audio_press(&items[start], &items)
                .await
                .unwrap();

            let mut expected = start;
            for step in moves {
                match step {
                    Nav::Next => {
                        controller.on_next_press().await.unwrap();
                        if expected + 1 < items.len() {
                            expected += 1;
                        }
                    }
                    Nav::Previous => {
                        controller.on_previous_press().await.unwrap();
                        expected = expected.saturating_sub(1);
                    }
                }

                let index = engine.current_index().await.unwrap();
                assert_eq!(index, Some(expected));
                assert_eq!(
                    session.current_item().map(|i| i.id),
                    Some(items[expected].id.clone())
                );
            }
        });
    }
}
