//! Property tests for handler deduplication.

use std::collections::HashSet;

use proptest::prelude::*;

use gladius::{ContentHash, HandlerOptions, Outcome, WatchHandler};

fn contents() -> impl Strategy<Value = Vec<Vec<u8>>> {
    // small alphabet so duplicates are common
    let body = proptest::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'\n')], 0..4);
    proptest::collection::vec(body, 1..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one staged file per distinct content, however often it is seen.
    #[test]
    fn property_one_output_per_distinct_content(files in contents(), modify in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let handler = WatchHandler::new(HandlerOptions::new(dir.path().join("root"))).unwrap();
        let incoming = dir.path().join("incoming");
        std::fs::create_dir(&incoming).unwrap();

        let mut materialized = 0usize;
        for (i, content) in files.iter().enumerate() {
            let path = incoming.join(format!("f{i}"));
            std::fs::write(&path, content).unwrap();
            let outcome = if modify {
                handler.on_modified(&path).unwrap()
            } else {
                handler.on_created(&path).unwrap()
            };
            if let Outcome::Materialized(file) = &outcome {
                prop_assert_eq!(std::fs::read(file.path()).unwrap(), content.clone());
                materialized += 1;
            }
        }

        let distinct: HashSet<&Vec<u8>> = files.iter().collect();
        prop_assert_eq!(materialized, distinct.len());
        prop_assert_eq!(std::fs::read_dir(handler.outpath()).unwrap().count(), distinct.len());

        let expected: HashSet<ContentHash> =
            distinct.iter().map(|c| ContentHash::from_bytes(c)).collect();
        let cached: HashSet<ContentHash> = handler.cache_snapshot().into_iter().collect();
        prop_assert_eq!(cached, expected);
    }

    /// PROPERTY: replaying the same notification is a cache hit.
    #[test]
    fn property_replay_is_idempotent(content in proptest::collection::vec(any::<u8>(), 0..64), replays in 1usize..5) {
        let dir = tempfile::tempdir().unwrap();
        let handler = WatchHandler::new(HandlerOptions::new(dir.path())).unwrap();
        let src = dir.path().join("src.bin");
        std::fs::write(&src, &content).unwrap();

        prop_assert!(handler.on_created(&src).unwrap().is_materialized());
        for _ in 0..replays {
            let is_duplicate = matches!(handler.on_created(&src).unwrap(), Outcome::Duplicate { .. });
            prop_assert!(is_duplicate);
        }
        prop_assert_eq!(handler.cache_snapshot().len(), 1);
    }
}
