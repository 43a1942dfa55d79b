//! Property-based tests for directory keys and the rename projection.

use super::leaf::{dir_key, split_leaf};
use super::projection::RenameProjection;
use proptest::prelude::*;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_-]{1,12}",
        Just("cafe\u{301}".to_string()),
        Just("caf\u{e9}".to_string()),
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_component_strategy(), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Extra separators and "." segments never change the key
    #[test]
    fn dir_key_ignores_separator_noise(parts in relative_path_strategy()) {
        let clean = parts.join("/");
        let noisy = format!("./{}//", parts.join("//./"));
        prop_assert_eq!(dir_key(Path::new(&clean)), dir_key(Path::new(&noisy)));
    }

    // Keys end with exactly one separator
    #[test]
    fn dir_key_single_trailing_separator(parts in relative_path_strategy()) {
        let key = dir_key(Path::new(&parts.join("/"))).unwrap();
        let key = key.to_str().unwrap();
        prop_assert!(key.ends_with(MAIN_SEPARATOR));
        prop_assert!(!key[..key.len() - 1].ends_with(MAIN_SEPARATOR));
    }

    // Splitting and re-joining a path gives the path back
    #[test]
    fn split_leaf_round_trips(parts in relative_path_strategy()) {
        let path: PathBuf = parts.iter().collect();
        let (parent, leaf) = split_leaf(&path);
        prop_assert_eq!(parent.join(leaf.unwrap()), path);
    }

    // Recorded directories resolve to their target; everything else to itself
    #[test]
    fn projection_resolves_only_recorded(
        from in relative_path_strategy(),
        to in relative_path_strategy(),
        other in relative_path_strategy(),
    ) {
        let from: PathBuf = from.iter().collect();
        let to: PathBuf = to.iter().collect();
        let other: PathBuf = other.iter().collect();

        let mut projection = RenameProjection::new();
        let stored = projection.record(&from, &to);

        if stored {
            prop_assert_eq!(projection.resolve(&from), to.as_path());
        }
        if dir_key(&other) != dir_key(&from) {
            prop_assert_eq!(projection.resolve(&other), other.as_path());
        }
    }
}
