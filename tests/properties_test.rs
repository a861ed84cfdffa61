//! Property-based tests for module-name handling and launcher path math

use proptest::prelude::*;

use jrelink::core::assemble::path_to_root;
use jrelink::core::modules::{self, ModuleSet};

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The number of `../` segments equals the number of path separators in
    /// the launcher script location, at any nesting depth.
    #[test]
    fn prop_path_to_root_matches_depth(
        segments in prop::collection::vec(segment_strategy(), 1..6)
    ) {
        let location = segments.join("/");
        let to_root = path_to_root(&location);
        prop_assert_eq!(to_root.matches("../").count(), segments.len() - 1);
        prop_assert_eq!(to_root.len(), 3 * (segments.len() - 1));
    }

    /// Normalization strips any version suffix and surrounding whitespace,
    /// and is idempotent.
    #[test]
    fn prop_normalize_strips_version(
        name in "[a-z][a-z.]{0,20}",
        version in "[0-9][0-9a-zA-Z.+-]{0,10}",
        pad_left in " {0,4}",
        pad_right in " {0,4}",
    ) {
        let line = format!("{pad_left}{name}@{version}{pad_right}");
        let normalized = modules::normalize(&line);
        prop_assert_eq!(&normalized, &name);
        prop_assert_eq!(modules::normalize(&normalized), name);
    }

    /// Qualifier stripping drops everything from the first slash.
    #[test]
    fn prop_strip_qualifier_has_no_slash(
        name in "[a-z][a-z.]{0,20}",
        qualifier in "[a-z./]{0,20}",
    ) {
        let line = format!("  {name}/{qualifier}");
        let stripped = modules::strip_qualifier(&line);
        prop_assert_eq!(stripped, name);
    }

    /// The jlink module list is sorted and free of duplicates regardless of
    /// insertion order.
    #[test]
    fn prop_module_join_deterministic(
        names in prop::collection::vec("[a-z]{1,8}\\.[a-z]{1,8}", 1..10)
    ) {
        let forward: ModuleSet = names.iter().cloned().collect();
        let reverse: ModuleSet = names.iter().rev().cloned().collect();
        prop_assert_eq!(
            modules::join_modules(&forward),
            modules::join_modules(&reverse)
        );

        let joined = modules::join_modules(&forward);
        let parts: Vec<_> = joined.split(',').collect();
        let mut sorted = parts.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(parts, sorted);
    }
}
