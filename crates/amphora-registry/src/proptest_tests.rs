//! Property-based tests for identifier encoding.
//!
//! These tests verify the path-segment encoding invariants across many
//! randomly generated inputs.

use proptest::prelude::*;

use crate::id::ResourceId;

/// Strategy for printable-ASCII identifier paths, reserved characters
/// included.
fn raw_path_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,48}"
}

proptest! {
    #[test]
    fn encoded_segments_contain_no_reserved_characters(path in raw_path_strategy()) {
        let segment = ResourceId::Path(path).path_segment();

        for reserved in ['/', '?', '#', '&', '=', '+', ' '] {
            prop_assert!(
                !segment.contains(reserved),
                "'{}' leaked into segment {:?}",
                reserved,
                segment
            );
        }
    }

    #[test]
    fn encoding_round_trips(path in raw_path_strategy()) {
        let segment = ResourceId::Path(path.clone()).path_segment();
        let decoded = urlencoding::decode(&segment).unwrap();

        prop_assert_eq!(decoded.into_owned(), path);
    }

    #[test]
    fn numeric_ids_render_verbatim(id in any::<u64>()) {
        prop_assert_eq!(ResourceId::Id(id).path_segment(), id.to_string());
    }

    #[test]
    fn digit_strings_parse_as_numeric_ids(id in 0u64..1_000_000) {
        let parsed: ResourceId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, ResourceId::Id(id));
    }
}
