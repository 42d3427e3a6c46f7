//! Property-based tests for record merging.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::memory::MemoryStore;
    use crate::record::{load_record, merge_patch};
    use proptest::prelude::*;
    use serde_json::{Map, Value};
    use std::collections::BTreeMap;

    fn object(entries: &BTreeMap<String, i64>) -> Map<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(*v)))
            .collect()
    }

    proptest! {
        #[test]
        fn test_merge_is_spread(
            base in prop::collection::btree_map("[a-e]", any::<i64>(), 0..5),
            patch in prop::collection::btree_map("[a-e]", any::<i64>(), 0..5),
        ) {
            let store = MemoryStore::new();
            merge_patch(&store, "rec", &Value::Object(object(&base))).unwrap();
            merge_patch(&store, "rec", &Value::Object(object(&patch))).unwrap();

            let stored: Map<String, Value> = load_record(&store, "rec").unwrap().unwrap();

            let mut expected = base.clone();
            expected.extend(patch.clone());
            prop_assert_eq!(stored, object(&expected));
        }

        #[test]
        fn test_merge_is_idempotent(
            patch in prop::collection::btree_map("[a-z]{1,4}", any::<bool>(), 0..6),
        ) {
            let store = MemoryStore::new();
            let once = merge_patch(&store, "rec", &patch).unwrap();
            let twice = merge_patch(&store, "rec", &patch).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
