use cc_core::food::FoodKind;
use cc_core::{FoodItem, Pantry};
use cc_save::{load_pantry, pantry_from_json, pantry_to_json, save_pantry_compact};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn kinds() -> Vec<FoodKind> {
    FoodKind::iter().collect()
}

proptest! {
    #[test]
    fn prop_json_round_trip(entries in prop::collection::vec((prop::sample::select(kinds()), 0usize..6, 1u32..10), 0..20)) {
        let mut pantry = Pantry::new();
        for (kind, steps, count) in entries {
            let mut item = FoodItem::stack(kind, count);
            for _ in 0..steps {
                item.advance();
            }
            pantry.add(item);
        }

        let restored = pantry_from_json(&pantry_to_json(&pantry).unwrap()).unwrap();
        prop_assert_eq!(restored.len(), pantry.len());
        for ((_, a), (_, b)) in pantry.iter().zip(restored.iter()) {
            prop_assert_eq!(a, b);
        }
    }
}

#[test]
fn test_compact_file_round_trip() {
    let path = std::env::temp_dir().join("cc_test_pantry_compact.json");
    let mut pantry = Pantry::new();
    for kind in FoodKind::iter() {
        pantry.add(FoodItem::new(kind));
    }
    pantry.spoil_all();

    save_pantry_compact(&pantry, &path).unwrap();
    let loaded = load_pantry(&path).unwrap();
    assert_eq!(loaded.len(), pantry.len());
    for ((_, a), (_, b)) in pantry.iter().zip(loaded.iter()) {
        assert_eq!(a, b);
    }

    std::fs::remove_file(&path).ok();
}
