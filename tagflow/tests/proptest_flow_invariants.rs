//! Property tests for flow layout invariants.

use proptest::prelude::*;
use tagflow::layout::{build_rows, row_offset};
use tagflow::{
    Alignment, ContainerConstraints, FlowConfig, FlowLayout, FlowMode, Item, ItemSlot, Margins,
};

fn item_strategy() -> impl Strategy<Value = Item> {
    (1u16..120, 1u16..40, 0u16..6, any::<bool>()).prop_map(|(w, h, m, gone)| {
        let item = Item::new(w as f32, h as f32).with_margins(Margins::new(m as f32, 0.0, m as f32, 0.0));
        if gone { item.gone() } else { item }
    })
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..40)
}

fn expand() -> FlowLayout {
    FlowLayout::new(FlowConfig::new().mode(FlowMode::Expand))
}

proptest! {
    #[test]
    fn rows_never_exceed_width_unless_single_item(items in items_strategy(), width in 0u16..400) {
        let max = width as f32;
        let rows = build_rows(&items, 0..items.len(), max);
        for row in &rows {
            prop_assert!(row.width <= max || row.items.len() == 1,
                "row {:?} exceeds {}", row, max);
        }
    }

    #[test]
    fn expand_places_every_visible_item_once(items in items_strategy(), width in 0u16..400) {
        let result = expand()
            .layout(&items, None, ContainerConstraints::with_max_width(width as f32))
            .unwrap();

        let visible: Vec<usize> = (0..items.len()).filter(|&i| items[i].is_visible()).collect();
        let placed: Vec<usize> = result.placements.iter().filter_map(|p| match p.slot {
            ItemSlot::Item(i) => Some(i),
            ItemSlot::Indicator => None,
        }).collect();
        prop_assert_eq!(placed, visible);
        prop_assert!(result.hidden.is_empty());
    }

    #[test]
    fn shrink_truncates_only_when_cap_is_exceeded(
        items in items_strategy(),
        width in 40u16..400,
        max_rows in 1usize..5,
        more_width in 1u16..40,
    ) {
        let max = width as f32;
        let more = Item::new(more_width as f32, 20.0);
        let layout = FlowLayout::new(FlowConfig::new().mode(FlowMode::Shrink).max_rows(max_rows));
        let result = layout
            .layout(&items, Some(&more), ContainerConstraints::with_max_width(max))
            .unwrap();
        let full_rows = build_rows(&items, 0..items.len(), max).len();

        prop_assert!(result.rows.len() <= max_rows);
        for row in &result.rows {
            prop_assert!(row.width <= max || row.len() == 1,
                "row {:?} exceeds {}", row, max);
        }
        let shown = result.placements.iter()
            .filter(|p| matches!(p.slot, ItemSlot::Item(_)))
            .count();
        prop_assert_eq!(shown, result.plan.max_show_count);

        if full_rows <= max_rows {
            prop_assert!(!result.plan.needs_indicator);
            prop_assert!(result.hidden.is_empty());
        } else {
            prop_assert!(result.plan.needs_indicator);
            prop_assert_eq!(result.rows.len(), max_rows);

            let last = result.rows.last().unwrap();
            prop_assert_eq!(last.slots().last(), Some(ItemSlot::Indicator));

            // One more real item on the last row would not fit beside the indicator.
            let next = result.hidden[0];
            let grown = last.width + items[next].outer_width();
            prop_assert!(grown > max);
        }
    }

    #[test]
    fn alignment_offsets_are_pure(row_width in 0.0f32..500.0, available in 0.0f32..500.0) {
        for alignment in [Alignment::Start, Alignment::Center, Alignment::End] {
            prop_assert_eq!(
                row_offset(row_width, available, alignment),
                row_offset(row_width, available, alignment)
            );
        }
    }

    #[test]
    fn wider_container_never_adds_rows(items in items_strategy(), width in 0u16..400, extra in 0u16..200) {
        let narrow = build_rows(&items, 0..items.len(), width as f32).len();
        let wide = build_rows(&items, 0..items.len(), (width + extra) as f32).len();
        prop_assert!(wide <= narrow);
    }
}
