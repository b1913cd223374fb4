//! Row alignment and item placement.

use crate::primitives::{Point, Rect};

use super::item::Item;
use super::length::Alignment;
use super::rows::{ItemSlot, Row};

/// Left offset of a row relative to the content-area left edge.
///
/// Rows wider than `available_width` get a negative offset under
/// `Center`/`End`, like the container would draw them.
#[inline]
pub fn row_offset(row_width: f32, available_width: f32, alignment: Alignment) -> f32 {
    match alignment {
        Alignment::Start => 0.0,
        Alignment::Center => (available_width - row_width) / 2.0,
        Alignment::End => available_width - row_width,
    }
}

/// Place one row's slots left to right.
///
/// `origin` is the content-area left edge and the row's top. Each item sits
/// inside its margins; the cursor advances by the outer width. Indicator
/// slots are skipped if no indicator is given.
pub fn place_row(
    row: &Row,
    items: &[Item],
    indicator: Option<&Item>,
    origin: Point,
    available_width: f32,
    alignment: Alignment,
) -> Vec<(ItemSlot, Rect)> {
    let mut cursor = origin.x + row_offset(row.width, available_width, alignment);
    let mut placed = Vec::with_capacity(row.len());

    for slot in row.slots() {
        let item = match slot {
            ItemSlot::Item(i) => &items[i],
            ItemSlot::Indicator => match indicator {
                Some(indicator) => indicator,
                None => continue,
            },
        };
        let bounds = Rect::new(
            cursor + item.margins.left,
            origin.y + item.margins.top,
            item.width,
            item.height,
        );
        placed.push((slot, bounds));
        cursor += item.outer_width();
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::item::Margins;
    use crate::layout::rows::build_rows;

    #[test]
    fn test_row_offset_policies() {
        assert_eq!(row_offset(120.0, 200.0, Alignment::Start), 0.0);
        assert_eq!(row_offset(120.0, 200.0, Alignment::Center), 40.0);
        assert_eq!(row_offset(120.0, 200.0, Alignment::End), 80.0);
        assert_eq!(row_offset(300.0, 200.0, Alignment::End), -100.0);
    }

    #[test]
    fn test_place_row_applies_margins() {
        let items = vec![
            Item::new(30.0, 10.0).with_margins(Margins::new(2.0, 3.0, 4.0, 5.0)),
            Item::new(20.0, 10.0),
        ];
        let rows = build_rows(&items, 0..2, 100.0);
        let placed = place_row(&rows[0], &items, None, Point::new(10.0, 7.0), 100.0, Alignment::Start);

        assert_eq!(placed[0], (ItemSlot::Item(0), Rect::new(12.0, 10.0, 30.0, 10.0)));
        // cursor: 10 + 2 + 30 + 4 = 46
        assert_eq!(placed[1], (ItemSlot::Item(1), Rect::new(46.0, 7.0, 20.0, 10.0)));
    }

    #[test]
    fn test_place_row_centered_with_indicator() {
        let items = vec![Item::new(40.0, 10.0)];
        let more = Item::new(20.0, 10.0);
        let mut row = build_rows(&items, 0..1, 100.0).remove(0);
        row.indicator = true;
        row.width += more.outer_width();

        let placed = place_row(&row, &items, Some(&more), Point::ORIGIN, 100.0, Alignment::Center);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].1.x, 20.0);
        assert_eq!(placed[1], (ItemSlot::Indicator, Rect::new(60.0, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn test_placement_is_repeatable() {
        let items: Vec<_> = (1..5).map(|i| Item::new(i as f32 * 7.0, 9.0)).collect();
        let rows = build_rows(&items, 0..4, 50.0);
        for alignment in [Alignment::Start, Alignment::Center, Alignment::End] {
            let a = place_row(&rows[0], &items, None, Point::new(3.0, 4.0), 50.0, alignment);
            let b = place_row(&rows[0], &items, None, Point::new(3.0, 4.0), 50.0, alignment);
            assert_eq!(a, b);
        }
    }
}
