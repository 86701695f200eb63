// Three-tier layout: frozen -> pinned -> regular

use sticky_grid::data::datatable::{DataColumn, DataTable, DataValue};
use sticky_grid::data::sample_data::users_table;
use sticky_grid::state::events::{GridEvent, RowAction, RowRef};
use sticky_grid::ui::layout_sequencer::{PinGutter, RowDivider, RowTier};
use sticky_grid::{GridStateContainer, RowState};

fn create_grid() -> GridStateContainer {
    GridStateContainer::new(users_table().unwrap(), 12)
}

fn without(range: std::ops::Range<usize>, skip: usize) -> Vec<usize> {
    range.filter(|&i| i != skip).collect()
}

#[test]
fn test_initial_layout() {
    let grid = create_grid();
    let layout = grid.layout();

    assert_eq!(layout.current_page, 1);
    assert_eq!(layout.total_pages, 2);
    assert!(layout.frozen_tier.is_empty());
    assert!(layout.pinned_tier.is_empty());
    assert_eq!(layout.tier_indices(RowTier::Regular), (0..12).collect::<Vec<_>>());
    assert!(!layout.pin_gutter_visible);
    assert!(!layout.pinned_section_visible);
    assert!(layout
        .rows()
        .all(|row| row.pin_gutter == PinGutter::Hidden && row.divider == RowDivider::Normal));
}

#[test]
fn test_freeze_five_pin_thirteen_scenario() {
    let mut grid = create_grid();

    assert_eq!(grid.toggle_row_freeze(5), RowState::Frozen);
    assert_eq!(grid.toggle_row_pin(13), RowState::Pinned);

    // Page 1: row 13 is pinned but lives on page 2
    let layout = grid.layout();
    assert_eq!(layout.tier_indices(RowTier::Frozen), vec![5]);
    assert!(layout.pinned_tier.is_empty());
    assert_eq!(layout.tier_indices(RowTier::Regular), without(0..12, 5));
    assert_eq!(layout.regular_tier.len(), 11);
    assert!(layout.pinned_section_visible);
    assert!(layout.pin_gutter_visible);

    // Page 2: frozen row follows, pinned row shows up
    assert!(grid.set_page(2));
    let layout = grid.layout();
    assert_eq!(layout.tier_indices(RowTier::Frozen), vec![5]);
    assert_eq!(layout.tier_indices(RowTier::Pinned), vec![13]);
    assert_eq!(layout.tier_indices(RowTier::Regular), without(12..16, 13));
    assert_eq!(layout.regular_tier.len(), 3);

    let frozen = &layout.frozen_tier[0];
    assert_eq!(frozen.page_local_index, None);
    assert_eq!(
        frozen.record.get(0),
        Some(&DataValue::String("Emily Davis".to_string()))
    );

    let pinned = &layout.pinned_tier[0];
    assert_eq!(pinned.page_local_index, Some(1));
    assert_eq!(
        pinned.record.get(0),
        Some(&DataValue::String("Linda Walker".to_string()))
    );
}

#[test]
fn test_frozen_tier_uses_insertion_order_and_ignores_page() {
    let mut grid = create_grid();
    grid.toggle_row_freeze(14);
    grid.toggle_row_freeze(3);
    grid.toggle_row_freeze(8);

    assert_eq!(grid.layout().tier_indices(RowTier::Frozen), vec![14, 3, 8]);
    grid.set_page(2);
    assert_eq!(grid.layout().tier_indices(RowTier::Frozen), vec![14, 3, 8]);

    // Frozen rows on the current page are not repeated in the regular tier
    assert!(!grid.layout().tier_indices(RowTier::Regular).contains(&14));
    assert!(grid
        .layout()
        .frozen_tier
        .iter()
        .all(|row| row.sticky_top && row.divider == RowDivider::Heavy));
}

#[test]
fn test_pinned_tier_uses_page_order() {
    let mut grid = create_grid();
    grid.toggle_row_pin(9);
    grid.toggle_row_pin(2);
    grid.toggle_row_pin(6);

    let layout = grid.layout();
    assert_eq!(layout.tier_indices(RowTier::Pinned), vec![2, 6, 9]);

    // Only the last pinned row gets the heavy divider
    let dividers: Vec<RowDivider> = layout.pinned_tier.iter().map(|r| r.divider).collect();
    assert_eq!(
        dividers,
        vec![RowDivider::Normal, RowDivider::Normal, RowDivider::Heavy]
    );
    assert!(layout
        .pinned_tier
        .iter()
        .all(|r| r.pin_gutter == PinGutter::Unpin && !r.sticky_top));

    // Everything else keeps an inert gutter cell for alignment
    assert!(layout
        .regular_tier
        .iter()
        .all(|r| r.pin_gutter == PinGutter::Inert));
}

#[test]
fn test_tiers_are_disjoint_and_cover_the_page() {
    let mut grid = create_grid();
    grid.toggle_row_freeze(0);
    grid.toggle_row_freeze(15);
    grid.toggle_row_pin(4);
    grid.toggle_row_pin(11);

    for page in 1..=2 {
        grid.set_page(page);
        let layout = grid.layout();
        let mut seen: Vec<usize> = layout.rows().map(|r| r.global_index).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total, "row rendered twice on page {}", page);

        // Every row of the page appears somewhere
        for global in grid.view().page_range() {
            assert!(seen.contains(&global));
        }
    }
}

#[test]
fn test_stale_indices_are_filtered() {
    let mut grid = create_grid();
    grid.toggle_row_freeze(40);
    grid.toggle_row_freeze(2);
    grid.toggle_row_pin(99);

    let layout = grid.layout();
    assert_eq!(layout.tier_indices(RowTier::Frozen), vec![2]);
    assert!(layout.pinned_tier.is_empty());

    // The set is non-empty, so the gutter and section header still show
    assert!(layout.pin_gutter_visible);
    assert!(layout.pinned_section_visible);
}

#[test]
fn test_gutter_follows_whole_dataset() {
    let mut grid = create_grid();
    grid.toggle_row_pin(15);
    assert!(grid.layout().pin_gutter_visible);

    grid.unpin_row(15);
    assert!(!grid.layout().pin_gutter_visible);
    assert!(grid.layout().rows().all(|r| r.pin_gutter == PinGutter::Hidden));
}

#[test]
fn test_freezing_a_pinned_row_moves_it_between_tiers() {
    let mut grid = create_grid();
    grid.toggle_row_pin(7);
    assert_eq!(grid.layout().tier_indices(RowTier::Pinned), vec![7]);

    grid.toggle_row_freeze(7);
    assert!(!grid.is_pinned(7));
    assert_eq!(grid.layout().tier_indices(RowTier::Frozen), vec![7]);
    assert!(grid.layout().pinned_tier.is_empty());

    grid.toggle_row_pin(7);
    assert!(!grid.is_frozen(7));
    assert!(grid.layout().frozen_tier.is_empty());
}

#[test]
fn test_page_local_row_actions() {
    let mut grid = create_grid();
    grid.set_page(2);

    let state = grid.handle_row_action(RowRef::PageLocal(1), &RowAction::Pin);
    assert_eq!(state, RowState::Pinned);
    assert!(grid.is_pinned(13));

    // Frozen-tier rows are addressed globally, whatever page is current
    grid.handle_row_action(RowRef::PageLocal(3), &RowAction::Freeze);
    assert!(grid.is_frozen(15));
    grid.set_page(1);
    grid.handle_row_action(RowRef::Global(15), &RowAction::Freeze);
    assert!(!grid.is_frozen(15));

    // Unpin from the gutter never unfreezes
    grid.toggle_row_freeze(2);
    grid.handle_row_action(RowRef::PageLocal(2), &RowAction::Unpin);
    assert!(grid.is_frozen(2));

    let state = grid.handle_row_action(RowRef::Global(13), &RowAction::Other("Edit".into()));
    assert_eq!(state, RowState::Pinned);
}

#[test]
fn test_layout_is_idempotent() {
    let mut grid = create_grid();
    grid.toggle_row_freeze(5);
    grid.toggle_row_pin(1);
    grid.toggle_column_freeze(1);

    let first = grid.get_layout();
    // Changing page away and back recomputes from scratch
    grid.set_page(2);
    grid.set_page(1);
    assert_eq!(grid.get_layout(), first);
}

#[test]
fn test_renamed_labels_flow_into_layout() {
    let mut grid = create_grid();
    grid.rename_column(0, "  Full name ").unwrap();

    assert_eq!(grid.layout().columns[0].label, "Full name");
    assert_eq!(grid.column_labels()[1], "Role");
    assert!(grid.rename_column(0, "   ").is_err());
    assert!(grid.rename_column(12, "x").is_err());

    // The actions column has no editable header
    assert!(grid.rename_column(4, "Menu").is_err());
    assert_eq!(grid.column_labels()[4], "");
}

#[test]
fn test_untranslatable_page_local_row_is_ignored() {
    let mut grid = create_grid();
    grid.set_page(2);
    let before = grid.get_layout();

    let changed = grid
        .apply(&GridEvent::RowAction {
            row: RowRef::PageLocal(usize::MAX),
            action: RowAction::Pin,
        })
        .unwrap();

    assert!(!changed);
    assert_eq!(grid.resolve_row(RowRef::PageLocal(usize::MAX)), None);
    assert_eq!(grid.membership().pinned_count(), 0);
    assert_eq!(grid.get_layout(), before);
}

#[test]
fn test_empty_dataset_grid() {
    let mut table = DataTable::new("empty");
    table
        .add_column(DataColumn::new("User"))
        .add_column(DataColumn::action());
    let mut grid = GridStateContainer::new(table, 12);

    grid.toggle_row_freeze(0);
    grid.toggle_row_pin(3);

    assert_eq!(grid.total_pages(), 0);
    assert!(!grid.set_page(1));
    assert!(!grid.next_page());
    assert_eq!(grid.current_page(), 1);

    let layout = grid.layout();
    assert_eq!(layout.total_pages, 0);
    assert!(layout.frozen_tier.is_empty());
    assert!(layout.pinned_tier.is_empty());
    assert!(layout.regular_tier.is_empty());
    assert_eq!(layout.row_count(), 0);
}
