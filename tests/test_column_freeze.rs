// Column freeze boundary behaviour, on its own and through the grid

use sticky_grid::data::sample_data::users_table;
use sticky_grid::ui::column_freeze::ColumnFreezeController;
use sticky_grid::GridStateContainer;

#[test]
fn test_toggle_twice_restores_boundary() {
    for start in [None, Some(0), Some(3)] {
        for column in 0..5 {
            let mut freeze = ColumnFreezeController::new();
            if let Some(b) = start {
                freeze.toggle_freeze(b);
            }
            let before = freeze.boundary();

            freeze.toggle_freeze(column);
            freeze.toggle_freeze(column);

            // From no boundary or from the same column the pair is an
            // identity; from another column it moves and then clears
            if before.is_none() || before == Some(column) {
                assert_eq!(freeze.boundary(), before);
            } else {
                assert_eq!(freeze.boundary(), None);
            }
        }
    }
}

#[test]
fn test_toggle_same_column_from_unfrozen() {
    let mut freeze = ColumnFreezeController::new();
    assert_eq!(freeze.as_signed(), -1);

    freeze.toggle_freeze(2);
    assert_eq!(freeze.boundary(), Some(2));

    freeze.toggle_freeze(2);
    assert_eq!(freeze.boundary(), None);
    assert_eq!(freeze.as_signed(), -1);
}

#[test]
fn test_other_index_moves_boundary() {
    let mut freeze = ColumnFreezeController::new();
    freeze.toggle_freeze(1);
    freeze.toggle_freeze(3);

    // Moves rather than stacks
    assert_eq!(freeze.boundary(), Some(3));
    assert!(freeze.is_frozen(0));
    assert!(freeze.is_frozen(3));
    assert!(!freeze.is_frozen(4));
    assert!(freeze.is_last_frozen(3));
    assert!(!freeze.is_last_frozen(1));

    freeze.toggle_freeze(0);
    assert_eq!(freeze.frozen_count(), 1);
}

#[test]
fn test_grid_column_offsets() {
    let mut grid = GridStateContainer::new(users_table().unwrap(), 12);
    assert_eq!(grid.layout().column_offsets, vec![None; 5]);

    assert!(grid.toggle_column_freeze(2));
    let layout = grid.layout();
    assert_eq!(layout.boundary, Some(2));
    assert_eq!(
        layout.column_offsets,
        vec![Some(0), Some(240), Some(480), None, None]
    );
    assert!(layout.columns[2].is_last_frozen);
    assert!(!layout.columns[1].is_last_frozen);

    assert!(grid.toggle_column_freeze(2));
    assert_eq!(grid.layout().boundary, None);
}

#[test]
fn test_grid_ignores_invalid_columns() {
    let mut grid = GridStateContainer::new(users_table().unwrap(), 12);

    // Actions column is last and never offers freezing
    assert!(!grid.toggle_column_freeze(4));
    assert!(!grid.toggle_column_freeze(99));
    assert_eq!(grid.freeze().boundary(), None);
}
