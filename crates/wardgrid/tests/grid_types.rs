//! Integration tests for the `Grid` container.

use wardgrid::{Grid, GridError};

fn seeded() -> Grid<i32> {
    Grid::from_values(3, 4, 1..=12).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_has_requested_dimensions() {
    let g: Grid<i32> = Grid::new(3, 4);
    assert_eq!(g.dimensions(), (3, 4));
    assert_eq!(g.nrows(), 3);
    assert_eq!(g.ncols(), 4);
    assert_eq!(g.len(), 12);
}

#[test]
fn new_with_zero_dimension_is_empty() {
    let g: Grid<u8> = Grid::new(0, 7);
    assert_eq!(g.dimensions(), (0, 7));
    assert!(g.is_empty());
}

#[test]
fn new_default_constructs_strings() {
    let g: Grid<String> = Grid::new(2, 2);
    assert!(g.iter().all(|s| s.is_empty()));
}

#[test]
fn from_values_fills_row_major() {
    let g = seeded();
    assert_eq!(g.at(0, 0), Ok(&1));
    assert_eq!(g.at(0, 3), Ok(&4));
    assert_eq!(g.at(1, 0), Ok(&5));
    assert_eq!(g.at(2, 3), Ok(&12));
}

#[test]
fn from_values_short_sequence_errors() {
    let result = Grid::from_values(3, 4, vec![1, 2, 3]);
    assert_eq!(
        result,
        Err(GridError::ShapeMismatch {
            rows: 3,
            cols: 4,
            len: 3
        })
    );
}

#[test]
fn from_values_ignores_surplus() {
    let g = Grid::from_values(2, 2, 1..=10).unwrap();
    assert_eq!(g.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn from_shape_vec_requires_exact_length() {
    assert!(Grid::from_shape_vec((2, 3), vec![0; 6]).is_ok());
    assert!(Grid::from_shape_vec((2, 3), vec![0; 7]).is_err());
}

#[test]
fn try_new_overflow_is_allocation_error() {
    let result: Result<Grid<u8>, _> = Grid::try_new(usize::MAX, 2);
    assert!(matches!(result, Err(GridError::Allocation { .. })));
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

#[test]
fn index_writes_are_visible_through_at() {
    let mut g = seeded();
    g[(1, 1)] = 13;
    assert_eq!(g.at(1, 1), Ok(&13));
    assert_eq!(g[(1, 1)], 13);
}

#[test]
fn at_mut_writes_in_place() {
    let mut g = seeded();
    *g.at_mut(2, 0).unwrap() = -1;
    assert_eq!(g[(2, 0)], -1);
}

#[test]
fn every_in_bounds_cell_returns_last_write() {
    let mut g: Grid<usize> = Grid::new(4, 5);
    for r in 0..4 {
        for c in 0..5 {
            *g.at_mut(r, c).unwrap() = r * 100 + c;
        }
    }
    for r in 0..4 {
        for c in 0..5 {
            assert_eq!(*g.at(r, c).unwrap(), r * 100 + c);
        }
    }
}

#[test]
fn at_out_of_range_names_the_axis() {
    let g = seeded();
    assert_eq!(g.at(3, 0), Err(GridError::RowOutOfRange { row: 3, rows: 3 }));
    assert_eq!(
        g.at(0, 4),
        Err(GridError::ColumnOutOfRange { col: 4, cols: 4 })
    );
    // row is reported first when both are out of range
    assert_eq!(g.at(9, 9), Err(GridError::RowOutOfRange { row: 9, rows: 3 }));
}

#[test]
fn out_of_range_message_mentions_bounds() {
    let err = seeded().at(0, 10).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("column index 10"));
    assert!(msg.contains("4 columns"));
}

#[test]
fn row_and_column_views() {
    let g = seeded();
    assert_eq!(g.row(1).unwrap(), &[5, 6, 7, 8]);
    assert_eq!(g.column(2).unwrap(), vec![3, 7, 11]);
    assert!(g.row(3).is_err());
    assert!(g.column(4).is_err());
}

// ---------------------------------------------------------------------------
// Copy semantics
// ---------------------------------------------------------------------------

#[test]
fn clone_is_independent() {
    let mut a = seeded();
    let mut b = a.clone();
    assert_eq!(a, b);

    b[(0, 0)] = 100;
    assert_eq!(a[(0, 0)], 1);
    a[(2, 3)] = 200;
    assert_eq!(b[(2, 3)], 12);
}

#[test]
fn assign_replaces_shape_and_content() {
    let src = seeded();
    let mut dst: Grid<i32> = Grid::new(1, 1);
    dst.assign(&src);
    assert_eq!(dst.dimensions(), (3, 4));
    assert_eq!(dst, src);

    dst[(1, 2)] = 0;
    assert_eq!(src[(1, 2)], 7);
}

#[test]
fn assign_from_own_copy_keeps_content() {
    let mut a = seeded();
    let snapshot = a.clone();
    a.assign(&snapshot);
    assert_eq!(a, snapshot);
}

#[test]
fn nested_scope_copies_drop_cleanly() {
    {
        let mut local: Grid<i32> = Grid::new(500, 1000);
        local[(50, 100)] = 2;

        let mut copy = local.clone();
        let mut assigned: Grid<i32> = Grid::new(1, 1);
        assigned.assign(&local);

        assert_eq!(copy[(50, 100)], 2);
        assert_eq!(assigned[(50, 100)], 2);

        copy[(10, 20)] = 3;
        assigned[(10, 20)] = 4;
        assert_eq!(local[(10, 20)], 0);
        assert_eq!(copy[(10, 20)], 3);
        assert_eq!(assigned[(10, 20)], 4);
    }
}

#[test]
#[ignore = "allocates roughly 600 MB"]
fn large_grid_copies_drop_cleanly() {
    let mut local: Grid<i32> = Grid::new(5000, 10000);
    local[(500, 1000)] = 2;
    let copy = local.clone();
    let mut assigned: Grid<i32> = Grid::new(1, 1);
    assigned.assign(&local);
    assert_eq!(copy[(500, 1000)], 2);
    assert_eq!(assigned[(500, 1000)], 2);
}

// ---------------------------------------------------------------------------
// Resize
// ---------------------------------------------------------------------------

#[test]
fn resize_grow_preserves_overlap() {
    let mut g: Grid<i32> = Grid::new(2, 3);
    g.fill(7);
    g.resize(5, 5);
    assert_eq!(g.dimensions(), (5, 5));
    for r in 0..2 {
        for c in 0..3 {
            assert_eq!(g[(r, c)], 7);
        }
    }
}

#[test]
fn resize_keeps_coordinates_not_offsets() {
    let mut g = seeded();
    g.resize(4, 6);
    assert_eq!(g.row(0).unwrap(), &[1, 2, 3, 4, 0, 0]);
    assert_eq!(g.row(2).unwrap(), &[9, 10, 11, 12, 0, 0]);
    assert_eq!(g.row(3).unwrap(), &[0; 6]);
}

#[test]
fn resize_shrink_drops_outside_cells() {
    let mut g = seeded();
    g.resize(2, 2);
    assert_eq!(g.as_slice(), &[1, 2, 5, 6]);
    assert!(g.at(2, 0).is_err());
    assert!(g.at(0, 2).is_err());
}

#[test]
fn resize_shrink_then_grow_does_not_resurrect() {
    let mut g: Grid<i32> = Grid::new(2, 3);
    g.fill(9);
    g.resize(1, 1);
    g.resize(2, 3);
    assert_eq!(g[(0, 0)], 9);
    assert_eq!(g[(1, 2)], i32::default());
}

#[test]
fn resize_mixed_grow_and_shrink() {
    let mut g = seeded();
    g.resize(5, 2);
    assert_eq!(g.column(0).unwrap(), vec![1, 5, 9, 0, 0]);
    assert_eq!(g.column(1).unwrap(), vec![2, 6, 10, 0, 0]);
}

// ---------------------------------------------------------------------------
// Swaps
// ---------------------------------------------------------------------------

#[test]
fn swap_rows_exchanges_contents() {
    let mut g = seeded();
    g.swap_rows(1, 2).unwrap();
    assert_eq!(g.row(1).unwrap(), &[9, 10, 11, 12]);
    assert_eq!(g.row(2).unwrap(), &[5, 6, 7, 8]);
    assert_eq!(g.row(0).unwrap(), &[1, 2, 3, 4]);
}

#[test]
fn swap_rows_order_does_not_matter() {
    let mut a = seeded();
    let mut b = seeded();
    a.swap_rows(0, 2).unwrap();
    b.swap_rows(2, 0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn swap_cols_exchanges_contents() {
    let mut g = seeded();
    g.swap_cols(1, 2).unwrap();
    assert_eq!(g.column(1).unwrap(), vec![3, 7, 11]);
    assert_eq!(g.column(2).unwrap(), vec![2, 6, 10]);
    assert_eq!(g.column(0).unwrap(), vec![1, 5, 9]);
}

#[test]
fn self_swap_is_noop() {
    let mut g = seeded();
    g.swap_rows(1, 1).unwrap();
    g.swap_cols(3, 3).unwrap();
    assert_eq!(g, seeded());
}

#[test]
fn swap_out_of_range_leaves_grid_untouched() {
    let mut g = seeded();
    assert_eq!(
        g.swap_rows(0, 3),
        Err(GridError::RowOutOfRange { row: 3, rows: 3 })
    );
    assert_eq!(
        g.swap_cols(4, 0),
        Err(GridError::ColumnOutOfRange { col: 4, cols: 4 })
    );
    assert_eq!(g, seeded());
}

#[test]
fn demo_sequence_matches_expected_layout() {
    let mut g = seeded();
    g[(1, 1)] = 13;
    g.swap_rows(1, 2).unwrap();
    g.swap_cols(1, 2).unwrap();
    assert_eq!(
        g.as_slice(),
        &[1, 3, 2, 4, 9, 11, 10, 12, 5, 7, 13, 8]
    );
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn dump_writes_rows_and_trailing_blank_line() {
    let g = Grid::from_values(2, 3, 1..=6).unwrap();
    let mut out = Vec::new();
    g.dump_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1 2 3\n4 5 6\n\n");
}

#[test]
fn display_renders_rows() {
    let g = Grid::from_values(2, 2, vec![true, false, false, true]).unwrap();
    assert_eq!(g.to_string(), "true false\nfalse true\n");
}

#[test]
fn mapv_keeps_shape() {
    let g = seeded().mapv(|v| v % 2 == 0);
    assert_eq!(g.dimensions(), (3, 4));
    assert!(g[(0, 1)]);
    assert!(!g[(0, 0)]);
}
