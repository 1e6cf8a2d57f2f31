//! Layout tests - board snapshots to positioned tiles

use words_tui::core::{BoardSnapshot, GridPosition, LayoutError};
use words_tui::term::{layout_board, BoardLayout, LayoutOptions, OverflowPolicy};
use words_tui::types::{Cell, TILE_HEIGHT, TILE_WIDTH};

fn letters(s: &str) -> Vec<Cell> {
    s.chars().map(Cell::Letter).collect()
}

#[test]
fn test_two_by_two_board_positions_and_contents() {
    let board = BoardSnapshot::new(letters("ABCD"), 2).unwrap();
    let tree = layout_board(&board, &LayoutOptions::default()).unwrap();

    let expected = [(0, 0, "A"), (0, 4, "B"), (3, 0, "C"), (3, 4, "D")];
    assert_eq!(tree.tiles.len(), expected.len());
    for (tile, (top, left, content)) in tree.tiles.iter().zip(expected) {
        assert_eq!(tile.top, top);
        assert_eq!(tile.left, left);
        assert_eq!(tile.content, content);
        assert_eq!((tile.width, tile.height), (TILE_WIDTH, TILE_HEIGHT));
    }
    assert_eq!(tree.extent, (2 * TILE_WIDTH, 2 * TILE_HEIGHT));
}

#[test]
fn test_length_mismatch_fails_before_any_tile() {
    let err = BoardSnapshot::new(letters("ABCDE"), 2).unwrap_err();
    assert_eq!(
        err,
        LayoutError::DimensionMismatch {
            dimension: 2,
            len: 5
        }
    );
    assert!(err.is_contract_violation());
}

#[test]
fn test_dimension_one_has_single_tile_at_origin() {
    let board = BoardSnapshot::new(vec![Cell::Score(9)], 1).unwrap();
    let tree = layout_board(&board, &LayoutOptions::default()).unwrap();
    assert_eq!(tree.tiles.len(), 1);
    assert_eq!((tree.tiles[0].top, tree.tiles[0].left), (0, 0));
    assert_eq!(tree.tiles[0].content, "9");
}

#[test]
fn test_every_dimension_yields_n_squared_tiles_in_order() {
    for dimension in 1..=12 {
        let board = BoardSnapshot::empty(dimension).unwrap();
        let tree = layout_board(&board, &LayoutOptions::default()).unwrap();
        assert_eq!(tree.tiles.len(), dimension * dimension);
        assert_eq!(tree.dimension, dimension);
        for (i, tile) in tree.tiles.iter().enumerate() {
            let pos = GridPosition::from_index(i, dimension);
            assert_eq!(tile.position, pos);
            assert_eq!(tile.top, TILE_HEIGHT * pos.row);
            assert_eq!(tile.left, TILE_WIDTH * pos.column);
        }
    }
}

#[test]
fn test_layout_twice_is_identical() {
    let board = BoardSnapshot::standard()
        .with_cell(7, 7, Cell::Letter('W'))
        .with_cell(7, 8, Cell::Score(12));
    let layout = BoardLayout::new(LayoutOptions::default());
    let first = layout.layout(&board).unwrap();
    let second = layout.layout(&board).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_overflow_policies() {
    let board = BoardSnapshot::new(vec![Cell::Score(250)], 1).unwrap();

    let truncated = layout_board(&board, &LayoutOptions::default()).unwrap();
    assert_eq!(truncated.tiles[0].content, "25");

    let rejected = layout_board(
        &board,
        &LayoutOptions::default().with_overflow(OverflowPolicy::Reject),
    );
    assert!(matches!(
        rejected,
        Err(LayoutError::ContentOverflow { row: 0, column: 0, .. })
    ));

    let widened = layout_board(
        &board,
        &LayoutOptions::default().with_overflow(OverflowPolicy::Widen),
    )
    .unwrap();
    assert_eq!(widened.tiles[0].content, "250");
    assert_eq!(widened.tiles[0].width, 5);
    assert_eq!(widened.extent, (5, TILE_HEIGHT));
}

#[test]
fn test_widen_keeps_standard_width_when_everything_fits() {
    let board = BoardSnapshot::standard();
    let tree = layout_board(
        &board,
        &LayoutOptions::default().with_overflow(OverflowPolicy::Widen),
    )
    .unwrap();
    assert_eq!(tree.geometry.width, TILE_WIDTH);
}
