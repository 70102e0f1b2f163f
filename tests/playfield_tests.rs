//! Playfield placement and row clearing tests

use blockfall::core::matrix_for;
use blockfall::{PieceKind, Playfield};

#[test]
fn test_new_field_reports_dimensions_and_is_empty() {
    let field = Playfield::new(20, 10);
    assert_eq!(field.rows(), 20);
    assert_eq!(field.cols(), 10);
    assert_eq!(field.cells().len(), 200);
    assert!(field.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_get_and_set_bounds() {
    let mut field = Playfield::new(20, 10);
    assert!(field.set(19, 9, Some(PieceKind::Z)));
    assert_eq!(field.get(19, 9), Some(Some(PieceKind::Z)));

    // Out of bounds reads are None, writes are refused
    assert_eq!(field.get(20, 0), None);
    assert_eq!(field.get(0, 10), None);
    assert!(!field.set(20, 0, Some(PieceKind::Z)));
}

#[test]
fn test_fits_walls_floor_and_sky() {
    let field = Playfield::new(20, 10);
    let t = matrix_for(PieceKind::T);

    // T occupies columns 0..3 of its matrix, so col 0 touches the left
    // wall and col 7 the right one
    assert!(field.fits(&t, 5, 0));
    assert!(!field.fits(&t, 5, -1));
    assert!(field.fits(&t, 5, 7));
    assert!(!field.fits(&t, 5, 8));

    // Lowest occupied matrix row is 1, so row 18 rests on the floor
    assert!(field.fits(&t, 18, 3));
    assert!(!field.fits(&t, 19, 3));

    // Any height above the field is allowed while columns stay in range
    assert!(field.fits(&t, -2, 3));
    assert!(!field.fits(&t, -2, -1));
}

#[test]
fn test_fits_sees_locked_cells() {
    let mut field = Playfield::new(20, 10);
    let o = matrix_for(PieceKind::O);
    assert!(field.lock(PieceKind::O, &o, 18, 4));

    assert!(!field.fits(&o, 17, 4));
    assert!(!field.fits(&o, 18, 3));
    assert!(field.fits(&o, 16, 4));
    assert!(field.fits(&o, 18, 6));
}

#[test]
fn test_lock_above_the_top_writes_nothing() {
    let mut field = Playfield::new(20, 10);
    field.set(0, 4, Some(PieceKind::J));
    let before: Vec<_> = field.cells().to_vec();

    let o = matrix_for(PieceKind::O);
    assert!(!field.lock(PieceKind::O, &o, -1, 4));
    assert_eq!(field.cells(), before.as_slice());
}

#[test]
fn test_full_field_clears_to_empty() {
    // Two full rows on a 2x3 field collapse in a single pass
    let mut field = Playfield::new(2, 3);
    for row in 0..2 {
        for col in 0..3 {
            field.set(row, col, Some(PieceKind::I));
        }
    }
    assert_eq!(field.clear_completed_rows(), 2);
    assert!(field.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_clearing_slides_the_stack_down() {
    // One survivor in the top row, full row at the bottom
    let mut field = Playfield::new(3, 3);
    field.set(0, 0, Some(PieceKind::S));
    for col in 0..3 {
        field.set(2, col, Some(PieceKind::J));
    }

    assert_eq!(field.clear_completed_rows(), 1);
    assert_eq!(field.get(1, 0), Some(Some(PieceKind::S)));
    assert_eq!(field.get(0, 0), Some(None));
    for col in 0..3 {
        assert_eq!(field.get(2, col), Some(None));
    }
}

#[test]
fn test_partial_rows_survive_a_cascade() {
    // Layout, top to bottom: empty / partial / full / partial
    let mut field = Playfield::new(4, 3);
    field.set(1, 0, Some(PieceKind::T));
    for col in 0..3 {
        field.set(2, col, Some(PieceKind::Z));
    }
    field.set(3, 1, Some(PieceKind::L));

    assert_eq!(field.clear_completed_rows(), 1);

    // The bottom partial row never moved; the one above slid into the gap
    assert_eq!(field.get(3, 1), Some(Some(PieceKind::L)));
    assert_eq!(field.get(2, 0), Some(Some(PieceKind::T)));
    let occupied = field.cells().iter().filter(|cell| cell.is_some()).count();
    assert_eq!(occupied, 2);
}

#[test]
fn test_row_completion_queries() {
    let mut field = Playfield::new(4, 3);
    for col in 0..3 {
        field.set(3, col, Some(PieceKind::O));
    }
    assert!(field.is_row_complete(3));
    assert!(!field.is_row_complete(2));
    // Rows outside the field are never complete
    assert!(!field.is_row_complete(4));
}
