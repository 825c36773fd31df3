//! Piece and shape catalog tests

use blockfall::core::shapes::{catalog, occupied_cells};
use blockfall::core::{definition, Piece};
use blockfall::types::{Color, PieceKind};

#[test]
fn test_rotation_counts_per_kind() {
    let expected = [
        (PieceKind::I, 2),
        (PieceKind::O, 2),
        (PieceKind::T, 4),
        (PieceKind::L, 4),
        (PieceKind::J, 4),
        (PieceKind::Z, 2),
        (PieceKind::S, 2),
    ];
    for (kind, count) in expected {
        assert_eq!(definition(kind).rotation_count(), count, "{:?}", kind);
    }
}

#[test]
fn test_rotation_is_cyclic_for_every_kind() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind, 3, 0);
        let start = piece.current_shape();
        let count = piece.definition().rotation_count();

        for step in 1..count {
            piece.rotate();
            assert_eq!(piece.rotation_index(), step);
        }
        piece.rotate();
        assert_eq!(piece.rotation_index(), 0, "{:?}", kind);
        assert_eq!(piece.current_shape(), start);
    }
}

#[test]
fn test_every_rotation_state_is_rectangular_with_four_cells() {
    for def in catalog() {
        for &shape in def.rotations {
            let width = shape[0].len();
            assert!(shape.iter().all(|row| row.len() == width));
            assert_eq!(occupied_cells(shape).count(), 4, "{:?}", def.kind);
        }
    }
}

#[test]
fn test_kind_colors() {
    assert_eq!(definition(PieceKind::I).color, Color::Cyan);
    assert_eq!(definition(PieceKind::O).color, Color::Yellow);
    assert_eq!(definition(PieceKind::T).color, Color::Purple);
    assert_eq!(definition(PieceKind::L).color, Color::Orange);
    assert_eq!(definition(PieceKind::J).color, Color::Blue);
    assert_eq!(definition(PieceKind::Z).color, Color::Red);
    assert_eq!(definition(PieceKind::S).color, Color::Green);
}

#[test]
fn test_t_piece_first_states() {
    let mut piece = Piece::new(PieceKind::T, 3, 0);
    assert_eq!(piece.cells().as_slice(), &[(0, 3), (0, 4), (0, 5), (1, 4)]);

    piece.rotate();
    assert_eq!(piece.cells().as_slice(), &[(0, 4), (1, 3), (1, 4), (2, 4)]);
}

#[test]
fn test_o_rotation_does_not_move_cells() {
    let mut piece = Piece::new(PieceKind::O, 3, 5);
    let before = piece.cells();
    piece.rotate();
    assert_eq!(piece.cells(), before);
    assert_eq!(piece.rotation_index(), 1);
}
