//! Shapes module - the fixed catalog of tetromino rotation states
//!
//! Every kind owns an ordered list of rotation states. A rotation state is a
//! rectangular row-major matrix where `1` marks an occupied cell. The data is
//! a process-wide `static`; pieces hold a `&'static` reference into it and
//! never copy or mutate a matrix.
//!
//! Rotation is a plain cyclic advance through the list, so the number of
//! states per kind is part of the game feel: I, Z and S have two, O lists
//! the same square twice, and T, L, J have four.

use crate::rng::KindGenerator;
use crate::types::{Color, PieceKind};

/// One orientation of a piece: rows of 0/1 cells, all rows the same length.
pub type ShapeMatrix = &'static [&'static [u8]];

/// Immutable description of a piece kind.
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub kind: PieceKind,
    pub color: Color,
    pub rotations: &'static [ShapeMatrix],
}

impl ShapeDefinition {
    /// Number of rotation states for this kind.
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Rotation state at `index`, wrapping around the list.
    pub fn rotation(&self, index: usize) -> ShapeMatrix {
        self.rotations[index % self.rotations.len()]
    }
}

static CATALOG: [ShapeDefinition; 7] = [
    ShapeDefinition {
        kind: PieceKind::I,
        color: Color::Cyan,
        rotations: &[&[&[1, 1, 1, 1]], &[&[1], &[1], &[1], &[1]]],
    },
    ShapeDefinition {
        kind: PieceKind::O,
        color: Color::Yellow,
        rotations: &[&[&[1, 1], &[1, 1]], &[&[1, 1], &[1, 1]]],
    },
    ShapeDefinition {
        kind: PieceKind::T,
        color: Color::Purple,
        rotations: &[
            &[&[1, 1, 1], &[0, 1, 0]],
            &[&[0, 1], &[1, 1], &[0, 1]],
            &[&[0, 1, 0], &[1, 1, 1]],
            &[&[1, 0], &[1, 1], &[1, 0]],
        ],
    },
    ShapeDefinition {
        kind: PieceKind::L,
        color: Color::Orange,
        rotations: &[
            &[&[1, 1, 1], &[1, 0, 0]],
            &[&[1, 1], &[0, 1], &[0, 1]],
            &[&[0, 0, 1], &[1, 1, 1]],
            &[&[1, 0], &[1, 0], &[1, 1]],
        ],
    },
    ShapeDefinition {
        kind: PieceKind::J,
        color: Color::Blue,
        rotations: &[
            &[&[1, 1, 1], &[0, 0, 1]],
            &[&[0, 1], &[0, 1], &[1, 1]],
            &[&[1, 0, 0], &[1, 1, 1]],
            &[&[1, 1], &[1, 0], &[1, 0]],
        ],
    },
    ShapeDefinition {
        kind: PieceKind::Z,
        color: Color::Red,
        rotations: &[&[&[1, 1, 0], &[0, 1, 1]], &[&[0, 1], &[1, 1], &[1, 0]]],
    },
    ShapeDefinition {
        kind: PieceKind::S,
        color: Color::Green,
        rotations: &[&[&[0, 1, 1], &[1, 1, 0]], &[&[1, 0], &[1, 1], &[0, 1]]],
    },
];

/// Look up the shape definition for a kind.
pub fn definition(kind: PieceKind) -> &'static ShapeDefinition {
    &CATALOG[kind.index()]
}

/// All seven definitions, in catalog order.
pub fn catalog() -> &'static [ShapeDefinition; 7] {
    &CATALOG
}

/// Draw a kind uniformly at random.
pub fn random_kind(gen: &mut impl KindGenerator) -> PieceKind {
    gen.next_kind()
}

/// Iterate the occupied `(row, col)` offsets of a rotation state.
pub fn occupied_cells(shape: ShapeMatrix) -> impl Iterator<Item = (i32, i32)> {
    shape.iter().enumerate().flat_map(|(r, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(move |(c, _)| (r as i32, c as i32))
    })
}
