//! Integer lattice algebra: 3-dimensional translation vectors and an
//! integer-exact linear independence oracle.
//!
//! The coordinate width is fixed at `i64`: BFS accumulates translations
//! along paths of length up to the vertex count, and a 64-bit signed
//! integer is ample headroom for any realistic input.

use std::ops::{Add, Neg, Sub};

/// The fixed dimension of the lattice this crate reasons about.
pub const DIM: usize = 3;

/// A displacement, measured in whole periodic-cell copies, between the
/// tail and head endpoints of an edge.
///
/// The zero vector denotes an edge whose endpoints lie in the same cell
/// copy. Negation, addition, subtraction and equality are total: there is
/// no invalid `TranslationVector`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslationVector([i64; DIM]);

impl TranslationVector {
    /// The zero translation: both endpoints of the edge lie in the same
    /// cell copy.
    pub const ZERO: Self = Self([0; DIM]);

    /// Builds a translation vector from its three signed components.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self([x, y, z])
    }

    /// Returns the three components in order.
    #[must_use]
    pub const fn components(&self) -> [i64; DIM] {
        self.0
    }

    /// Returns `true` if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn dot(&self, other: &Self) -> i128 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| i128::from(a) * i128::from(b))
            .sum()
    }
}

impl From<[i64; 3]> for TranslationVector {
    fn from(components: [i64; 3]) -> Self {
        Self(components)
    }
}

impl Add for TranslationVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = [0; DIM];
        for i in 0..DIM {
            out[i] = self.0[i] + rhs.0[i];
        }
        Self(out)
    }
}

impl Sub for TranslationVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for TranslationVector {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = [0; DIM];
        for i in 0..DIM {
            out[i] = -self.0[i];
        }
        Self(out)
    }
}

/// Decides whether `base ∪ {v}` remains linearly independent over ℚ.
///
/// `base` must hold fewer than [`DIM`] vectors; this is the only shape the
/// rank-2/3 BFS in [`crate::algo::percolation`] ever asks for, since a
/// basis of full rank already saturates the lattice and the caller stops
/// growing it. Independence is decided by the sign of the Gram determinant
/// `det(M · Mᵀ)`, where `M`'s rows are `base` followed by `v`: this keeps
/// every intermediate value an exact integer (promoted to `i128` for the
/// dot products) and avoids any rational or floating-point arithmetic.
///
/// Returns `false` if `base.len() >= DIM` (the lattice is already full
/// rank and cannot grow further) or if `v` is the zero vector (the zero
/// vector is linearly dependent on any set, including the empty one).
///
/// # Panics
///
/// Never: `base.len()` is checked before any determinant is taken, so the
/// Gram matrix handed to [`gram_determinant`] always has size `1..=DIM`.
#[must_use]
pub fn independent(base: &[TranslationVector], v: TranslationVector) -> bool {
    if base.len() >= DIM || v.is_zero() {
        return false;
    }
    let rows: Vec<TranslationVector> = base.iter().copied().chain(std::iter::once(v)).collect();
    gram_determinant(&rows) != 0
}

/// Computes `det(M · Mᵀ)` for the matrix `M` whose rows are `rows`.
///
/// `rows.len()` must be 1, 2 or 3: these are the only sizes a `(|base| +
/// 1) × DIM` Gram matrix can take once `base.len() < DIM`. Any other size
/// is a contract violation in the caller, surfaced as a panic rather than
/// a recoverable error, per this crate's error-handling design.
///
/// # Panics
///
/// Panics if `rows` is empty or holds more than [`DIM`] vectors.
fn gram_determinant(rows: &[TranslationVector]) -> i128 {
    match rows.len() {
        1 => rows[0].dot(&rows[0]),
        2 => {
            let g00 = rows[0].dot(&rows[0]);
            let g01 = rows[0].dot(&rows[1]);
            let g11 = rows[1].dot(&rows[1]);
            g00 * g11 - g01 * g01
        }
        3 => {
            let g = [
                [rows[0].dot(&rows[0]), rows[0].dot(&rows[1]), rows[0].dot(&rows[2])],
                [rows[1].dot(&rows[0]), rows[1].dot(&rows[1]), rows[1].dot(&rows[2])],
                [rows[2].dot(&rows[0]), rows[2].dot(&rows[1]), rows[2].dot(&rows[2])],
            ];
            g[0][0] * (g[1][1] * g[2][2] - g[1][2] * g[2][1])
                - g[0][1] * (g[1][0] * g[2][2] - g[1][2] * g[2][0])
                + g[0][2] * (g[1][0] * g[2][1] - g[1][1] * g[2][0])
        }
        n => panic!(
            "gram_determinant is only defined for 1..={DIM} rows, got {n}; this is a contract \
             violation in the caller, not a recoverable condition"
        ),
    }
}
