//! The 24 axis-aligned rigid rotations of 3-space.

use super::Point3;

/// A proper rotation stored as a row-major 3x3 integer matrix.
///
/// Exactly 24 such rotations map the axis-aligned unit cube onto itself.
/// [`Rotation::CATALOG`] enumerates all of them: 6 facing directions with
/// 4 in-plane rotations each, identity first. The set is closed under
/// [`Rotation::then`] and every member preserves inter-point distances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    rows: [[i32; 3]; 3],
}

impl Rotation {
    /// The identity rotation
    pub const IDENTITY: Rotation = Rotation::from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

    /// All 24 axis-aligned rotations, grouped by facing direction.
    ///
    /// Each entry is annotated with the image of (x, y, z).
    pub const CATALOG: [Rotation; 24] = [
        // Face forward
        Rotation::from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1]]), // (x, y, z)
        Rotation::from_rows([[0, -1, 0], [1, 0, 0], [0, 0, 1]]), // (-y, x, z)
        Rotation::from_rows([[-1, 0, 0], [0, -1, 0], [0, 0, 1]]), // (-x, -y, z)
        Rotation::from_rows([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]), // (y, -x, z)
        // Face left
        Rotation::from_rows([[0, 0, 1], [-1, 0, 0], [0, -1, 0]]), // (z, -x, -y)
        Rotation::from_rows([[0, 0, 1], [0, -1, 0], [1, 0, 0]]), // (z, -y, x)
        Rotation::from_rows([[0, 0, 1], [1, 0, 0], [0, 1, 0]]), // (z, x, y)
        Rotation::from_rows([[0, 0, 1], [0, 1, 0], [-1, 0, 0]]), // (z, y, -x)
        // Face back
        Rotation::from_rows([[-1, 0, 0], [0, 1, 0], [0, 0, -1]]), // (-x, y, -z)
        Rotation::from_rows([[0, -1, 0], [-1, 0, 0], [0, 0, -1]]), // (-y, -x, -z)
        Rotation::from_rows([[1, 0, 0], [0, -1, 0], [0, 0, -1]]), // (x, -y, -z)
        Rotation::from_rows([[0, 1, 0], [1, 0, 0], [0, 0, -1]]), // (y, x, -z)
        // Face right
        Rotation::from_rows([[0, 0, -1], [0, 1, 0], [1, 0, 0]]), // (-z, y, x)
        Rotation::from_rows([[0, 0, -1], [-1, 0, 0], [0, 1, 0]]), // (-z, -x, y)
        Rotation::from_rows([[0, 0, -1], [0, -1, 0], [-1, 0, 0]]), // (-z, -y, -x)
        Rotation::from_rows([[0, 0, -1], [1, 0, 0], [0, -1, 0]]), // (-z, x, -y)
        // Face up
        Rotation::from_rows([[1, 0, 0], [0, 0, 1], [0, -1, 0]]), // (x, z, -y)
        Rotation::from_rows([[0, -1, 0], [0, 0, 1], [-1, 0, 0]]), // (-y, z, -x)
        Rotation::from_rows([[-1, 0, 0], [0, 0, 1], [0, 1, 0]]), // (-x, z, y)
        Rotation::from_rows([[0, 1, 0], [0, 0, 1], [1, 0, 0]]), // (y, z, x)
        // Face down
        Rotation::from_rows([[1, 0, 0], [0, 0, -1], [0, 1, 0]]), // (x, -z, y)
        Rotation::from_rows([[0, 1, 0], [0, 0, -1], [-1, 0, 0]]), // (y, -z, -x)
        Rotation::from_rows([[-1, 0, 0], [0, 0, -1], [0, -1, 0]]), // (-x, -z, -y)
        Rotation::from_rows([[0, -1, 0], [0, 0, -1], [1, 0, 0]]), // (-y, -z, x)
    ];

    const fn from_rows(rows: [[i32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Rotate a point about the origin
    #[inline]
    pub fn apply(&self, p: Point3) -> Point3 {
        let [rx, ry, rz] = self.rows;
        Point3::new(
            rx[0] * p.x + rx[1] * p.y + rx[2] * p.z,
            ry[0] * p.x + ry[1] * p.y + ry[2] * p.z,
            rz[0] * p.x + rz[1] * p.y + rz[2] * p.z,
        )
    }

    /// Compose: the rotation that applies `self` first, then `other`.
    ///
    /// The catalog is closed under composition, so the result always
    /// equals some catalog member.
    pub fn then(&self, other: &Rotation) -> Rotation {
        let mut rows = [[0i32; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| other.rows[i][k] * self.rows[k][j]).sum();
            }
        }
        Rotation { rows }
    }

    /// The inverse rotation (transpose, since rotations are orthonormal)
    pub fn inverse(&self) -> Rotation {
        let mut rows = [[0i32; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[j][i];
            }
        }
        Rotation { rows }
    }

    /// Position of this rotation in [`Rotation::CATALOG`]
    pub fn catalog_index(&self) -> Option<usize> {
        Rotation::CATALOG.iter().position(|r| r == self)
    }
}
