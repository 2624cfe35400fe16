//! Positional value type with a y-dominant total order.

use std::cmp::Ordering;
use std::fmt;

/// A 3-component coordinate backed by a fixed-size buffer.
///
/// The ordering compares `y` first, then `x`, then `z`. This is intentionally
/// *not* lexicographic on (x, y, z): anything built on top of spatial sorting
/// (e.g. painter's-order draw lists) relies on `y` dominating.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    values: [f32; 3],
}

impl Vec3 {
    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { values: [x, y, z] }
    }

    /// Returns the x component.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.values[0]
    }

    /// Returns the y component.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.values[1]
    }

    /// Returns the z component.
    #[must_use]
    pub const fn z(&self) -> f32 {
        self.values[2]
    }

    /// Sets the x component.
    pub const fn set_x(&mut self, x: f32) {
        self.values[0] = x;
    }

    /// Sets the y component.
    pub const fn set_y(&mut self, y: f32) {
        self.values[1] = y;
    }

    /// Sets the z component.
    pub const fn set_z(&mut self, z: f32) {
        self.values[2] = z;
    }

    /// Three-way comparison: `y` first, then `x`, then `z`.
    ///
    /// Components are compared with strict `<` / `>`; if no component is
    /// strictly ordered the vectors compare equal. NaN components therefore
    /// collapse to `Equal` at their tier rather than poisoning the order.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.y() > other.y() {
            return Ordering::Greater;
        }
        if self.y() < other.y() {
            return Ordering::Less;
        }
        if self.x() > other.x() {
            return Ordering::Greater;
        }
        if self.x() < other.x() {
            return Ordering::Less;
        }
        if self.z() > other.z() {
            return Ordering::Greater;
        }
        if self.z() < other.z() {
            return Ordering::Less;
        }
        Ordering::Equal
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
