//! Three-component vectors as stored in map entity fields
//!
//! Map files keep positions, normals and quad corners as space-separated
//! strings (`"16 0 -8"`). [`Vec3`] parses and re-emits that form and carries the
//! handful of operations the styling pass needs.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// One of the three world axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis
    X,
    /// The y axis
    Y,
    /// The z axis
    Z,
}

impl Axis {
    /// All axes in component order
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// A point or direction in world space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Create a vector from components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Parse a whitespace separated `"x y z"` triple
    ///
    /// Returns `None` unless exactly three finite numbers are present.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace().map(str::parse::<f64>);
        let x = parts.next()?.ok()?;
        let y = parts.next()?.ok()?;
        let z = parts.next()?.ok()?;
        if parts.next().is_some() || !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return None;
        }
        Some(Self { x, y, z })
    }

    /// Format as a space separated triple, dropping `.0` from integral values
    pub fn join(&self) -> String {
        format!(
            "{} {} {}",
            format_component(self.x),
            format_component(self.y),
            format_component(self.z)
        )
    }

    /// Axis holding the component with the largest magnitude
    ///
    /// Ties resolve in x, y, z order.
    pub fn dominant_axis(&self) -> Axis {
        let mut best = Axis::X;
        for axis in [Axis::Y, Axis::Z] {
            if self[axis].abs() > self[best].abs() {
                best = axis;
            }
        }
        best
    }

    /// Largest component
    pub const fn max_component(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Component-wise minimum
    #[must_use]
    pub const fn min_by_component(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    #[must_use]
    pub const fn max_by_component(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

fn format_component(value: f64) -> String {
    // Avoid emitting "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

impl Index<Axis> for Vec3 {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Vec3 {
    fn index_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
