/// Simple 2D vector with x and y coordinates as double precision floats.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
}

impl Vec2 {
    /// Create a new Vec2 from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a new Vec2 from an array of 2 f64 values.
    pub fn from_array(array: &[f64; 2]) -> Self {
        Self {
            x: array[0],
            y: array[1],
        }
    }
}

/// Simple 3D vector with x, y, and z coordinates as double precision floats.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
    /// z coordinate
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3 from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a new Vec3 from an array of 3 f64 values.
    pub fn from_array(array: &[f64; 3]) -> Self {
        Self {
            x: array[0],
            y: array[1],
            z: array[2],
        }
    }
}

/// A 2D or 3D vector accepted by the transform helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vector {
    /// A 2D vector, used with 3x3 homogeneous matrices.
    Vec2(Vec2),
    /// A 3D vector, used with 4x4 homogeneous matrices.
    Vec3(Vec3),
}

impl Vector {
    /// The number of components of the vector.
    pub fn dim(&self) -> usize {
        match self {
            Vector::Vec2(_) => 2,
            Vector::Vec3(_) => 3,
        }
    }

    /// The components of the vector in order (x, y\[, z\]).
    pub fn components(&self) -> Vec<f64> {
        match *self {
            Vector::Vec2(v) => vec![v.x, v.y],
            Vector::Vec3(v) => vec![v.x, v.y, v.z],
        }
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Vector::Vec2(v)
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Vector::Vec3(v)
    }
}
