//! Euler-angle rotation in the map editor's pitch/yaw/roll convention

use crate::math::vector::Vec3;

/// Orientation stored on entities as `"pitch yaw roll"` in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angles {
    /// Rotation around the y axis
    pub pitch: f64,
    /// Rotation around the z axis
    pub yaw: f64,
    /// Rotation around the x axis
    pub roll: f64,
}

impl Angles {
    /// Create angles from degrees
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Parse the `"pitch yaw roll"` form used by entity fields
    pub fn parse(text: &str) -> Option<Self> {
        Vec3::parse(text).map(|v| Self::new(v.x, v.y, v.z))
    }

    /// Row-major rotation matrix for these angles
    ///
    /// Rows are the forward, left and up directions of the rotated frame.
    pub fn matrix(&self) -> [Vec3; 3] {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sr, cr) = self.roll.to_radians().sin_cos();

        [
            Vec3::new(cp * cy, cp * sy, -sp),
            Vec3::new(
                (sp * sr).mul_add(cy, -(cr * sy)),
                (sp * sr).mul_add(sy, cr * cy),
                sr * cp,
            ),
            Vec3::new(
                (sp * cr).mul_add(cy, sr * sy),
                (sp * cr).mul_add(sy, -(sr * cy)),
                cr * cp,
            ),
        ]
    }

    /// Rotate a vector from local space into the frame these angles describe
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let [forward, left, up] = self.matrix();
        forward * v.x + left * v.y + up * v.z
    }
}
