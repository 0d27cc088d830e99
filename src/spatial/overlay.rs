//! Overlay decal fields and geometry
//!
//! An overlay is a textured quad projected onto brush faces. Its four corners
//! are stored in local space (`uv0`..`uv3`) and placed in the world through the
//! `basisorigin`, `basisu` and `basisv` fields.

use crate::io::error::Result;
use crate::math::vector::Vec3;
use crate::spatial::entity::Entity;

/// Keys of the four local-space quad corners
pub const CORNER_KEYS: [&str; 4] = ["uv0", "uv1", "uv2", "uv3"];

/// Surface normal of the face the overlay is projected on
pub const BASIS_NORMAL: &str = "basisnormal";
/// World position the local-space corners are offset from
pub const BASIS_ORIGIN: &str = "basisorigin";
/// World direction of the local u axis
pub const BASIS_U: &str = "basisu";
/// World direction of the local v axis
pub const BASIS_V: &str = "basisv";
/// Current texture of the overlay
pub const MATERIAL: &str = "material";
/// Texture scale along the strip
pub const TEXTURE_SCALE: &str = "endu";
/// Number of texture repeats along the strip
pub const START_V: &str = "startv";
/// Name used to toggle the overlay at runtime
pub const TARGETNAME: &str = "targetname";

/// Check whether the overlay lies on a floor or ceiling
///
/// # Errors
///
/// Returns an error if the basis normal is missing or malformed
pub fn is_horizontal(overlay: &Entity) -> Result<bool> {
    Ok(overlay.vec(BASIS_NORMAL)?.z != 0.0)
}

/// World-space corners of the overlay quad
///
/// # Errors
///
/// Returns an error if any basis or corner field is missing or malformed
pub fn world_corners(overlay: &Entity) -> Result<[Vec3; 4]> {
    let origin = overlay.vec(BASIS_ORIGIN)?;
    let u_axis = overlay.vec(BASIS_U)?;
    let v_axis = overlay.vec(BASIS_V)?;

    let mut corners = [Vec3::default(); 4];
    for (corner, key) in corners.iter_mut().zip(CORNER_KEYS) {
        let local = overlay.vec(key)?;
        *corner = origin + u_axis * local.x + v_axis * local.y;
    }
    Ok(corners)
}

/// Axis-aligned bounds `(min, max)` of the overlay in world space
///
/// # Errors
///
/// Returns an error if the overlay geometry fields are missing or malformed
pub fn overlay_bounds(overlay: &Entity) -> Result<(Vec3, Vec3)> {
    let corners = world_corners(overlay)?;
    let [first, rest @ ..] = corners;
    Ok(rest.iter().fold((first, first), |(min, max), corner| {
        (min.min_by_component(corner), max.max_by_component(corner))
    }))
}

/// Resize the quad along its local v axis to `half_length` either side
///
/// Each corner keeps the sign of its current v coordinate so the quad is
/// never mirrored.
///
/// # Errors
///
/// Returns an error if a corner field is missing or malformed
pub fn set_half_length(overlay: &mut Entity, half_length: f64) -> Result<()> {
    for key in CORNER_KEYS {
        let mut corner = overlay.vec(key)?;
        corner.y = if corner.y < 0.0 {
            -half_length
        } else {
            half_length
        };
        overlay.set_vec(key, corner);
    }
    Ok(())
}
