//! Tests for pitch/yaw/roll rotation

#[cfg(test)]
mod tests {
    use antline_style::math::rotation::Angles;
    use antline_style::math::vector::{Axis, Vec3};

    fn assert_close(actual: Vec3, expected: Vec3) {
        let diff = actual - expected;
        assert!(
            diff.x.abs() < 1e-9 && diff.y.abs() < 1e-9 && diff.z.abs() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    // Tests zero angles leave vectors unchanged
    // Verified by transposing the matrix
    #[test]
    fn test_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_close(Angles::default().rotate(v), v);
    }

    // Tests yaw turns the left direction towards -x
    // Verified by negating the yaw sine terms
    #[test]
    fn test_yaw() {
        let rotated = Angles::new(0.0, 90.0, 0.0).rotate(Vec3::new(0.0, 1.0, 0.0));
        assert_close(rotated, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(rotated.dominant_axis(), Axis::X);
    }

    // Tests pitch tips forward downwards
    // Verified by dropping the negation on the pitch sine
    #[test]
    fn test_pitch() {
        let rotated = Angles::new(90.0, 0.0, 0.0).rotate(Vec3::new(1.0, 0.0, 0.0));
        assert_close(rotated, Vec3::new(0.0, 0.0, -1.0));
    }

    // Tests roll turns the left direction upwards
    // Verified by swapping the roll sine and cosine
    #[test]
    fn test_roll() {
        let rotated = Angles::new(0.0, 0.0, 90.0).rotate(Vec3::new(0.0, 1.0, 0.0));
        assert_close(rotated, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(rotated.dominant_axis(), Axis::Z);
    }

    // Tests parsing the entity field form
    // Verified by reading roll into yaw
    #[test]
    fn test_parse() {
        assert_eq!(Angles::parse("0 90 180"), Some(Angles::new(0.0, 90.0, 180.0)));
        assert_eq!(Angles::parse("0 90"), None);
    }
}
