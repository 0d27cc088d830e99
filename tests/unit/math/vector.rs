//! Tests for vector parsing, formatting and axis selection

#[cfg(test)]
mod tests {
    use antline_style::math::vector::{Axis, Vec3};

    // Tests parsing accepts exactly three numbers
    // Verified by ignoring trailing components
    #[test]
    fn test_parse() {
        assert_eq!(Vec3::parse("1 -2.5 3"), Some(Vec3::new(1.0, -2.5, 3.0)));
        assert_eq!(Vec3::parse("  4\t5 6 "), Some(Vec3::new(4.0, 5.0, 6.0)));
        assert_eq!(Vec3::parse("1 2"), None);
        assert_eq!(Vec3::parse("1 2 3 4"), None);
        assert_eq!(Vec3::parse("1 two 3"), None);
        assert_eq!(Vec3::parse("1 2 NaN"), None);
    }

    // Tests integral components drop their decimal point and -0 is normalised
    // Verified by always formatting with a decimal point
    #[test]
    fn test_join() {
        assert_eq!(Vec3::new(16.0, 0.0, -8.0).join(), "16 0 -8");
        assert_eq!(Vec3::new(0.5, -0.0, 1.25).join(), "0.5 0 1.25");
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).to_string(), "1 2 3");
    }

    // Tests dominant axis uses magnitudes and breaks ties in axis order
    // Verified by comparing signed components
    #[test]
    fn test_dominant_axis() {
        assert_eq!(Vec3::new(0.0, 1.0, 0.0).dominant_axis(), Axis::Y);
        assert_eq!(Vec3::new(-3.0, 1.0, 2.0).dominant_axis(), Axis::X);
        assert_eq!(Vec3::new(0.0, 0.0, -1.0).dominant_axis(), Axis::Z);
        assert_eq!(Vec3::new(1.0, 1.0, 1.0).dominant_axis(), Axis::X);
    }

    // Tests indexing by axis reads and writes the matching component
    // Verified by swapping the y and z arms
    #[test]
    fn test_axis_indexing() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        for (axis, expected) in Axis::ALL.into_iter().zip([1.0, 2.0, 3.0]) {
            assert!((v[axis] - expected).abs() < f64::EPSILON);
        }
        v[Axis::Z] -= 5.0;
        assert_eq!(v, Vec3::new(1.0, 2.0, -2.0));
        assert_eq!(Axis::Z.to_string(), "z");
    }

    // Tests arithmetic and component-wise extrema
    // Verified by using max in min_by_component
    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 5.0, -2.0);
        let b = Vec3::new(3.0, 2.0, 0.0);

        assert_eq!(a + b, Vec3::new(4.0, 7.0, -2.0));
        assert_eq!(a - b, Vec3::new(-2.0, 3.0, -2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 10.0, -4.0));
        assert_eq!(a.min_by_component(&b), Vec3::new(1.0, 2.0, -2.0));
        assert_eq!(a.max_by_component(&b), Vec3::new(3.0, 5.0, 0.0));
        assert!((a.max_component() - 5.0).abs() < f64::EPSILON);
    }
}
