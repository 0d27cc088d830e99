//! Tests for entity field storage and typed access

#[cfg(test)]
mod tests {
    use antline_style::StyleError;
    use antline_style::math::rotation::Angles;
    use antline_style::math::vector::Vec3;
    use antline_style::spatial::Entity;

    // Tests lookups ignore case and updates keep the stored spelling
    // Verified by inserting a second key on case mismatch
    #[test]
    fn test_case_insensitive_fields() {
        let mut entity = Entity::from_pairs([("basisNormal", "0 0 1")]);

        assert_eq!(entity.get("basisnormal"), Some("0 0 1"));
        entity.set("BASISNORMAL", "1 0 0");
        let keys: Vec<&str> = entity.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["basisNormal"]);
        assert_eq!(entity.get("basisNormal"), Some("1 0 0"));

        assert_eq!(entity.remove("BasisNormal"), Some("1 0 0".to_string()));
        assert!(!entity.contains("basisnormal"));
        assert_eq!(entity.remove("basisnormal"), None);
    }

    // Tests the class name accessor
    // Verified by returning the first field instead
    #[test]
    fn test_classname() {
        assert_eq!(Entity::new("info_overlay").classname(), "info_overlay");
        assert_eq!(Entity::default().classname(), "");
    }

    // Tests vector fields parse and report errors with the key
    // Verified by returning a zero vector on parse failure
    #[test]
    fn test_vec_fields() {
        let mut entity = Entity::from_pairs([("origin", "1 2 3"), ("broken", "1 2")]);
        entity.id = 9;

        assert_eq!(entity.vec("origin").unwrap(), Vec3::new(1.0, 2.0, 3.0));
        match entity.vec("broken").unwrap_err() {
            StyleError::InvalidField {
                entity, key, value, ..
            } => {
                assert_eq!(entity, 9);
                assert_eq!(key, "broken");
                assert_eq!(value, "1 2");
            }
            other => unreachable!("Expected InvalidField, got {other}"),
        }
        assert!(matches!(
            entity.vec("missing"),
            Err(StyleError::InvalidField { .. })
        ));

        entity.set_vec("origin", Vec3::new(-4.0, 0.5, 0.0));
        assert_eq!(entity.get("origin"), Some("-4 0.5 0"));
    }

    // Tests absent angles mean no rotation while malformed angles fail
    // Verified by failing on absent angles
    #[test]
    fn test_angles_field() {
        let entity = Entity::from_pairs([("angles", "0 90 0"), ("bad", "x")]);
        assert_eq!(entity.angles("angles").unwrap(), Angles::new(0.0, 90.0, 0.0));
        assert_eq!(entity.angles("missing").unwrap(), Angles::default());
        assert!(entity.angles("bad").is_err());
    }
}
