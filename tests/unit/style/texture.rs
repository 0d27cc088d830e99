//! Tests for texture entry parsing and application

#[cfg(test)]
mod tests {
    use antline_style::StyleError;
    use antline_style::io::property::Property;
    use antline_style::spatial::Entity;
    use antline_style::style::TextureEntry;

    fn parse(value: &str) -> Result<TextureEntry, StyleError> {
        TextureEntry::parse(&Property::leaf("straight", value))
    }

    // Tests the three compact forms
    // Verified by swapping the scale and texture fields
    #[test]
    fn test_parse_compact_forms() {
        assert_eq!(
            parse("material").unwrap(),
            TextureEntry::new("material", 0.25, false)
        );
        assert_eq!(
            parse("0.5|material").unwrap(),
            TextureEntry::new("material", 0.5, false)
        );
        assert_eq!(
            parse("0.5|material|static").unwrap(),
            TextureEntry::new("material", 0.5, true)
        );
    }

    // Tests whitespace around compact fields is ignored
    // Verified by keeping padded material names verbatim
    #[test]
    fn test_parse_compact_trims_fields() {
        assert_eq!(
            parse(" 0.5 | material | static ").unwrap(),
            TextureEntry::new("material", 0.5, true)
        );
        assert!(matches!(
            parse("0.5|  |static"),
            Err(StyleError::MalformedTexture { position: 1, .. })
        ));
    }

    // Tests unknown flags are ignored and static is found among several
    // Verified by only checking the first flag
    #[test]
    fn test_parse_compact_flags() {
        assert_eq!(
            parse("1|material|glow|static").unwrap(),
            TextureEntry::new("material", 1.0, true)
        );
        assert_eq!(
            parse("1|material|glow").unwrap(),
            TextureEntry::new("material", 1.0, false)
        );
    }

    // Tests an unparseable scale falls back to the default
    // Verified by rejecting bad scales
    #[test]
    fn test_parse_compact_bad_scale_defaults() {
        assert_eq!(
            parse("wide|material").unwrap(),
            TextureEntry::new("material", 0.25, false)
        );
    }

    // Tests missing texture names are errors naming the field
    // Verified by accepting empty texture names
    #[test]
    fn test_parse_compact_missing_texture() {
        match parse("0.5|").unwrap_err() {
            StyleError::MalformedTexture {
                value, position, ..
            } => {
                assert_eq!(value, "0.5|");
                assert_eq!(position, 1);
            }
            other => unreachable!("Expected MalformedTexture, got {other}"),
        }
        assert!(matches!(
            parse("").unwrap_err(),
            StyleError::MalformedTexture { position: 0, .. }
        ));
    }

    // Tests the block form matches the compact form
    // Verified by reading scale from the wrong key
    #[test]
    fn test_parse_block_matches_compact() {
        let block = Property::block(
            "straight",
            vec![
                Property::leaf("tex", "material"),
                Property::leaf("scale", "0.5"),
                Property::leaf("static", "1"),
            ],
        );
        assert_eq!(
            TextureEntry::parse(&block).unwrap(),
            parse("0.5|material|static").unwrap()
        );

        let minimal = Property::block("straight", vec![Property::leaf("tex", "material")]);
        assert_eq!(
            TextureEntry::parse(&minimal).unwrap(),
            parse("material").unwrap()
        );
    }

    // Tests a block without tex is rejected
    // Verified by defaulting tex to an empty string
    #[test]
    fn test_parse_block_missing_tex() {
        let block = Property::block("corner", vec![Property::leaf("scale", "2")]);
        match TextureEntry::parse(&block).unwrap_err() {
            StyleError::MissingKey { block, key } => {
                assert_eq!(block, "corner");
                assert_eq!(key, "tex");
            }
            other => unreachable!("Expected MissingKey, got {other}"),
        }
    }

    // Tests applying sets material and scale but keeps the toggle name
    // Verified by removing targetname unconditionally
    #[test]
    fn test_apply_non_static() {
        let mut overlay = Entity::from_pairs([("material", "old"), ("targetname", "ant")]);
        TextureEntry::new("new/material", 0.5, false).apply(&mut overlay);

        assert_eq!(overlay.get("material"), Some("new/material"));
        assert_eq!(overlay.get("endu"), Some("0.5"));
        assert_eq!(overlay.get("targetname"), Some("ant"));
    }

    // Tests applying a static entry clears the toggle name
    // Verified by skipping the static check
    #[test]
    fn test_apply_static_clears_targetname() {
        let mut overlay = Entity::from_pairs([("material", "old"), ("TargetName", "ant")]);
        TextureEntry::new("new/material", 0.25, true).apply(&mut overlay);

        assert!(!overlay.contains("targetname"));
        assert_eq!(overlay.get("material"), Some("new/material"));
    }
}
