use veneer_theme::{ColorToken, ColorTokens, COLORS};

#[test]
fn palette_exposes_every_role() {
    for token in [ColorToken::Primary, ColorToken::Surface, ColorToken::Text] {
        assert!(!COLORS.get(token).as_str().is_empty());
    }
}

#[test]
fn palette_has_expected_values() {
    assert_eq!(COLORS.primary.as_str(), "#0f766e");
    assert_eq!(COLORS.surface.as_str(), "#020617");
    assert_eq!(COLORS.text.as_str(), "#e5e7eb");
}

#[test]
fn palette_colors_are_wellformed_hex() {
    for token in [ColorToken::Primary, ColorToken::Surface, ColorToken::Text] {
        let color = COLORS.get(token);
        assert!(
            color.is_wellformed(),
            "token {:?} should be #rrggbb, got {}",
            token,
            color
        );
    }
}

#[test]
fn surface_is_dark_and_text_is_light() {
    // Sanity bounds on the palette: cards render light text on a dark
    // surface, so a palette edit that flips either side should fail here.
    assert!(COLORS.surface.value() < 0x333333);
    assert!(COLORS.text.value() > 0xcccccc);
}

#[test]
fn default_token_set_is_the_shared_palette() {
    let defaults = ColorTokens::default();
    assert_eq!(defaults.primary, COLORS.primary);
    assert_eq!(defaults.surface, COLORS.surface);
    assert_eq!(defaults.text, COLORS.text);
}
