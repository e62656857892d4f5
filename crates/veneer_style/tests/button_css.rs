use veneer_style::{compose_button_style, ButtonKind, ButtonSize};

#[test]
fn every_combination_has_exactly_the_expected_keys() {
    let expected = [
        "fontFamily",
        "fontWeight",
        "border",
        "borderRadius",
        "cursor",
        "display",
        "lineHeight",
        "transition",
        "backgroundColor",
        "color",
        ":hover",
        "padding",
        "fontSize",
    ];

    for kind in [ButtonKind::Primary, ButtonKind::Secondary] {
        for size in ButtonSize::ALL {
            let style = compose_button_style(kind, size);
            let keys: Vec<_> = style.properties().keys().collect();
            assert_eq!(keys, expected, "kind {kind}, size {size}");
        }
    }
}

#[test]
fn primary_medium_button_css() {
    let css = compose_button_style(ButtonKind::Primary, ButtonSize::Medium).to_css();
    assert!(css.contains("backgroundColor: #0f766e;"));
    assert!(css.contains("color: white;"));
    assert!(css.contains("padding: 0.75rem 1.5rem;"));
    assert!(css.contains("fontSize: 1rem;"));
    assert!(css.contains(":hover: backgroundColor: #0d9488;;"));
}

#[test]
fn secondary_buttons_invert_onto_the_text_token() {
    let css = compose_button_style(ButtonKind::Secondary, ButtonSize::Large).to_css();
    assert!(css.contains("backgroundColor: #e5e7eb;"));
    assert!(css.contains("color: #1f2937;"));
    assert!(css.contains("padding: 1rem 2rem;"));
    assert!(css.contains("fontSize: 1.125rem;"));
}

#[test]
fn composition_is_idempotent() {
    for kind in [ButtonKind::Primary, ButtonKind::Secondary] {
        for size in ButtonSize::ALL {
            assert_eq!(
                compose_button_style(kind, size),
                compose_button_style(kind, size)
            );
        }
    }
}

#[test]
fn defaults_are_secondary_and_medium() {
    assert_eq!(ButtonKind::default(), ButtonKind::Secondary);
    assert_eq!(ButtonSize::default(), ButtonSize::Medium);
}
