use super::*;

#[test]
fn css_vars_declares_every_color() {
    let css = SHOWCASE.css_vars();
    for (var, value) in [
        ("--bg", SHOWCASE.bg),
        ("--text", SHOWCASE.text),
        ("--primary", SHOWCASE.primary),
        ("--accent", SHOWCASE.accent),
        ("--secondary", SHOWCASE.secondary),
        ("--paper", SHOWCASE.paper),
        ("--border", SHOWCASE.border),
    ] {
        assert!(css.contains(&format!("{var}:{value};")), "missing {var} in {css}");
    }
}

#[test]
fn solo_lab_palette_uses_ink_and_growth_colors() {
    assert_eq!(SOLO_LAB.bg, "#FDF6E3");
    assert_eq!(SOLO_LAB.text, "#433422");
    assert_eq!(SOLO_LAB.accent, "#D35400");
    assert_eq!(SOLO_LAB.secondary, "#27AE60");
}

#[test]
fn palettes_are_distinct() {
    assert_ne!(SHOWCASE, SOLO_LAB);
    assert_ne!(SHOWCASE.name, SOLO_LAB.name);
}
