use super::*;

#[test]
fn shows_primary_until_error() {
    let src = ImageSource::new("/images/profile-small.jpg", "/images/placeholder.svg");
    assert_eq!(src.current(), "/images/profile-small.jpg");
    assert!(!src.is_fallback());
}

#[test]
fn first_error_switches_to_placeholder() {
    let mut src = ImageSource::new("/images/missing.jpg", "/images/placeholder.svg");
    assert!(src.on_error());
    assert_eq!(src.current(), "/images/placeholder.svg");
    assert!(src.is_fallback());
}

#[test]
fn placeholder_error_does_not_loop() {
    let mut src = ImageSource::new("/images/missing.jpg", "/images/placeholder.svg");
    src.on_error();
    assert!(!src.on_error());
    assert_eq!(src.current(), "/images/placeholder.svg");
}

#[test]
fn primary_equal_to_placeholder_never_swaps() {
    let mut src = ImageSource::new("/images/placeholder.svg", "/images/placeholder.svg");
    assert!(!src.on_error());
    assert!(!src.is_fallback());
}
