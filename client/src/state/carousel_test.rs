use super::*;

#[test]
fn carousel_starts_at_zero() {
    let c = Carousel::new(4);
    assert_eq!(c.active(), 0);
    assert!(c.is_active(0));
    assert_eq!(c.len(), 4);
}

#[test]
fn select_sets_active_for_every_valid_index() {
    for i in 0..4 {
        let mut c = Carousel::new(4);
        assert!(c.select(i));
        assert_eq!(c.active(), i);
    }
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut c = Carousel::new(4);
    c.select(2);
    assert!(!c.select(4));
    assert!(!c.select(usize::MAX));
    assert_eq!(c.active(), 2);
}

#[test]
fn select_is_absolute_not_relative() {
    let mut c = Carousel::new(4);
    c.select(3);
    c.select(1);
    assert_eq!(c.active(), 1);
}

#[test]
fn empty_carousel_rejects_all_selections() {
    let mut c = Carousel::new(0);
    assert!(c.is_empty());
    assert!(!c.select(0));
    assert_eq!(c.active(), 0);
}
