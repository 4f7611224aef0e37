use super::*;

#[test]
fn disclosure_starts_closed() {
    assert!(!Disclosure::default().open);
}

#[test]
fn single_toggle_opens() {
    let mut d = Disclosure::default();
    d.toggle();
    assert!(d.open);
}

#[test]
fn even_toggle_count_returns_to_closed() {
    for pairs in 1..=6 {
        let mut d = Disclosure::default();
        for _ in 0..pairs * 2 {
            d.toggle();
        }
        assert!(!d.open, "expected closed after {} toggles", pairs * 2);
    }
}

#[test]
fn odd_toggle_count_leaves_open() {
    let mut d = Disclosure::default();
    for _ in 0..5 {
        d.toggle();
    }
    assert!(d.open);
}

#[test]
fn cards_toggle_independently() {
    let mut first = Disclosure::default();
    let second = Disclosure::default();
    first.toggle();
    assert!(first.open);
    assert!(!second.open);
}

#[test]
fn toggle_label_tracks_state() {
    let mut d = Disclosure::default();
    assert_eq!(d.toggle_label(), "Explore Blueprint");
    d.toggle();
    assert_eq!(d.toggle_label(), "Close Blueprint");
}
