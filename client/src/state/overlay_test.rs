use super::*;

fn opened(steps: &[Overlay]) -> Overlay {
    let mut overlay = Overlay::default();
    for next in steps {
        overlay.open(*next);
    }
    overlay
}

#[test]
fn default_overlay_is_none() {
    let overlay = Overlay::default();
    assert_eq!(overlay, Overlay::None);
    assert!(!overlay.is_open());
}

#[test]
fn open_contact_from_none() {
    let overlay = opened(&[Overlay::Contact]);
    assert!(overlay.is_open());
    assert!(overlay.shows_contact());
    assert!(!overlay.shows_resume_access());
}

#[test]
fn opening_resume_access_replaces_contact() {
    let overlay = opened(&[Overlay::Contact, Overlay::ResumeAccess]);
    assert_eq!(overlay, Overlay::ResumeAccess);
    assert!(!overlay.shows_contact());
}

#[test]
fn opening_contact_replaces_resume_access() {
    let overlay = opened(&[Overlay::ResumeAccess, Overlay::Contact]);
    assert_eq!(overlay, Overlay::Contact);
    assert!(!overlay.shows_resume_access());
}

#[test]
fn never_more_than_one_overlay_visible() {
    let sequence = [
        Overlay::Contact,
        Overlay::ResumeAccess,
        Overlay::Contact,
        Overlay::None,
        Overlay::ResumeAccess,
    ];
    let mut overlay = Overlay::None;
    for next in sequence {
        overlay.open(next);
        assert!(!(overlay.shows_contact() && overlay.shows_resume_access()));
    }
}

#[test]
fn close_matching_overlay_returns_none() {
    let mut overlay = Overlay::Contact;
    overlay.close(Overlay::Contact);
    assert_eq!(overlay, Overlay::None);

    let mut overlay = Overlay::ResumeAccess;
    overlay.close(Overlay::ResumeAccess);
    assert_eq!(overlay, Overlay::None);
}

#[test]
fn close_other_overlay_is_noop() {
    let mut overlay = Overlay::Contact;
    overlay.close(Overlay::ResumeAccess);
    assert_eq!(overlay, Overlay::Contact);

    let mut overlay = Overlay::None;
    overlay.close(Overlay::Contact);
    assert_eq!(overlay, Overlay::None);
}
