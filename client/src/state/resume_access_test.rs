use super::*;

fn attempt_with(input: &str) -> PasswordAttempt {
    let mut attempt = PasswordAttempt::default();
    attempt.set_input(input.to_owned());
    attempt
}

#[test]
fn correct_code_is_granted_and_clears_state() {
    let mut attempt = attempt_with(RESUME_ACCESS_CODE);
    assert_eq!(attempt.submit(), AccessOutcome::Granted);
    assert!(attempt.input.is_empty());
    assert_eq!(attempt.error, None);
}

#[test]
fn wrong_code_is_denied_with_message() {
    let mut attempt = attempt_with("wrong");
    assert_eq!(attempt.submit(), AccessOutcome::Denied);
    assert!(attempt.input.is_empty());
    assert_eq!(attempt.error.as_deref(), Some(INCORRECT_PASSWORD));
}

#[test]
fn comparison_is_exact() {
    for near_miss in ["0821AVA", " 0821ava", "0821ava ", "0821av", "0821avaa", ""] {
        let mut attempt = attempt_with(near_miss);
        assert_eq!(attempt.submit(), AccessOutcome::Denied, "{near_miss:?} should be denied");
        assert!(attempt.input.is_empty());
        assert!(attempt.error.as_deref().is_some_and(|e| !e.is_empty()));
    }
}

#[test]
fn retry_after_denial_can_succeed() {
    let mut attempt = attempt_with("wrong");
    assert_eq!(attempt.submit(), AccessOutcome::Denied);
    attempt.set_input(RESUME_ACCESS_CODE.to_owned());
    assert_eq!(attempt.submit(), AccessOutcome::Granted);
    assert_eq!(attempt.error, None);
}

#[test]
fn retries_are_unlimited() {
    let mut attempt = PasswordAttempt::default();
    for i in 0..50 {
        attempt.set_input(format!("guess-{i}"));
        assert_eq!(attempt.submit(), AccessOutcome::Denied);
    }
    attempt.set_input(RESUME_ACCESS_CODE.to_owned());
    assert_eq!(attempt.submit(), AccessOutcome::Granted);
}

#[test]
fn reset_clears_input_and_error() {
    let mut attempt = attempt_with("wrong");
    attempt.submit();
    attempt.set_input("partial".to_owned());
    attempt.reset();
    assert_eq!(attempt, PasswordAttempt::default());
}

#[test]
fn enter_submits_and_escape_dismisses() {
    assert!(is_submit_key("Enter"));
    assert!(!is_submit_key("a"));
    assert!(!is_submit_key("Escape"));
    assert!(is_dismiss_key("Escape"));
    assert!(!is_dismiss_key("Enter"));
}

// =============================================================
// overlay wiring
// =============================================================

fn subdirectory_site() -> SiteConfig {
    SiteConfig { base: crate::config::BasePath::parse("/portfolio/").expect("valid base") }
}

#[test]
fn denial_keeps_overlay_open_then_grant_opens_document_and_closes() {
    let config = subdirectory_site();
    let mut overlay = Overlay::ResumeAccess;
    let mut attempt = attempt_with("wrong");

    assert_eq!(submit_access(&mut attempt, &mut overlay, &config), None);
    assert_eq!(overlay, Overlay::ResumeAccess);
    assert_eq!(attempt.error.as_deref(), Some(INCORRECT_PASSWORD));

    attempt.set_input(RESUME_ACCESS_CODE.to_owned());
    assert_eq!(
        submit_access(&mut attempt, &mut overlay, &config).as_deref(),
        Some("/portfolio/resume/UserPM_Gamefication_growth.pdf")
    );
    assert_eq!(overlay, Overlay::None);
    assert_eq!(attempt, PasswordAttempt::default());
}

#[test]
fn grant_at_root_resolves_document_at_root() {
    let mut overlay = Overlay::ResumeAccess;
    let mut attempt = attempt_with(RESUME_ACCESS_CODE);
    assert_eq!(
        submit_access(&mut attempt, &mut overlay, &SiteConfig::default()).as_deref(),
        Some("/resume/UserPM_Gamefication_growth.pdf")
    );
}

#[test]
fn dismiss_resets_attempt_and_closes() {
    let mut overlay = Overlay::ResumeAccess;
    let mut attempt = attempt_with("wrong");
    attempt.submit();
    attempt.set_input("half-typed".to_owned());

    dismiss_access(&mut attempt, &mut overlay);
    assert_eq!(overlay, Overlay::None);
    assert_eq!(attempt, PasswordAttempt::default());
}

#[test]
fn dismiss_leaves_contact_overlay_alone() {
    let mut overlay = Overlay::Contact;
    let mut attempt = PasswordAttempt::default();
    dismiss_access(&mut attempt, &mut overlay);
    assert_eq!(overlay, Overlay::Contact);
}
