//! Identity, navigation, and outbound links.

pub const OWNER_NAME: &str = "Ava Wang";
pub const MONOGRAM: &str = "A.";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/chilla-ong-0475b8217/?locale=zh";
pub const CONTACT_EMAIL: &str = "avawang821@gmail.com";

/// Site-relative path of the résumé document.
pub const RESUME_DOCUMENT: &str = "resume/UserPM_Gamefication_growth.pdf";

/// Site-relative path of the hero portrait.
pub const PROFILE_IMAGE: &str = "images/profile-small.jpg";

/// In-page anchor targeted by the hero's "View Showcase" button.
pub const SHOWCASE_ANCHOR: &str = "work";

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Work", anchor: SHOWCASE_ANCHOR },
    NavLink { label: "Solo Lab", anchor: "solo-lab" },
    NavLink { label: "Impact", anchor: "impact" },
    NavLink { label: "Contact", anchor: "contact" },
];

/// Companies shown in the logo wall.
pub const LOGOS: &[&str] = &["ALIBABA", "FUTU", "KINGSOFT", "ZEAL"];

pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}
