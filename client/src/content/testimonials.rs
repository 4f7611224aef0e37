//! Quotes from colleagues and mentees.

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub initials: &'static str,
    pub source: &'static str,
    pub role: &'static str,
    pub accent: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Professional, execution-driven, and incredibly reliable partner. Ava bridges the gap between complex compliance and smooth user experience seamlessly.",
        initials: "LI",
        source: "LinkedIn Recommendation",
        role: "Former Colleague",
        accent: "blue",
    },
    Testimonial {
        quote: "The strongest career assist I've ever had. Ava doesn't just review resumes; she reconstructs your product thinking logic.",
        initials: "ST",
        source: "Mentee Feedback",
        role: "Landed Offer at Big Tech",
        accent: "orange",
    },
];
