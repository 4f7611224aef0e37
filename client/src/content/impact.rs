//! "Life & Impact" section copy.

pub const INTRO: &str =
    "Beyond product metrics, I focus on empowering people and solving real-world complexities.";

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub school: &'static str,
    pub field: &'static str,
    pub extras: &'static [&'static str],
}

pub const EDUCATION: Education = Education {
    school: "HUST (985/211)",
    field: "Energy & Power Engineering",
    extras: &["CS Minor", "Project Mgmt"],
};

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const LEADERSHIP_STATS: &[Stat] = &[
    Stat { value: "10+", label: "Big Tech Offers" },
    Stat { value: "High", label: "Impact Energy" },
];

#[derive(Clone, Copy, Debug)]
pub struct Post {
    pub kind: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const RECENT_POSTS: &[Post] = &[
    Post {
        kind: "Blog",
        title: "How Gaming Economics Shapes Fintech",
        summary: "Applying inflation control, sinks, and faucets from MMORPGs to real-world financial loyalty systems.",
    },
    Post {
        kind: "Guide",
        title: "The PM Guide to TTPS in HK",
        summary: "A systematic breakdown of the visa process, treated like a product launch with clear milestones.",
    },
];
