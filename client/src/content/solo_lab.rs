//! Solo Lab side project: screenshots, growth chart, and stat tiles.

pub const GAME_SCREENS: &[&str] = &[
    "images/game-screens/1.jpg",
    "images/game-screens/2.jpg",
    "images/game-screens/3.jpg",
    "images/game-screens/4.jpg",
];

pub const TAGS: &[&str] = &["Product Hunt Launch", "WeChat Group Viral", "AI Agent Ops"];

/// Annotated point on the growth chart, in SVG user units (200x120 box).
#[derive(Clone, Copy, Debug)]
pub struct Milestone {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
    pub emphasized: bool,
}

pub const GROWTH_CURVE: &str = "M10,105 Q30,105 40,100 C60,80 80,90 100,50 C120,10 150,20 190,5";

pub const MILESTONES: &[Milestone] = &[
    Milestone { x: 10.0, y: 105.0, label: "Day 1 (20)", emphasized: false },
    Milestone { x: 100.0, y: 50.0, label: "Day 3: Viral Hook", emphasized: true },
    Milestone { x: 190.0, y: 5.0, label: "Day 5 (500+)", emphasized: true },
];

#[derive(Clone, Copy, Debug)]
pub struct StatTile {
    pub value: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
    pub tone: &'static str,
}

pub const STAT_TILES: &[StatTile] = &[
    StatTile { value: "80%", label: "Feedback Fixed", caption: "via User Community", tone: "green" },
    StatTile { value: "24h", label: "Idea to Launch", caption: "Agile Dev Cycle", tone: "orange" },
];
