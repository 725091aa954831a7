#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatItem {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [StatItem; 4] = [
    StatItem { label: "Customer Satisfaction", value: "98%" },
    StatItem { label: "Projects Delivered", value: "120+" },
    StatItem { label: "Active Users", value: "50K+" },
    StatItem { label: "Average Rating", value: "4.9" },
];

pub const HEADLINE: &str = "W E L C O M E  I T Z  F I Z Z";

/// Headline characters paired with their position, which doubles as the
/// render key.
pub fn headline_chars() -> Vec<(usize, char)> {
    HEADLINE.chars().enumerate().collect()
}

/// Screen-reader text for the letter-spaced headline.
pub fn headline_label() -> String {
    HEADLINE.split_whitespace().collect::<Vec<_>>().join(" ")
}
