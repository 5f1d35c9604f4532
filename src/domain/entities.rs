//! Domain value types.

/// One external service endpoint to be notified of a profile update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Short label used in log lines.
    pub name: &'static str,
    pub base_url: &'static str,
    /// Appended after the username, verbatim.
    pub path_suffix: &'static str,
}

/// The services notified on every run, in invocation order.
pub const TARGETS: [Target; 2] = [
    Target {
        name: "mal-badges",
        base_url: "https://www.mal-badges.com/users",
        path_suffix: "/update",
    },
    Target {
        name: "anime.plus",
        base_url: "https://anime.plus",
        path_suffix: "?referral=search",
    },
];
