use crate::feature::{Feature, FeatureCollection};

/// How a feature's name is compared to the river name we're looking for.
///
/// Matching is case sensitive, and compares the unicode strings as-is, without normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Name contains the pattern as a substring
    #[default]
    Contains,
    NotContains,
    /// Name is exactly the pattern
    Exact,
    NotExact,
}

impl MatchMode {
    pub fn matches(&self, name: &str, pattern: &str) -> bool {
        match self {
            MatchMode::Contains => name.contains(pattern),
            MatchMode::NotContains => !name.contains(pattern),
            MatchMode::Exact => name == pattern,
            MatchMode::NotExact => name != pattern,
        }
    }

    /// The mode which matches exactly the names this one doesn't
    pub fn complement(&self) -> MatchMode {
        match self {
            MatchMode::Contains => MatchMode::NotContains,
            MatchMode::NotContains => MatchMode::Contains,
            MatchMode::Exact => MatchMode::NotExact,
            MatchMode::NotExact => MatchMode::Exact,
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MatchMode::Contains => "contains",
            MatchMode::NotContains => "not-contains",
            MatchMode::Exact => "exact",
            MatchMode::NotExact => "not-exact",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "contains" | "∋" => Ok(MatchMode::Contains),
            "not-contains" | "∌" => Ok(MatchMode::NotContains),
            "exact" | "=" => Ok(MatchMode::Exact),
            "not-exact" | "≠" => Ok(MatchMode::NotExact),
            "" => Err("An empty string is not a valid match mode".to_string()),
            other => Err(format!(
                "Unknown match mode {:?}, expected one of: contains, not-contains, exact, not-exact",
                other
            )),
        }
    }
}

/// All features whose name matches, in the same order as the collection.
pub fn select_by_name<'a>(
    collection: &'a FeatureCollection,
    pattern: &str,
    mode: MatchMode,
) -> Vec<&'a Feature> {
    collection
        .iter()
        .filter(|f| mode.matches(&f.name, pattern))
        .collect()
}
