use regex::Regex;

/// How a lookup identifies a name: by exact string equality or by a
/// [`Regex`] (which may match anywhere in the name).
///
/// Every lookup that accepts a [`NameMatcher`] is first-match-wins in
/// document order.
#[derive(Clone, Debug)]
pub enum NameMatcher {
    Exact(String),
    Pattern(Regex),
}
impl NameMatcher {
    /// Compile `pattern` into a [`NameMatcher::Pattern`].
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == name,
            Self::Pattern(regex) => regex.is_match(name),
        }
    }
}
impl std::convert::From<&str> for NameMatcher {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_string())
    }
}
impl std::convert::From<String> for NameMatcher {
    fn from(value: String) -> Self {
        Self::Exact(value)
    }
}
impl std::convert::From<&String> for NameMatcher {
    fn from(value: &String) -> Self {
        Self::Exact(value.to_owned())
    }
}
impl std::convert::From<Regex> for NameMatcher {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}
impl std::convert::From<&Regex> for NameMatcher {
    fn from(value: &Regex) -> Self {
        Self::Pattern(value.clone())
    }
}
impl std::convert::From<&NameMatcher> for NameMatcher {
    fn from(value: &NameMatcher) -> Self {
        value.clone()
    }
}
impl std::fmt::Display for NameMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(name) => write!(f, "`{name}`"),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_requires_full_equality() {
        let matcher = NameMatcher::from("Planet");
        assert!(matcher.matches("Planet"));
        assert!(!matcher.matches("Planets"));
        assert!(!matcher.matches("planet"));
    }

    #[test]
    fn pattern_matches_anywhere_unless_anchored() -> Result<(), regex::Error> {
        let matcher = NameMatcher::pattern("lane")?;
        assert!(matcher.matches("Planet"));

        let anchored = NameMatcher::pattern("^lane")?;
        assert!(!anchored.matches("Planet"));
        Ok(())
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(NameMatcher::pattern("(unclosed").is_err());
    }
}
