use crate::ast;
use regex::Regex;

/// Selects definitions by their top-level name.
///
/// A [`Name`](DefinitionMatcher::Name) matches the whole name literally. A
/// [`Pattern`](DefinitionMatcher::Pattern) is applied as given, so anchoring
/// and flags are up to the caller. Nameless definitions never match.
#[derive(Clone, Debug)]
pub enum DefinitionMatcher {
    Name(String),
    Pattern(Regex),
}
impl DefinitionMatcher {
    pub fn matches(&self, def: &ast::Definition) -> bool {
        ast::definition_name(def).is_some_and(|name| self.matches_name(name))
    }

    pub fn matches_name(&self, name: &str) -> bool {
        match self {
            Self::Name(expected) => expected == name,
            Self::Pattern(regex) => regex.is_match(name),
        }
    }
}
impl std::convert::From<&str> for DefinitionMatcher {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}
impl std::convert::From<&String> for DefinitionMatcher {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}
impl std::convert::From<String> for DefinitionMatcher {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}
impl std::convert::From<Regex> for DefinitionMatcher {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}
impl std::convert::From<&Regex> for DefinitionMatcher {
    fn from(regex: &Regex) -> Self {
        Self::Pattern(regex.clone())
    }
}
impl std::fmt::Display for DefinitionMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "`{name}`"),
            Self::Pattern(regex) => write!(f, "/{regex}/"),
        }
    }
}
