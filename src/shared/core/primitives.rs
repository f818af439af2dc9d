// Small value types shared by every read-side query.
//
// Purpose
// - Give free-text search one meaning across history and alert listings.

/// A case-insensitive substring needle. Built from raw query input; blank input means "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    /// True when at least one present field contains the term.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
        fields
            .into_iter()
            .flatten()
            .any(|field| self.matches(field))
    }
}
