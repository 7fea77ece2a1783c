use serde::Deserialize;

/// How a multi-select specialty filter combines its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialtyMatch {
    /// The record must carry every selected tag.
    #[default]
    All,
    /// The record must carry at least one selected tag.
    Any,
}

impl SpecialtyMatch {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
        }
    }
}

impl std::fmt::Display for SpecialtyMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
