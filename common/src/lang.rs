use serde::{Deserialize, Serialize};

/// Site language, taken from the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Cs,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Cs, Language::En];

    /// URL path segment, also used as the `lang` query value.
    pub const fn code(self) -> &'static str {
        match self {
            Language::Cs => "cs",
            Language::En => "en",
        }
    }

    /// Value for the `<html lang>` attribute and `og:locale`.
    pub const fn locale(self) -> &'static str {
        match self {
            Language::Cs => "cs_CZ",
            Language::En => "en_US",
        }
    }

    /// Parses a path segment case-insensitively. Only `cs` and `en` are accepted.
    pub fn from_segment(segment: &str) -> Option<Self> {
        if segment.eq_ignore_ascii_case("cs") {
            Some(Language::Cs)
        } else if segment.eq_ignore_ascii_case("en") {
            Some(Language::En)
        } else {
            None
        }
    }

    /// The other language, for the header switcher.
    pub const fn other(self) -> Self {
        match self {
            Language::Cs => Language::En,
            Language::En => Language::Cs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_case_insensitive() {
        assert_eq!(Language::from_segment("EN"), Some(Language::En));
        assert_eq!(Language::from_segment("Cs"), Some(Language::Cs));
        assert_eq!(Language::from_segment("cz"), None);
        assert_eq!(Language::from_segment(""), None);
    }

    #[test]
    fn code_round_trips_through_segment_parsing() {
        for lang in Language::ALL {
            assert_eq!(Language::from_segment(lang.code()), Some(lang));
        }
    }
}
