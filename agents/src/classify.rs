//! Decoding the orchestrator's one-word answer into a label.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Closed set of query categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Technical,
    Greeting,
    General,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::Technical,
        Classification::Greeting,
        Classification::General,
    ];

    /// Label used when the model's answer is not recognized.
    pub const DEFAULT: Classification = Classification::General;

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Technical => "technical",
            Classification::Greeting => "greeting",
            Classification::General => "general",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown classification label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for Classification {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Outcome of decoding a model answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// The answer named one of the labels.
    Recognized(Classification),
    /// The answer was unusable; [`Classification::DEFAULT`] applies.
    Fallback { raw: String },
}

impl Decoded {
    pub fn label(&self) -> Classification {
        match self {
            Decoded::Recognized(c) => *c,
            Decoded::Fallback { .. } => Classification::DEFAULT,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Decoded::Fallback { .. })
    }
}

/// Decode a raw model answer. Never fails.
///
/// Surrounding whitespace, quotes, markdown emphasis and trailing punctuation
/// are ignored; what remains must be exactly one label, in any case.
pub fn decode(raw: &str) -> Decoded {
    let cleaned = raw.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '\'' | '"' | '`' | '*' | '.' | ',' | '!' | ':' | ';')
    });
    match cleaned.parse::<Classification>() {
        Ok(label) => Decoded::Recognized(label),
        Err(_) => Decoded::Fallback {
            raw: raw.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_labels_are_recognized() {
        for label in Classification::ALL {
            assert_eq!(decode(label.as_str()), Decoded::Recognized(label));
        }
    }

    #[test]
    fn decoration_is_ignored() {
        assert_eq!(
            decode("  Technical.\n"),
            Decoded::Recognized(Classification::Technical)
        );
        assert_eq!(
            decode("'greeting'"),
            Decoded::Recognized(Classification::Greeting)
        );
        assert_eq!(
            decode("**GENERAL**"),
            Decoded::Recognized(Classification::General)
        );
    }

    #[test]
    fn sentences_fall_back_to_general() {
        let decoded = decode("This is a technical question.");
        assert!(decoded.is_fallback());
        assert_eq!(decoded.label(), Classification::General);
        assert_eq!(
            decoded,
            Decoded::Fallback {
                raw: "This is a technical question.".into()
            }
        );
    }

    #[test]
    fn empty_answer_falls_back() {
        assert_eq!(decode("").label(), Classification::DEFAULT);
        assert!(decode("   ").is_fallback());
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("Greeting".parse::<Classification>(), Ok(Classification::Greeting));
        assert_eq!(
            "greetings".parse::<Classification>(),
            Err(UnknownLabel("greetings".into()))
        );
    }
}
