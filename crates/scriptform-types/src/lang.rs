//! Supported script languages

use serde::{Deserialize, Serialize};
use std::fmt;

/// A script language with a signature analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLang {
    /// Python 3 scripts
    Python3,
    /// TypeScript scripts executed on Deno
    Deno,
    /// Go scripts
    Go,
    /// Bash scripts
    Bash,
}

impl ScriptLang {
    /// All supported languages
    pub const ALL: [ScriptLang; 4] = [
        ScriptLang::Python3,
        ScriptLang::Deno,
        ScriptLang::Go,
        ScriptLang::Bash,
    ];

    /// Resolve a language tag
    ///
    /// Returns `None` for unrecognized tags. An unknown tag is never an
    /// error anywhere in the system; callers treat it as "nothing to do".
    pub fn from_tag(tag: &str) -> Option<ScriptLang> {
        match tag {
            "python3" => Some(ScriptLang::Python3),
            "deno" => Some(ScriptLang::Deno),
            "go" => Some(ScriptLang::Go),
            "bash" => Some(ScriptLang::Bash),
            _ => None,
        }
    }

    /// The tag string for this language
    pub fn as_tag(&self) -> &'static str {
        match self {
            ScriptLang::Python3 => "python3",
            ScriptLang::Deno => "deno",
            ScriptLang::Go => "go",
            ScriptLang::Bash => "bash",
        }
    }
}

impl fmt::Display for ScriptLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
