//! Class-name composition

use std::fmt;

/// Builds a `class` attribute from conditional pieces.
///
/// Whitespace-separated tokens are split, empties skipped and repeats
/// dropped (first occurrence wins).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classes {
    tokens: Vec<String>,
}

impl Classes {
    pub fn new(base: &str) -> Self {
        Self::default().add(base)
    }

    #[must_use]
    pub fn add(mut self, classes: &str) -> Self {
        for token in classes.split_whitespace() {
            if !self.tokens.iter().any(|t| t == token) {
                self.tokens.push(token.to_owned());
            }
        }
        self
    }

    #[must_use]
    pub fn add_if(self, condition: bool, classes: &str) -> Self {
        if condition { self.add(classes) } else { self }
    }

    /// Add `when_true` or `when_false`
    #[must_use]
    pub fn pick(self, condition: bool, when_true: &str, when_false: &str) -> Self {
        self.add(if condition { when_true } else { when_false })
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn into_string(self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for Classes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
