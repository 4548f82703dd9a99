use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};

/// Generic font family with an ordered list of preferred concrete faces.
///
/// Backends resolve the first preferred face they can load and fall back to
/// the generic family when none is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    SansSerif { preferred: Vec<String> },
    Serif { preferred: Vec<String> },
    Monospace { preferred: Vec<String> },
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::SansSerif {
            preferred: Vec::new(),
        }
    }
}

impl FontFamily {
    /// Creates a sans-serif family preferring a single concrete face.
    #[must_use]
    pub fn sans_serif(face: impl Into<String>) -> Self {
        Self::SansSerif {
            preferred: vec![face.into()],
        }
    }

    /// Generic family name used when no preferred face resolves.
    #[must_use]
    pub fn generic_name(&self) -> &'static str {
        match self {
            Self::SansSerif { .. } => "sans-serif",
            Self::Serif { .. } => "serif",
            Self::Monospace { .. } => "monospace",
        }
    }

    #[must_use]
    pub fn preferred(&self) -> &[String] {
        match self {
            Self::SansSerif { preferred }
            | Self::Serif { preferred }
            | Self::Monospace { preferred } => preferred,
        }
    }
}

/// Text rendering backend requested for all plot text.
///
/// `Latex` only records the request; whether a LaTeX toolchain is actually
/// available is a render-time concern of the consuming backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextRenderer {
    #[default]
    Native,
    Latex,
}

/// Preamble injected before LaTeX-rendered text, as a list of package names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LatexPreamble {
    packages: Vec<String>,
}

impl LatexPreamble {
    #[must_use]
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push_package(&mut self, name: impl Into<String>) {
        self.packages.push(name.into());
    }

    #[must_use]
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Renders the preamble as LaTeX source, one `\usepackage` per line.
    #[must_use]
    pub fn to_source(&self) -> String {
        self.packages
            .iter()
            .map(|name| format!("\\usepackage{{{name}}}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn validate(&self) -> StyleResult<()> {
        for name in &self.packages {
            if name.is_empty() {
                return Err(StyleError::InvalidStyle(
                    "latex preamble package name must not be empty".to_owned(),
                ));
            }
            if !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(StyleError::InvalidStyle(format!(
                    "latex preamble package `{name}` must contain only ASCII alphanumerics, `-`, or `_`"
                )));
            }
        }
        Ok(())
    }
}
