//! Formatting options and host settings

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use tracing::{debug, instrument};

#[cfg(feature = "serde")]
use crate::error::{Error, Result};

/// Default number of spaces per nesting level
pub const DEFAULT_INDENT_SPACES: usize = 2;

/// Widest indent unit the formatter will emit
pub const MAX_INDENT_SPACES: usize = 16;

/// Configuration options for XML formatting
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FormatConfig {
    /// Put the second and later attributes on their own lines, aligned under
    /// the first attribute
    pub align_attributes: bool,
    /// Render `<Tag>value</Tag>` on one line
    pub inline_element_values: bool,
    /// Remove `VsDebuggerCausalityData` comments and elements first
    pub hide_causality_data: bool,
    /// Number of spaces for indentation
    pub indent_spaces: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            align_attributes: false,
            inline_element_values: false,
            hide_causality_data: false,
            indent_spaces: DEFAULT_INDENT_SPACES,
        }
    }
}

impl FormatConfig {
    pub const fn with_align_attributes(mut self, enabled: bool) -> Self {
        self.align_attributes = enabled;
        self
    }

    pub const fn with_inline_element_values(mut self, enabled: bool) -> Self {
        self.inline_element_values = enabled;
        self
    }

    pub const fn with_hide_causality_data(mut self, enabled: bool) -> Self {
        self.hide_causality_data = enabled;
        self
    }

    pub const fn with_indent_spaces(mut self, spaces: usize) -> Self {
        self.indent_spaces = spaces;
        self
    }
}

/// Host settings file. Only the `ui` section is read, other keys are
/// ignored.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: FormatConfig,
}

#[cfg(feature = "serde")]
impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file
    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&content).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(?settings.ui, "loaded settings");
        Ok(settings)
    }
}
