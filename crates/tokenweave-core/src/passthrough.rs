//! The static passthrough catalogue for utility-framework integration.
//!
//! The `@theme` block of the generated stylesheet is not derived from the
//! token tree: it maps a fixed set of externally expected names (Tailwind's
//! theme namespace) onto internally derived token names. The catalogue is a
//! versioned YAML artifact so it can be diffed and validated independently
//! of any generation run; the copy embedded in this crate is the default,
//! and callers may substitute a catalogue loaded from disk.
//!
//! Keeping the catalogue aligned with the token taxonomy is a manual
//! maintenance task by design.

use serde::Deserialize;

use crate::error::EmitError;

/// The catalogue shipped with this crate.
pub const DEFAULT_CATALOGUE: &str = include_str!("../assets/passthrough.yaml");

/// One alias line of the `@theme` block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PassthroughEntry {
    /// The externally expected name, e.g. `--text-200`.
    pub alias: String,
    /// The internally derived name it forwards to.
    pub target: String,
}

/// A labelled run of catalogue entries, rendered under a comment banner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PassthroughGroup {
    pub label: String,
    pub entries: Vec<PassthroughEntry>,
}

/// The full passthrough catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Passthrough {
    pub groups: Vec<PassthroughGroup>,
}

impl Passthrough {
    /// Parses a catalogue from its YAML form.
    pub fn from_yaml(text: &str) -> Result<Self, EmitError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Loads the embedded default catalogue.
    pub fn embedded() -> Result<Self, EmitError> {
        Self::from_yaml(DEFAULT_CATALOGUE)
    }

    /// Total number of alias lines across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.entries.is_empty())
    }

    /// Renders the body of the `@theme` block: one commented run of
    /// `alias: var(target);` lines per group, blank line between groups.
    pub fn render_body(&self) -> String {
        let mut rendered = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            let mut lines = Vec::with_capacity(group.entries.len() + 1);
            lines.push(format!("  /* {} */", group.label));
            for entry in &group.entries {
                lines.push(format!("  {}: var({});", entry.alias, entry.target));
            }
            rendered.push(lines.join("\n"));
        }
        rendered.join("\n\n")
    }
}
