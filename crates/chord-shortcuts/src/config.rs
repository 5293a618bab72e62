//! Shortcut configuration.

use crate::error::ShortcutResult;
use crate::event::EventType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resolved shortcut behaviour.
///
/// Layered as built-in defaults, then manager options, then per-call options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Event that triggers matching.
    pub event_type: EventType,
    /// Let matched events keep bubbling and keep their default action.
    pub propagate: bool,
    /// Ignore events originating in INPUT or TEXTAREA elements.
    pub input_disabled: bool,
    /// Compare a chord's Alt against the event's Shift flag and vice versa.
    pub legacy_modifier_swap: bool,
}

impl ShortcutConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ShortcutResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML.
    pub fn from_toml_str(content: &str) -> ShortcutResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides on top of this configuration.
    pub fn with(&self, options: &ShortcutOptions) -> Self {
        Self {
            event_type: options.event_type.unwrap_or(self.event_type),
            propagate: options.propagate.unwrap_or(self.propagate),
            input_disabled: options.input_disabled.unwrap_or(self.input_disabled),
            legacy_modifier_swap: options
                .legacy_modifier_swap
                .unwrap_or(self.legacy_modifier_swap),
        }
    }
}

/// Optional overrides for a manager or a single binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutOptions {
    /// Event that triggers matching.
    pub event_type: Option<EventType>,
    /// Let matched events bubble.
    pub propagate: Option<bool>,
    /// Ignore events from text entry elements.
    pub input_disabled: Option<bool>,
    /// Legacy Alt/Shift comparison.
    pub legacy_modifier_swap: Option<bool>,
}

impl ShortcutOptions {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the triggering event.
    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    /// Override propagation.
    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = Some(propagate);
        self
    }

    /// Override text-entry suppression.
    pub fn input_disabled(mut self, input_disabled: bool) -> Self {
        self.input_disabled = Some(input_disabled);
        self
    }

    /// Override the legacy Alt/Shift comparison.
    pub fn legacy_modifier_swap(mut self, swap: bool) -> Self {
        self.legacy_modifier_swap = Some(swap);
        self
    }
}
