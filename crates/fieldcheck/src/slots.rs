// File: src/slots.rs
// Purpose: Per-field display slots and the password rule list

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What to do when a render targets a field with no registered slot.
///
/// A missing slot is a page-setup problem, not a runtime validation
/// outcome; the policy decides whether that surfaces as an error or a
/// logged skip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPolicy {
    /// Missing slot surfaces as `Error::MissingSlot`.
    #[default]
    Strict,
    /// Skip the render and log a warning.
    Lenient,
}

/// The message slots this system is the sole writer of.
///
/// One text slot per registered field, plus a single list slot for the
/// password rule violations. Slots hold at most one message; writes
/// overwrite unconditionally.
#[derive(Debug, Clone, Default)]
pub struct DisplaySlots {
    slots: HashMap<String, String>,
    rule_list: Vec<String>,
}

impl DisplaySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an (initially empty) slot for a field. Idempotent;
    /// re-registering keeps the current text.
    pub fn register(&mut self, field_id: &str) {
        self.slots.entry(field_id.to_string()).or_default();
    }

    pub fn is_registered(&self, field_id: &str) -> bool {
        self.slots.contains_key(field_id)
    }

    /// Overwrite a slot's text. Returns false when no slot is registered
    /// for the field.
    pub fn set(&mut self, field_id: &str, text: &str) -> bool {
        match self.slots.get_mut(field_id) {
            Some(slot) => {
                slot.clear();
                slot.push_str(text);
                true
            }
            None => false,
        }
    }

    /// Current slot text; `None` when the field has no registered slot,
    /// `Some("")` when the slot is clear.
    pub fn message(&self, field_id: &str) -> Option<&str> {
        self.slots.get(field_id).map(String::as_str)
    }

    /// Replace the rule-violation list wholesale.
    pub fn replace_rule_list(&mut self, items: Vec<String>) {
        self.rule_list = items;
    }

    pub fn rule_list(&self) -> &[String] {
        &self.rule_list
    }
}
