// File: src/field.rs
// Purpose: Field model with HTML5 constraint attributes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Url,
    Password,
    Number,
    Select,
    File,
    Reset,
    Submit,
    Button,
}

impl FieldType {
    /// Types exempt from validation: buttons plus file and reset inputs.
    pub fn is_exempt(&self) -> bool {
        matches!(
            self,
            FieldType::File | FieldType::Reset | FieldType::Submit | FieldType::Button
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Url => "url",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::File => "file",
            FieldType::Reset => "reset",
            FieldType::Submit => "submit",
            FieldType::Button => "button",
        };
        write!(f, "{}", name)
    }
}

/// A named input element and its constraint attributes.
///
/// The value and the user-settable flags are mutated by input; this
/// system only writes `pattern` and `title` (postal and confirmation
/// fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub step: Option<f64>,
}

impl Field {
    pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            field_type,
            value: String::new(),
            disabled: false,
            required: false,
            pattern: None,
            title: None,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            step: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// User input mutation.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exempt_types() {
        assert!(FieldType::File.is_exempt());
        assert!(FieldType::Reset.is_exempt());
        assert!(FieldType::Submit.is_exempt());
        assert!(FieldType::Button.is_exempt());

        assert!(!FieldType::Text.is_exempt());
        assert!(!FieldType::Email.is_exempt());
        assert!(!FieldType::Password.is_exempt());
        assert!(!FieldType::Select.is_exempt());
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldType::Email.to_string(), "email");
        assert_eq!(FieldType::Submit.to_string(), "submit");
    }

    #[test]
    fn test_builder_defaults() {
        let field = Field::new("email", FieldType::Email);
        assert_eq!(field.id, "email");
        assert!(field.value.is_empty());
        assert!(!field.required);
        assert!(field.pattern.is_none());
    }
}
