//! Form field value objects

use serde::Serialize;

/// One entry of a dropdown or checkbox group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    /// Choice whose submitted value is its label
    pub const fn plain(label: &'static str) -> Self {
        Self {
            value: label,
            label,
        }
    }
}

/// What kind of input a field is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { multiline: bool },
    Select { options: &'static [Choice] },
    Checkboxes { options: &'static [Choice] },
    /// Path entry for a file picker; the picked file lives on the session
    File,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Multi(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub default: FieldValue,
    pub hint: Option<&'static str>,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, default: FieldValue) -> Self {
        Self {
            name,
            label,
            kind,
            value: default.clone(),
            default,
            hint: None,
        }
    }

    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, multiline: bool) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Text { multiline },
            FieldValue::default(),
        )
    }

    /// Create a dropdown with no option selected
    pub fn select(name: &'static str, label: &'static str, options: &'static [Choice]) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Select { options },
            FieldValue::default(),
        )
    }

    /// Create a checkbox group with nothing ticked
    pub fn checkboxes(name: &'static str, label: &'static str, options: &'static [Choice]) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Checkboxes { options },
            FieldValue::Multi(Vec::new()),
        )
    }

    /// Create a file path entry
    pub fn file(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::File, FieldValue::default())
    }

    /// Replace the default (and current) value
    pub fn with_default(mut self, value: &str) -> Self {
        self.default = FieldValue::Text(value.to_string());
        self.value = self.default.clone();
        self
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Text { multiline: true })
    }

    /// Whether keystrokes edit this field's text directly
    pub fn accepts_typing(&self) -> bool {
        matches!(self.kind, FieldKind::Text { .. } | FieldKind::File)
    }

    /// Options for selects and checkbox groups
    pub fn options(&self) -> &'static [Choice] {
        match self.kind {
            FieldKind::Select { options } | FieldKind::Checkboxes { options } => options,
            FieldKind::Text { .. } | FieldKind::File => &[],
        }
    }

    /// Get the text value (returns empty string for checkbox groups)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Multi(_) => "",
        }
    }

    /// Get the ticked values (returns an empty slice for single-value fields)
    pub fn selected(&self) -> &[String] {
        match &self.value {
            FieldValue::Multi(items) => items,
            FieldValue::Text(_) => &[],
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selected().iter().any(|v| v == value)
    }

    /// True when the field holds nothing a rule would accept as present
    pub fn is_blank(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Multi(items) => items.is_empty(),
        }
    }

    /// Overwrite a single-value field. Checkbox groups are left untouched.
    pub fn set_text(&mut self, value: String) -> bool {
        if matches!(self.kind, FieldKind::Checkboxes { .. }) {
            return false;
        }
        self.value = FieldValue::Text(value);
        true
    }

    /// Add or remove a checkbox value. Returns whether anything changed.
    pub fn set_member(&mut self, value: &str, present: bool) -> bool {
        let FieldValue::Multi(items) = &mut self.value else {
            return false;
        };
        let position = items.iter().position(|v| v == value);
        match (present, position) {
            (true, None) => {
                items.push(value.to_string());
                true
            }
            (false, Some(idx)) => {
                items.remove(idx);
                true
            }
            _ => false,
        }
    }

    /// Next (or previous) dropdown value, wrapping. The unselected sentinel is
    /// part of the cycle only when the field starts unselected.
    pub fn cycled_option(&self, forward: bool) -> Option<String> {
        let FieldKind::Select { options } = self.kind else {
            return None;
        };
        let mut values: Vec<&str> = Vec::with_capacity(options.len() + 1);
        if self.default == FieldValue::default() {
            values.push("");
        }
        values.extend(options.iter().map(|c| c.value));
        if values.is_empty() {
            return None;
        }

        let current = values
            .iter()
            .position(|v| *v == self.as_text())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % values.len()
        } else if current == 0 {
            values.len() - 1
        } else {
            current - 1
        };
        Some(values[next].to_string())
    }

    /// Return the field to its schema default
    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match (&self.kind, &self.value) {
            (FieldKind::Select { options }, FieldValue::Text(s)) => options
                .iter()
                .find(|c| c.value == s)
                .map(|c| c.label.to_string())
                .unwrap_or_default(),
            (_, FieldValue::Text(s)) => s.clone(),
            (_, FieldValue::Multi(items)) => items.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOURS: &[Choice] = &[Choice::plain("Red"), Choice::plain("Green")];
    const METHODS: &[Choice] = &[Choice::new("email", "Email"), Choice::new("phone", "Phone")];

    #[test]
    fn test_text_field_defaults_empty() {
        let field = FormField::text("name", "Name", false);
        assert_eq!(field.as_text(), "");
        assert!(field.is_blank());
        assert!(!field.is_multiline());
    }

    #[test]
    fn test_whitespace_is_blank() {
        let mut field = FormField::text("name", "Name", false);
        field.set_text("   \t".to_string());
        assert!(field.is_blank());
    }

    #[test]
    fn test_set_text_refused_on_checkboxes() {
        let mut field = FormField::checkboxes("colours", "Colours", COLOURS);
        assert!(!field.set_text("Red".to_string()));
        assert!(field.selected().is_empty());
    }

    #[test]
    fn test_set_member_toggle_restores_prior_state() {
        let mut field = FormField::checkboxes("colours", "Colours", COLOURS);
        field.set_member("Green", true);
        let before = field.value.clone();

        assert!(field.set_member("Red", true));
        assert!(field.set_member("Red", false));
        assert_eq!(field.value, before);
    }

    #[test]
    fn test_set_member_noop_when_already_in_state() {
        let mut field = FormField::checkboxes("colours", "Colours", COLOURS);
        assert!(!field.set_member("Red", false));
        field.set_member("Red", true);
        assert!(!field.set_member("Red", true));
        assert_eq!(field.selected(), ["Red".to_string()]);
    }

    #[test]
    fn test_removal_keeps_insertion_order_of_survivors() {
        const THREE: &[Choice] = &[Choice::plain("A"), Choice::plain("B"), Choice::plain("C")];
        let mut field = FormField::checkboxes("letters", "Letters", THREE);
        field.set_member("C", true);
        field.set_member("A", true);
        field.set_member("B", true);
        field.set_member("A", false);
        assert_eq!(field.selected(), ["C".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_cycle_includes_unselected_sentinel() {
        let mut field = FormField::select("colour", "Colour", COLOURS);
        let first = field.cycled_option(true).unwrap();
        assert_eq!(first, "Red");
        field.set_text(first);
        field.set_text(field.cycled_option(true).unwrap());
        assert_eq!(field.as_text(), "Green");
        assert_eq!(field.cycled_option(true).unwrap(), "");
    }

    #[test]
    fn test_cycle_skips_sentinel_when_defaulted() {
        let field = FormField::select("method", "Method", METHODS).with_default("email");
        assert_eq!(field.cycled_option(true).unwrap(), "phone");
        assert_eq!(field.cycled_option(false).unwrap(), "phone");
    }

    #[test]
    fn test_select_display_uses_label() {
        let field = FormField::select("method", "Method", METHODS).with_default("phone");
        assert_eq!(field.display_value(), "Phone");
    }

    #[test]
    fn test_reset_restores_default() {
        let mut field = FormField::select("method", "Method", METHODS).with_default("email");
        field.set_text("phone".to_string());
        field.reset();
        assert_eq!(field.as_text(), "email");
    }

    #[test]
    fn test_cycle_on_text_field_is_none() {
        let field = FormField::text("name", "Name", false);
        assert!(field.cycled_option(true).is_none());
    }
}
