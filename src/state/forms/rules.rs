//! Declarative field validation shared by every form

use super::field::FormField;
use super::upload::SelectedFile;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Message shown for a present but malformed email address
pub const EMAIL_FORMAT_MESSAGE: &str = "Please enter a valid email";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Check an address against the `local@domain.tld` shape
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validation applied to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must contain something other than whitespace
    Required,
    /// Required, then must look like an email address
    Email,
    /// Dropdown must not sit on the unselected sentinel
    Selected,
    /// Checkbox group must have at least one value ticked
    AtLeastOne,
    /// A file must have been accepted by the picker
    FileRequired,
}

/// A rule bound to a field, with the message shown when it fails
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

impl FieldRule {
    pub fn new(field: &'static str, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }

    /// Required text using the `"<Label> is required"` message
    pub fn required(field: &'static str, label: &str) -> Self {
        Self::new(field, Rule::Required, format!("{label} is required"))
    }

    pub fn email(field: &'static str) -> Self {
        Self::new(field, Rule::Email, "Email is required")
    }

    /// Check the rule against the current field value
    fn check(&self, field: Option<&FormField>, file: Option<&SelectedFile>) -> Option<String> {
        let failed = match self.rule {
            Rule::Required | Rule::AtLeastOne => field.is_none_or(FormField::is_blank),
            Rule::Selected => field.is_none_or(|f| f.as_text().is_empty()),
            Rule::FileRequired => file.is_none(),
            Rule::Email => {
                let value = field.map(FormField::as_text).unwrap_or_default();
                if value.trim().is_empty() {
                    true
                } else if !is_valid_email(value) {
                    return Some(EMAIL_FORMAT_MESSAGE.to_string());
                } else {
                    false
                }
            }
        };
        failed.then(|| self.message.clone())
    }
}

/// Field name to validation message. Empty means no known errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    /// Drop a field's entry, returning whether one existed
    pub fn remove(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Run every rule against the given values. The first failing rule for a
/// field wins.
pub fn validate(
    fields: &[FormField],
    file: Option<&SelectedFile>,
    rules: &[FieldRule],
) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for rule in rules {
        if errors.contains(rule.field) {
            continue;
        }
        let field = fields.iter().find(|f| f.name == rule.field);
        if let Some(message) = rule.check(field, file) {
            errors.insert(rule.field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::Choice;
    use pretty_assertions::assert_eq;

    const SUBJECTS: &[Choice] = &[Choice::plain("Physics"), Choice::plain("Chemistry")];

    fn fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name", false),
            FormField::text("email", "Email", false),
            FormField::select("grade", "Grade", SUBJECTS),
            FormField::checkboxes("subjects", "Subjects", SUBJECTS),
        ]
    }

    fn rules() -> Vec<FieldRule> {
        vec![
            FieldRule::required("name", "Name"),
            FieldRule::email("email"),
            FieldRule::new("grade", Rule::Selected, "Please select your grade level"),
            FieldRule::new(
                "subjects",
                Rule::AtLeastOne,
                "Please select at least one subject",
            ),
        ]
    }

    fn set(fields: &mut [FormField], name: &str, value: &str) {
        let field = fields.iter_mut().find(|f| f.name == name).unwrap();
        field.set_text(value.to_string());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@school.co.uk"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_empty_form_reports_every_rule() {
        let errors = validate(&fields(), None, &rules());
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("grade"), Some("Please select your grade level"));
        assert_eq!(
            errors.get("subjects"),
            Some("Please select at least one subject")
        );
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_whitespace_only_fails_required() {
        let mut fields = fields();
        set(&mut fields, "name", "   ");
        let errors = validate(&fields, None, &rules());
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_email_messages_are_exclusive() {
        let mut fields = fields();

        set(&mut fields, "email", "a@b");
        let errors = validate(&fields, None, &rules());
        assert_eq!(errors.get("email"), Some(EMAIL_FORMAT_MESSAGE));

        set(&mut fields, "email", "");
        let errors = validate(&fields, None, &rules());
        assert_eq!(errors.get("email"), Some("Email is required"));

        set(&mut fields, "email", "a@b.com");
        let errors = validate(&fields, None, &rules());
        assert!(!errors.contains("email"));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let mut fields = fields();
        set(&mut fields, "name", "Ada");
        set(&mut fields, "email", "ada@example.com");
        set(&mut fields, "grade", "Physics");
        fields[3].set_member("Chemistry", true);
        assert!(validate(&fields, None, &rules()).is_empty());
    }

    #[test]
    fn test_file_required_rule() {
        let rules = vec![FieldRule::new("file", Rule::FileRequired, "Video file is required")];
        let errors = validate(&[], None, &rules);
        assert_eq!(errors.get("file"), Some("Video file is required"));

        let file = SelectedFile::new("lesson.mp4", 1024, "video/mp4");
        assert!(validate(&[], Some(&file), &rules).is_empty());
    }

    #[test]
    fn test_error_keys_are_rule_fields() {
        let errors = validate(&fields(), None, &rules());
        let rule_fields: Vec<&str> = rules().iter().map(|r| r.field).collect();
        assert!(errors.fields().all(|f| rule_fields.contains(&f)));
    }

    #[test]
    fn test_error_map_remove() {
        let mut errors = ErrorMap::new();
        errors.insert("name", "Name is required");
        errors.insert("email", "Email is required");
        assert!(errors.remove("name"));
        assert!(!errors.remove("name"));
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("email"));
    }
}
