//! Field layouts and validation rules for the three site forms

use super::field::{Choice, FormField};
use super::rules::{FieldRule, Rule};
use super::upload::MAX_UPLOAD_BYTES;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Subjects taught, shared by registration and upload
pub const SUBJECTS: &[Choice] = &[
    Choice::plain("Mathematics"),
    Choice::plain("Physics"),
    Choice::plain("Chemistry"),
];

pub const GRADES: &[Choice] = &[
    Choice::plain("Grade 9"),
    Choice::plain("Grade 10"),
    Choice::plain("Grade 11"),
    Choice::plain("Grade 12"),
    Choice::plain("College/University"),
    Choice::plain("Adult Learner"),
];

pub const SCHEDULES: &[Choice] = &[
    Choice::plain("Weekday Mornings"),
    Choice::plain("Weekday Afternoons"),
    Choice::plain("Weekday Evenings"),
    Choice::plain("Weekend Mornings"),
    Choice::plain("Weekend Afternoons"),
    Choice::plain("Flexible"),
];

pub const CONTACT_METHODS: &[Choice] = &[
    Choice::new("email", "Email"),
    Choice::new("phone", "Phone Call"),
    Choice::new("text", "Text Message"),
    Choice::new("video", "Video Call"),
];

pub const UPLOAD_LEVELS: &[Choice] = &[
    Choice::plain("Grade 9"),
    Choice::plain("Grade 10"),
    Choice::plain("Grade 11"),
    Choice::plain("Grade 12"),
    Choice::plain("College"),
    Choice::plain("University"),
];

/// Delay before a sent contact message clears itself
pub const CONTACT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Name of the upload form's file field
pub const FILE_FIELD: &str = "file";

/// Which form a session drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Contact,
    Registration,
    VideoUpload,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Contact => "Send Me a Message",
            Self::Registration => "Student Registration",
            Self::VideoUpload => "Upload Educational Video",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Contact => "contact",
            Self::Registration => "registration",
            Self::VideoUpload => "video_upload",
        };
        f.write_str(name)
    }
}

/// Everything a session needs to know about its form
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub rules: Vec<FieldRule>,
    /// Submission runs as a background transfer reporting progress
    pub tracks_progress: bool,
    /// Return to editing this long after a successful submit
    pub auto_reset_after: Option<Duration>,
    pub max_file_bytes: u64,
}

impl FormSchema {
    pub fn contact() -> Self {
        Self {
            kind: FormKind::Contact,
            fields: vec![
                FormField::text("name", "Your Name *", false).with_hint("Enter your full name"),
                FormField::text("email", "Email Address *", false).with_hint("Enter your email"),
                FormField::text("subject", "Subject *", false).with_hint("What's this about?"),
                FormField::select(
                    "preferredContact",
                    "Preferred Contact Method",
                    CONTACT_METHODS,
                )
                .with_default("email"),
                FormField::text("message", "Your Message *", true)
                    .with_hint("Tell me how I can help you..."),
            ],
            rules: vec![
                FieldRule::required("name", "Name"),
                FieldRule::email("email"),
                FieldRule::required("subject", "Subject"),
                FieldRule::required("message", "Message"),
            ],
            tracks_progress: false,
            auto_reset_after: Some(CONTACT_RESET_DELAY),
            max_file_bytes: MAX_UPLOAD_BYTES,
        }
    }

    pub fn registration() -> Self {
        Self {
            kind: FormKind::Registration,
            fields: vec![
                FormField::text("firstName", "First Name *", false),
                FormField::text("lastName", "Last Name *", false),
                FormField::text("email", "Email Address *", false),
                FormField::text("phone", "Phone Number *", false),
                FormField::select("grade", "Grade Level *", GRADES),
                FormField::checkboxes("subjects", "Subjects of Interest *", SUBJECTS),
                FormField::select("preferredSchedule", "Preferred Schedule *", SCHEDULES),
                FormField::text("goals", "Learning Goals *", true).with_hint(
                    "What do you hope to achieve through tutoring? (e.g., improve grades, prepare for exams)",
                ),
                FormField::text("experience", "Previous Tutoring Experience", true)
                    .with_hint("Have you had tutoring before? What worked well? What didn't?"),
                FormField::text("message", "Additional Message", true)
                    .with_hint("Any questions or additional information you'd like to share?"),
            ],
            rules: vec![
                FieldRule::new("firstName", Rule::Required, "First name is required"),
                FieldRule::new("lastName", Rule::Required, "Last name is required"),
                FieldRule::email("email"),
                FieldRule::new("phone", Rule::Required, "Phone number is required"),
                FieldRule::new("grade", Rule::Selected, "Please select your grade level"),
                FieldRule::new(
                    "subjects",
                    Rule::AtLeastOne,
                    "Please select at least one subject",
                ),
                FieldRule::new(
                    "preferredSchedule",
                    Rule::Selected,
                    "Please select your preferred schedule",
                ),
                FieldRule::new(
                    "goals",
                    Rule::Required,
                    "Please tell us about your learning goals",
                ),
            ],
            tracks_progress: false,
            auto_reset_after: None,
            max_file_bytes: MAX_UPLOAD_BYTES,
        }
    }

    pub fn video_upload() -> Self {
        Self {
            kind: FormKind::VideoUpload,
            fields: vec![
                FormField::file(FILE_FIELD, "Video File *")
                    .with_hint("Path to an MP4, AVI, MOV or WMV file (max 100MB), then Enter"),
                FormField::text("title", "Video Title *", false)
                    .with_hint("e.g., Introduction to Quadratic Equations"),
                FormField::text("description", "Description *", true)
                    .with_hint("Describe what students will learn from this video..."),
                FormField::select("subject", "Subject *", SUBJECTS),
                FormField::select("level", "Level *", UPLOAD_LEVELS),
                FormField::text("duration", "Duration (optional)", false).with_hint("e.g., 15:30"),
                FormField::text("tags", "Tags (optional)", false)
                    .with_hint("e.g., algebra, equations, math basics"),
            ],
            rules: vec![
                FieldRule::new(FILE_FIELD, Rule::FileRequired, "Video file is required"),
                FieldRule::required("title", "Title"),
                FieldRule::required("description", "Description"),
                FieldRule::new("subject", Rule::Selected, "Subject is required"),
                FieldRule::new("level", Rule::Selected, "Level is required"),
            ],
            tracks_progress: true,
            auto_reset_after: None,
            max_file_bytes: MAX_UPLOAD_BYTES,
        }
    }

    /// Override the post-submit reset delay (forms that auto-reset only)
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        if self.auto_reset_after.is_some() {
            self.auto_reset_after = Some(delay);
        }
        self
    }

    pub fn with_max_file_bytes(mut self, bytes: u64) -> Self {
        self.max_file_bytes = bytes;
        self
    }

    /// Whether the form has a file picker
    pub fn accepts_file(&self) -> bool {
        self.fields.iter().any(|f| f.name == FILE_FIELD)
    }

    /// Field names that carry a validation rule
    #[cfg(test)]
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.field)
    }
}
