//! Type definitions for the provider directory
//!
//! These mirror the shape of the bundled `providers.json` dataset.

use serde::{Deserialize, Serialize};

/// Specialization categories used for filtering the directory.
///
/// The set is fixed; every provider record carries exactly one of these
/// labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Dyslexia Support")]
    DyslexiaSupport,
    #[serde(rename = "ADHD Coaching")]
    AdhdCoaching,
    #[serde(rename = "Autism Therapy")]
    AutismTherapy,
    #[serde(rename = "Speech Therapy")]
    SpeechTherapy,
    #[serde(rename = "Occupational Therapy")]
    OccupationalTherapy,
    #[serde(rename = "Tutoring")]
    Tutoring,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::DyslexiaSupport => "Dyslexia Support",
            Category::AdhdCoaching => "ADHD Coaching",
            Category::AutismTherapy => "Autism Therapy",
            Category::SpeechTherapy => "Speech Therapy",
            Category::OccupationalTherapy => "Occupational Therapy",
            Category::Tutoring => "Tutoring",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::DyslexiaSupport => "\u{1F4D6}",     // 📖
            Category::AdhdCoaching => "\u{1F3AF}",        // 🎯
            Category::AutismTherapy => "\u{1F9E9}",       // 🧩
            Category::SpeechTherapy => "\u{1F5E3}",       // 🗣
            Category::OccupationalTherapy => "\u{1FA7A}", // 🩺
            Category::Tutoring => "\u{1F4DA}",            // 📚
        }
    }

    pub fn variants() -> &'static [Category] {
        &[
            Category::DyslexiaSupport,
            Category::AdhdCoaching,
            Category::AutismTherapy,
            Category::SpeechTherapy,
            Category::OccupationalTherapy,
            Category::Tutoring,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A listed learning-support specialist or organization.
///
/// Records are immutable: the whole dataset is bundled with the app and
/// loaded wholesale at startup. There is no create/update/delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub specialization: String,
    pub location: String,
    pub description: String,
    pub short_description: String,
    pub long_description: String,
    pub rating: f64,
    pub services: Vec<String>,
    pub contact_email: Option<String>,
    pub phone_number: Option<String>,
    pub experience: Option<String>,
    pub age_groups: Option<Vec<String>>,
    pub availability: Option<String>,
    pub languages: Option<Vec<String>>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_displays_its_label() {
        for category in Category::variants() {
            assert_eq!(category.to_string(), category.label());
        }
    }

    #[test]
    fn category_serializes_to_its_label() {
        for category in Category::variants() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }
}
