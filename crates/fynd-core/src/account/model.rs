//! User document and account models.

use super::Gender;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A user document as stored in the `users` collection.
///
/// Every field is optional on read: documents created at first sign-in
/// carry only name, email, a null gender and a placeholder avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDocument {
    pub name: Option<String>,
    pub email: Option<String>,
    /// `d/m/yyyy`
    pub dob: Option<String>,
    /// `"Male"`, `"Female"` or null
    pub gender: Option<String>,
    pub language: Option<String>,
    pub avatar: Option<String>,
    pub interests: Vec<String>,
}

impl UserDocument {
    /// True when the one-time profile completion flow still has to run.
    pub fn needs_completion(&self) -> bool {
        self.gender
            .as_deref()
            .is_none_or(|gender| gender.trim().is_empty())
    }
}

/// A partial update: only fields set to `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<Gender>,
    pub language: Option<String>,
    pub avatar: Option<String>,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = Some(dob.into());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Applies the set fields to `document`, leaving the rest untouched.
    pub fn apply_to(&self, document: &mut UserDocument) {
        if let Some(name) = &self.name {
            document.name = Some(name.clone());
        }
        if let Some(dob) = &self.dob {
            document.dob = Some(dob.clone());
        }
        if let Some(gender) = self.gender {
            document.gender = Some(gender.as_str().to_string());
        }
        if let Some(language) = &self.language {
            document.language = Some(language.clone());
        }
        if let Some(avatar) = &self.avatar {
            document.avatar = Some(avatar.clone());
        }
    }
}

/// Typed view of a stored user.
///
/// Missing text fields become empty strings; an unrecognised gender becomes
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub dob: String,
    pub gender: Option<Gender>,
    pub language: String,
    pub interests: BTreeSet<String>,
    pub avatar: String,
}

impl UserAccount {
    pub fn from_document(id: impl Into<String>, document: &UserDocument) -> Self {
        Self {
            id: id.into(),
            name: document.name.clone().unwrap_or_default(),
            dob: document.dob.clone().unwrap_or_default(),
            gender: document.gender.as_deref().and_then(Gender::parse),
            language: document.language.clone().unwrap_or_default(),
            interests: document.interests.iter().cloned().collect(),
            avatar: document.avatar.clone().unwrap_or_default(),
        }
    }

    /// Number of interest tags shared with `other`.
    pub fn shared_interests(&self, other: &UserAccount) -> usize {
        self.interests.intersection(&other.interests).count()
    }
}
