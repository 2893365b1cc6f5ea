//! Contact form submission.

use serde::{Deserialize, Serialize};

/// The four contact form fields, posted as-is to `/api/contact`.
///
/// Not stored anywhere: the client forwards it and discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Returns true when every field is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    /// Names of the fields that are empty after trimming, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
