//! Contact form submission.
//!
//! ```text
//! Idle ──submit──▶ Loading ──2xx──────────▶ Success (fields cleared)
//!                     │
//!                     └──error/non-2xx──▶ Error   (fields kept)
//! Success | Error ──submit──▶ Loading
//! ```
//!
//! Field presence is the input layer's concern; the form posts whatever it
//! holds.

use seya_core::ContactSubmission;
use tracing::{info, instrument, warn};

use crate::backend::Backend;

/// Where the form is in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionState {
    /// Label of the submit control.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Loading => "Envoi…",
            Self::Idle | Self::Success | Self::Error => "Envoyer",
        }
    }

    /// Status line under the form, if any.
    #[must_use]
    pub const fn status_message(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("Message envoyé. Merci !"),
            Self::Error => Some("Une erreur est survenue."),
            Self::Idle | Self::Loading => None,
        }
    }
}

type Listener = Box<dyn FnMut(SubmissionState)>;

/// The contact form: its current field values and submission state.
#[derive(Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    state: SubmissionState,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("fields", &self.fields)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub const fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    /// Mutable access for the input layer.
    pub const fn fields_mut(&mut self) -> &mut ContactSubmission {
        &mut self.fields
    }

    /// Replace every field at once.
    pub fn fill(&mut self, fields: ContactSubmission) {
        self.fields = fields;
    }

    /// False while a submission is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state != SubmissionState::Loading
    }

    /// Register a callback run on every state transition.
    pub fn on_transition(&mut self, listener: impl FnMut(SubmissionState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Post the current fields and move through the state machine.
    ///
    /// Returns the final state. A call made while already loading is
    /// ignored and returns [`SubmissionState::Loading`].
    #[instrument(skip_all)]
    pub async fn submit<B: Backend + ?Sized>(&mut self, backend: &B) -> SubmissionState {
        if !self.can_submit() {
            return self.state;
        }

        self.transition(SubmissionState::Loading);

        match backend.submit_contact(&self.fields).await {
            Ok(()) => {
                info!("Contact message sent");
                self.fields = ContactSubmission::default();
                self.transition(SubmissionState::Success);
            }
            Err(e) => {
                warn!(error = %e, "Contact submission failed");
                self.transition(SubmissionState::Error);
            }
        }

        self.state
    }

    fn transition(&mut self, next: SubmissionState) {
        self.state = next;
        for listener in &mut self.listeners {
            listener(next);
        }
    }
}

#[cfg(test)]
impl ContactForm {
    /// A form already sitting in `state`.
    pub(crate) fn in_state(state: SubmissionState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }
}
