//! `seya contact`: submit the contact form.
//!
//! Input is checked before anything is sent: every field must be filled
//! and the email must look like an address.

use std::io::Write;

use clap::Args;
use seya_core::{ContactSubmission, Email, EmailError};
use seya_storefront::Storefront;
use seya_storefront::backend::Backend;
use seya_storefront::config::StorefrontConfig;
use seya_storefront::contact::SubmissionState;
use thiserror::Error;

/// Errors that can occur during contact submission.
#[derive(Debug, Error)]
pub enum ContactError {
    /// One or more fields are empty.
    #[error("Missing field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The email address is malformed.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The backend did not accept the message.
    #[error("Message was not delivered")]
    NotDelivered,
}

#[derive(Debug, Clone, Args)]
pub struct ContactArgs {
    /// Sender name
    #[arg(short, long)]
    pub name: String,

    /// Sender email address
    #[arg(short, long)]
    pub email: String,

    /// Message subject
    #[arg(short, long)]
    pub subject: String,

    /// Message body
    #[arg(short, long)]
    pub message: String,
}

impl ContactArgs {
    /// Validate the input and turn it into a submission.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` or `InvalidEmail`.
    pub fn into_submission(self) -> Result<ContactSubmission, ContactError> {
        let mut submission = ContactSubmission {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        };

        let missing = submission.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        submission.email = Email::parse(&submission.email)?.into_inner();

        Ok(submission)
    }
}

/// Validate, submit and print the form status.
///
/// # Errors
///
/// Returns an error for invalid input, a failed submission, or output
/// failure.
pub async fn run(
    config: &StorefrontConfig,
    args: ContactArgs,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let submission = args.into_submission()?;
    let mut storefront = Storefront::from_config(config)?;
    submit(&mut storefront, submission, out).await?;
    Ok(())
}

async fn submit<B: Backend>(
    storefront: &mut Storefront<B>,
    submission: ContactSubmission,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = storefront.submit_contact(submission).await;
    if let Some(message) = state.status_message() {
        writeln!(out, "{message}")?;
    }

    if state == SubmissionState::Error {
        return Err(ContactError::NotDelivered.into());
    }
    Ok(())
}
