use portfolio_core_contact_contracts::{
    ContactNotificationService, ContactSendMessageError, ContactService,
};
use portfolio_models::{
    contact::{ContactField, ContactForm, ContactMessage, SubmissionStatus, ValidationErrors},
    notification::Notification,
};
use thiserror::Error;
use tracing::{error, info};

/// Owns the state of the contact form and drives its submission.
///
/// ```text
/// idle --submit(valid)--> submitting --ok--> success --edit--> idle
///                                    --err-> error   --edit--> idle
/// idle --submit(invalid)--> idle
/// ```
#[derive(Debug)]
pub struct ContactFormController<Contact, Notify> {
    contact: Contact,
    notify: Notify,
    form: ContactForm,
    errors: ValidationErrors,
    status: SubmissionStatus,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("A message is already being sent.")]
    AlreadySubmitting,
    #[error("No message is being sent.")]
    NotSubmitting,
    #[error("The form contains invalid values: {0}")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Send(#[from] ContactSendMessageError),
}

impl<Contact, Notify> ContactFormController<Contact, Notify> {
    pub fn new(contact: Contact, notify: Notify) -> Self {
        Self {
            contact,
            notify,
            form: ContactForm::default(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Sets the value of a field and clears its error without validating the
    /// new value. A finished submission goes back to idle.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value.into());
        self.errors.remove(field);
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validates the form and, if it is valid, enters the submitting state and
    /// returns the message to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactSubmitError> {
        if self.status.is_submitting() {
            return Err(ContactSubmitError::AlreadySubmitting);
        }

        match self.form.to_message() {
            Ok(message) => {
                self.errors = ValidationErrors::default();
                self.status = SubmissionStatus::Submitting;
                Ok(message)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.status = SubmissionStatus::Idle;
                Err(ContactSubmitError::Invalid(errors))
            }
        }
    }
}

impl<Contact, Notify> ContactFormController<Contact, Notify>
where
    Contact: ContactService,
    Notify: ContactNotificationService,
{
    /// Applies the outcome of a delivery started by [`Self::begin_submit`].
    /// Outside of a submission the form is left untouched.
    pub fn finish_submit(
        &mut self,
        result: Result<(), ContactSendMessageError>,
    ) -> Result<(), ContactSubmitError> {
        if !self.status.is_submitting() {
            return Err(ContactSubmitError::NotSubmitting);
        }

        match result {
            Ok(()) => {
                info!("Contact form submitted");
                self.status = SubmissionStatus::Success;
                self.form = ContactForm::default();
                self.errors = ValidationErrors::default();
                self.notify.notify(Notification::message_sent());
                Ok(())
            }
            Err(err) => {
                match &err {
                    ContactSendMessageError::Configuration(missing) => {
                        error!("Contact form is not configured: {missing}")
                    }
                    ContactSendMessageError::Delivery(source) => {
                        error!("Failed to send contact message: {source:#}")
                    }
                }
                self.status = SubmissionStatus::Error;
                self.notify.notify(Notification::message_failed());
                Err(err.into())
            }
        }
    }

    /// Validates the form and delivers it in a single attempt.
    ///
    /// Invalid input never reaches the contact service. The status is never
    /// left at [`SubmissionStatus::Submitting`] once the delivery finished.
    pub async fn submit(&mut self) -> Result<(), ContactSubmitError> {
        let message = self.begin_submit()?;
        let result = self.contact.send_message(message).await;
        self.finish_submit(result)
    }
}
