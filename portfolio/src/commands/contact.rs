use std::io::IsTerminal;

use anyhow::Context;
use clap::Args;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;
use portfolio_config::Config;
use portfolio_content::CATALOG;
use portfolio_core_contact_contracts::{ContactNotificationService, ContactService};
use portfolio_core_contact_impl::controller::{ContactFormController, ContactSubmitError};
use portfolio_models::contact::ContactField;

use crate::{environment::Environment, notification::TerminalNotificationService};

#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Your name
    #[arg(long)]
    name: Option<String>,
    /// Your email address
    #[arg(long)]
    email: Option<String>,
    /// Subject of the message
    #[arg(long)]
    subject: Option<String>,
    /// The message (at least 10 characters)
    #[arg(long)]
    message: Option<String>,
    /// Fail instead of prompting for missing or invalid values
    #[arg(long)]
    no_interactive: bool,
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let environment = Environment::new(&config)?;
        let colored = std::io::stderr().is_terminal();
        let mut form = environment.contact_form(TerminalNotificationService::new(colored));

        let values = [
            (ContactField::Name, self.name),
            (ContactField::Email, self.email),
            (ContactField::Subject, self.subject),
            (ContactField::Message, self.message),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.update_field(field, value);
            }
        }

        if self.no_interactive {
            run(&mut form, &mut NonInteractive).await
        } else {
            run(&mut form, &mut Interactive { colored }).await
        }
    }
}

/// Where new values for the contact form come from.
pub trait Prompt {
    /// Asks for a new value of `field`. Returns `None` if nobody can be asked.
    fn input(&mut self, field: ContactField, current: &str) -> anyhow::Result<Option<String>>;

    /// Shows the validation error of a field.
    fn show_error(&mut self, field: ContactField, error: &str);

    /// Asks whether a failed submission should be retried.
    fn retry(&mut self) -> anyhow::Result<bool>;
}

/// Fills in the missing fields and submits the form until it has been sent or
/// the user gives up. Only fields with errors are asked for again.
pub async fn run<Contact, Notify>(
    form: &mut ContactFormController<Contact, Notify>,
    prompt: &mut impl Prompt,
) -> anyhow::Result<()>
where
    Contact: ContactService,
    Notify: ContactNotificationService,
{
    for field in ContactField::ALL {
        if form.form().get(field).is_empty() {
            if let Some(value) = prompt.input(field, "")? {
                form.update_field(field, value);
            }
        }
    }

    loop {
        match form.submit().await {
            Ok(()) => return Ok(()),
            Err(ContactSubmitError::Invalid(errors)) => {
                for (field, err) in errors.iter() {
                    prompt.show_error(field, &err.to_string());
                    let current = form.form().get(field).to_owned();
                    match prompt.input(field, &current)? {
                        Some(value) => form.update_field(field, value),
                        None => anyhow::bail!("Invalid contact form: {errors}"),
                    }
                }
            }
            Err(ContactSubmitError::Send(err)) => {
                if prompt.retry()? {
                    continue;
                }
                let fallback = CATALOG.profile.email().unwrap_or_default();
                return Err(err)
                    .with_context(|| format!("Failed to send message, please write to {fallback}"));
            }
            Err(
                err @ (ContactSubmitError::AlreadySubmitting | ContactSubmitError::NotSubmitting),
            ) => return Err(err.into()),
        }
    }
}

struct Interactive {
    colored: bool,
}

impl Prompt for Interactive {
    fn input(&mut self, field: ContactField, current: &str) -> anyhow::Result<Option<String>> {
        let value = Input::<String>::new()
            .with_prompt(format!("{} (e.g. {})", field.label(), field.placeholder()))
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }

    fn show_error(&mut self, field: ContactField, error: &str) {
        let line = format!("{}: {error}", field.label());
        if self.colored {
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {line}");
        }
    }

    fn retry(&mut self) -> anyhow::Result<bool> {
        Confirm::new()
            .with_prompt("Try again?")
            .default(true)
            .interact()
            .map_err(Into::into)
    }
}

struct NonInteractive;

impl Prompt for NonInteractive {
    fn input(&mut self, _field: ContactField, _current: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn show_error(&mut self, field: ContactField, error: &str) {
        eprintln!("{}: {error}", field.label());
    }

    fn retry(&mut self) -> anyhow::Result<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use portfolio_core_contact_contracts::{
        ContactSendMessageError, MockContactNotificationService, MockContactService,
    };
    use portfolio_models::{
        contact::{ContactForm, ContactMessage, ContactMessageAuthor, SubmissionStatus},
        notification::Notification,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Scripted {
        inputs: VecDeque<String>,
        retries: VecDeque<bool>,
        asked: Vec<ContactField>,
        errors: Vec<String>,
    }

    impl Prompt for Scripted {
        fn input(&mut self, field: ContactField, _current: &str) -> anyhow::Result<Option<String>> {
            self.asked.push(field);
            Ok(self.inputs.pop_front())
        }

        fn show_error(&mut self, _field: ContactField, error: &str) {
            self.errors.push(error.into());
        }

        fn retry(&mut self) -> anyhow::Result<bool> {
            Ok(self.retries.pop_front().unwrap_or(false))
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            author: ContactMessageAuthor {
                name: "Max Mustermann".into(),
                email: "max@example.com".into(),
            },
            subject: "Project Discussion".into(),
            content: "Let's build a payment gateway.".into(),
        }
    }

    fn fill(
        form: &mut ContactFormController<MockContactService, MockContactNotificationService>,
        email: &str,
    ) {
        form.update_field(ContactField::Name, "Max Mustermann");
        form.update_field(ContactField::Email, email);
        form.update_field(ContactField::Subject, "Project Discussion");
        form.update_field(ContactField::Message, "Let's build a payment gateway.");
    }

    #[tokio::test]
    async fn prompts_missing_fields() {
        // Arrange
        let contact = MockContactService::new().with_send_message(message(), Ok(()));
        let notify =
            MockContactNotificationService::new().with_notify(Notification::message_sent());
        let mut form = ContactFormController::new(contact, notify);
        form.update_field(ContactField::Name, "Max Mustermann");
        form.update_field(ContactField::Email, "max@example.com");

        let mut prompt = Scripted {
            inputs: [
                "Project Discussion".into(),
                "Let's build a payment gateway.".into(),
            ]
            .into(),
            ..Default::default()
        };

        // Act
        let result = run(&mut form, &mut prompt).await;

        // Assert
        result.unwrap();
        assert_eq!(prompt.asked, [ContactField::Subject, ContactField::Message]);
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.form(), &ContactForm::default());
    }

    #[tokio::test]
    async fn reprompts_only_invalid_fields() {
        // Arrange
        let contact = MockContactService::new().with_send_message(message(), Ok(()));
        let notify =
            MockContactNotificationService::new().with_notify(Notification::message_sent());
        let mut form = ContactFormController::new(contact, notify);
        fill(&mut form, "max@example");

        let mut prompt = Scripted {
            inputs: ["max@example.com".into()].into(),
            ..Default::default()
        };

        // Act
        let result = run(&mut form, &mut prompt).await;

        // Assert
        result.unwrap();
        assert_eq!(prompt.asked, [ContactField::Email]);
        assert_eq!(prompt.errors, ["Please enter a valid email address"]);
    }

    #[tokio::test]
    async fn non_interactive_invalid() {
        // Arrange
        let mut form = ContactFormController::new(
            MockContactService::new(),
            MockContactNotificationService::new(),
        );
        fill(&mut form, "not-an-email");

        // Act
        let result = run(&mut form, &mut NonInteractive).await;

        // Assert
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Please enter a valid email address"), "{err}");
        assert_eq!(form.form().email, "not-an-email");
    }

    #[tokio::test]
    async fn retry_after_failure() {
        // Arrange
        let calls = AtomicUsize::new(0);
        let mut contact = MockContactService::new();
        contact
            .expect_send_message()
            .times(2)
            .returning(move |_| {
                let result = match calls.fetch_add(1, Ordering::SeqCst) {
                    0 => Err(ContactSendMessageError::Delivery(anyhow::anyhow!(
                        "connection reset"
                    ))),
                    _ => Ok(()),
                };
                Box::pin(std::future::ready(result))
            });
        let mut notify = MockContactNotificationService::new();
        notify.expect_notify().times(2).return_const(());

        let mut form = ContactFormController::new(contact, notify);
        fill(&mut form, "max@example.com");

        let mut prompt = Scripted {
            retries: [true].into(),
            ..Default::default()
        };

        // Act
        let result = run(&mut form, &mut prompt).await;

        // Assert
        result.unwrap();
        assert!(prompt.asked.is_empty());
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn give_up_after_failure() {
        // Arrange
        let contact = MockContactService::new().with_send_message(
            message(),
            Err(ContactSendMessageError::Delivery(anyhow::anyhow!(
                "connection reset"
            ))),
        );
        let notify =
            MockContactNotificationService::new().with_notify(Notification::message_failed());
        let mut form = ContactFormController::new(contact, notify);
        fill(&mut form, "max@example.com");

        // Act
        let result = run(&mut form, &mut Scripted::default()).await;

        // Assert
        let err = result.unwrap_err().to_string();
        assert!(err.contains("melakesisay@gmail.com"), "{err}");
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.form().email, "max@example.com");
    }
}
