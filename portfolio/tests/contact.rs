use std::sync::{Arc, Mutex};

use portfolio::environment::Environment;
use portfolio_config::DEFAULT_CONFIG_PATH;
use portfolio_core_contact_contracts::{ContactNotificationService, ContactSendMessageError};
use portfolio_core_contact_impl::controller::ContactSubmitError;
use portfolio_models::{
    contact::{ContactField, SubmissionStatus},
    notification::Notification,
};
use portfolio_testing::emailjs::{self, EmailJsCredentials, ReceivedEmail};
use portfolio_utils::assert_matches;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Default)]
struct RecordingNotificationService(Arc<Mutex<Vec<Notification>>>);

impl RecordingNotificationService {
    fn notifications(&self) -> Vec<Notification> {
        self.0.lock().unwrap().clone()
    }
}

impl ContactNotificationService for RecordingNotificationService {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

fn credentials() -> EmailJsCredentials {
    EmailJsCredentials {
        service_id: "service_portfolio".into(),
        template_id: "template_contact".into(),
        public_key: "public_portfolio".into(),
    }
}

async fn make_environment(public_key: Option<&str>) -> (Environment, Arc<emailjs::EmailJsState>) {
    let (endpoint, state) = emailjs::spawn(credentials()).await.unwrap();

    let mut overrides = vec![format!(
        r#"
        [emailjs]
        service_id = "service_portfolio"
        template_id = "template_contact"
        send_endpoint_override = "{endpoint}"
        "#
    )];
    if let Some(public_key) = public_key {
        overrides.push(format!(r#"emailjs.public_key = "{public_key}""#));
    }
    let overrides = overrides.iter().map(String::as_str).collect::<Vec<_>>();

    let config = portfolio_config::load_with_overrides(&[DEFAULT_CONFIG_PATH], &overrides).unwrap();
    (Environment::new(&config).unwrap(), state)
}

fn fill<N: ContactNotificationService>(form: &mut portfolio::environment::types::ContactForm<N>) {
    form.update_field(ContactField::Name, "Max Mustermann");
    form.update_field(ContactField::Email, "max@example.com");
    form.update_field(ContactField::Subject, "Project Discussion");
    form.update_field(ContactField::Message, "I'd like to integrate Telebirr.");
}

#[tokio::test]
async fn submit_ok() {
    // Arrange
    let (environment, state) = make_environment(Some("public_portfolio")).await;
    let notify = RecordingNotificationService::default();
    let mut form = environment.contact_form(notify.clone());
    fill(&mut form);

    // Act
    let result = form.submit().await;

    // Assert
    result.unwrap();
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.form().is_empty());
    assert_eq!(notify.notifications(), [Notification::message_sent()]);
    assert_eq!(
        state.received(),
        [ReceivedEmail {
            from_name: "Max Mustermann".into(),
            from_email: "max@example.com".into(),
            subject: "Project Discussion".into(),
            message: "I'd like to integrate Telebirr.".into(),
            to_name: "Melak Sisay".into(),
        }]
    );
}

#[tokio::test]
async fn submit_rejected() {
    // Arrange
    let (environment, state) = make_environment(Some("wrong_key")).await;
    let notify = RecordingNotificationService::default();
    let mut form = environment.contact_form(notify.clone());
    fill(&mut form);

    // Act
    let result = form.submit().await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSubmitError::Send(ContactSendMessageError::Delivery(_)))
    );
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.form().subject, "Project Discussion");
    assert_eq!(notify.notifications(), [Notification::message_failed()]);
    assert!(state.received().is_empty());
}

#[tokio::test]
async fn submit_not_configured() {
    // Arrange
    let (environment, state) = make_environment(None).await;
    let notify = RecordingNotificationService::default();
    let mut form = environment.contact_form(notify.clone());
    fill(&mut form);

    // Act
    let result = form.submit().await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSubmitError::Send(ContactSendMessageError::Configuration(_)))
    );
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(notify.notifications(), [Notification::message_failed()]);
    assert!(state.received().is_empty());
}
