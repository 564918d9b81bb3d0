use std::{fmt, future::Future};

use portfolio_models::{contact::ContactMessage, notification::Notification};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Delivers a validated message to the site owner.
    ///
    /// Exactly one delivery attempt is made per call.
    fn send_message(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = Result<(), ContactSendMessageError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error(transparent)]
    Configuration(#[from] MissingDeliveryConfig),
    #[error("Failed to deliver message.")]
    Delivery(#[source] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Delivery is not configured: {0} is missing")]
pub struct MissingDeliveryConfig(pub DeliveryConfigKey);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryConfigKey {
    ServiceId,
    TemplateId,
    PublicKey,
}

impl DeliveryConfigKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ServiceId => "emailjs.service_id",
            Self::TemplateId => "emailjs.template_id",
            Self::PublicKey => "emailjs.public_key",
        }
    }
}

impl fmt::Display for DeliveryConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shows transient notifications (toasts) to the user.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactNotificationService: Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_send_message(
        mut self,
        message: ContactMessage,
        result: Result<(), ContactSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

#[cfg(feature = "mock")]
impl MockContactNotificationService {
    pub fn with_notify(mut self, notification: Notification) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_const(());
        self
    }
}
