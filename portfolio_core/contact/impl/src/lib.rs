use std::sync::Arc;

use portfolio_core_contact_contracts::{
    ContactSendMessageError, ContactService, DeliveryConfigKey, MissingDeliveryConfig,
};
use portfolio_extern_contracts::emailjs::{
    EmailJsApiService, EmailJsSendRequest, EmailJsTemplateParams,
};
use portfolio_models::contact::ContactMessage;
use tracing::{debug, info};

pub mod controller;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<EmailJsApi> {
    emailjs_api: EmailJsApi,
    config: ContactServiceConfig,
}

/// Delivery settings. The EmailJS credentials are looked up on every send, so
/// a missing value only fails the submission that needs it.
#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub recipient_name: Arc<str>,
    pub service_id: Option<Arc<str>>,
    pub template_id: Option<Arc<str>>,
    pub public_key: Option<Arc<str>>,
}

impl ContactServiceConfig {
    /// Returns the first missing or blank credential, if any.
    pub fn missing(&self) -> Option<DeliveryConfigKey> {
        [
            (DeliveryConfigKey::ServiceId, &self.service_id),
            (DeliveryConfigKey::TemplateId, &self.template_id),
            (DeliveryConfigKey::PublicKey, &self.public_key),
        ]
        .into_iter()
        .find(|&(key, value)| require(value, key).is_err())
        .map(|(key, _)| key)
    }
}

impl<EmailJsApi> ContactServiceImpl<EmailJsApi> {
    pub fn new(emailjs_api: EmailJsApi, config: ContactServiceConfig) -> Self {
        Self {
            emailjs_api,
            config,
        }
    }

    pub fn config(&self) -> &ContactServiceConfig {
        &self.config
    }
}

impl<EmailJsApi> ContactService for ContactServiceImpl<EmailJsApi>
where
    EmailJsApi: EmailJsApiService,
{
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactSendMessageError> {
        let service_id = require(&self.config.service_id, DeliveryConfigKey::ServiceId)?;
        let template_id = require(&self.config.template_id, DeliveryConfigKey::TemplateId)?;
        let public_key = require(&self.config.public_key, DeliveryConfigKey::PublicKey)?;

        debug!(subject = %message.subject, "Sending contact message");

        let request = EmailJsSendRequest {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            template_params: EmailJsTemplateParams {
                from_name: message.author.name,
                from_email: message.author.email,
                subject: message.subject,
                message: message.content,
                to_name: self.config.recipient_name.to_string(),
            },
        };

        self.emailjs_api
            .send(request)
            .await
            .map_err(ContactSendMessageError::Delivery)?;

        info!("Contact message delivered");

        Ok(())
    }
}

fn require(
    value: &Option<Arc<str>>,
    key: DeliveryConfigKey,
) -> Result<&str, MissingDeliveryConfig> {
    value
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .ok_or(MissingDeliveryConfig(key))
}

#[cfg(test)]
mod tests {
    use portfolio_extern_contracts::emailjs::MockEmailJsApiService;
    use portfolio_models::contact::ContactMessageAuthor;
    use portfolio_utils::assert_matches;

    use super::*;

    fn make_config() -> ContactServiceConfig {
        ContactServiceConfig {
            recipient_name: "Melak Sisay".into(),
            service_id: Some("service_test".into()),
            template_id: Some("template_test".into()),
            public_key: Some("public_test".into()),
        }
    }

    fn make_message() -> ContactMessage {
        ContactMessage {
            author: ContactMessageAuthor {
                name: "Max Mustermann".into(),
                email: "max.mustermann@example.de".into(),
            },
            subject: "Project Discussion".into(),
            content: "Hello World! Let's talk.".into(),
        }
    }

    fn make_request() -> EmailJsSendRequest {
        EmailJsSendRequest {
            service_id: "service_test".into(),
            template_id: "template_test".into(),
            public_key: "public_test".into(),
            template_params: EmailJsTemplateParams {
                from_name: "Max Mustermann".into(),
                from_email: "max.mustermann@example.de".into(),
                subject: "Project Discussion".into(),
                message: "Hello World! Let's talk.".into(),
                to_name: "Melak Sisay".into(),
            },
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let emailjs_api = MockEmailJsApiService::new().with_send(make_request(), Ok(()));

        let sut = ContactServiceImpl::new(emailjs_api, make_config());

        // Act
        let result = sut.send_message(make_message()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn delivery_failed() {
        // Arrange
        let emailjs_api = MockEmailJsApiService::new().with_send(
            make_request(),
            Err(anyhow::anyhow!("EmailJS rejected the request with status 400")),
        );

        let sut = ContactServiceImpl::new(emailjs_api, make_config());

        // Act
        let result = sut.send_message(make_message()).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSendMessageError::Delivery(err)) if err.to_string().contains("400")
        );
    }

    #[tokio::test]
    async fn missing_config() {
        for key in [
            DeliveryConfigKey::ServiceId,
            DeliveryConfigKey::TemplateId,
            DeliveryConfigKey::PublicKey,
        ] {
            for value in [None, Some(""), Some("  ")] {
                // Arrange
                let mut config = make_config();
                let slot = match key {
                    DeliveryConfigKey::ServiceId => &mut config.service_id,
                    DeliveryConfigKey::TemplateId => &mut config.template_id,
                    DeliveryConfigKey::PublicKey => &mut config.public_key,
                };
                *slot = value.map(Into::into);
                assert_eq!(config.missing(), Some(key));

                let sut = ContactServiceImpl::new(MockEmailJsApiService::new(), config);

                // Act
                let result = sut.send_message(make_message()).await;

                // Assert
                assert_matches!(
                    result,
                    Err(ContactSendMessageError::Configuration(MissingDeliveryConfig(k))) if *k == key
                );
            }
        }
    }

    #[test]
    fn complete_config() {
        assert_eq!(make_config().missing(), None);
    }
}
