use portfolio_api_rest::RestServerConfig;
use portfolio_config::Config;
use portfolio_content::CATALOG;
use portfolio_core_contact_contracts::ContactNotificationService;
use portfolio_core_contact_impl::{controller::ContactFormController, ContactServiceConfig};
use portfolio_extern_impl::{emailjs::EmailJsApiServiceConfig, http::HttpClient};

use self::types::{Contact, ContactForm, Content, EmailJsApi, RestServer};

pub mod types;

/// Builds the services of the application from the configuration.
#[derive(Debug, Clone)]
pub struct Environment {
    rest_server_config: RestServerConfig,
    contact: Contact,
    content: Content,
}

impl Environment {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            allowed_origins: config.http.allowed_origins.clone(),
        };

        // Extern
        let http_client = HttpClient::new(config.emailjs.timeout.map(Into::into))?;
        let emailjs_api_service_config =
            EmailJsApiServiceConfig::new(config.emailjs.send_endpoint_override.clone())?;
        let emailjs_api = EmailJsApi::new(emailjs_api_service_config, http_client);

        // Core
        let contact_service_config = ContactServiceConfig {
            recipient_name: config.contact.recipient_name.as_str().into(),
            service_id: config.emailjs.service_id.as_deref().map(Into::into),
            template_id: config.emailjs.template_id.as_deref().map(Into::into),
            public_key: config.emailjs.public_key.as_deref().map(Into::into),
        };
        let contact = Contact::new(emailjs_api, contact_service_config);
        let content = Content::new(*CATALOG);

        Ok(Self {
            rest_server_config,
            contact,
            content,
        })
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer::new(self.content, self.rest_server_config.clone())
    }

    pub fn content(&self) -> Content {
        self.content
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn contact_form<Notify>(&self, notify: Notify) -> ContactForm<Notify>
    where
        Notify: ContactNotificationService,
    {
        ContactFormController::new(self.contact.clone(), notify)
    }
}
