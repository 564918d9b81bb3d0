use std::sync::Arc;

use anyhow::Context;
use portfolio_extern_contracts::emailjs::{
    EmailJsApiService, EmailJsSendRequest, EmailJsTemplateParams,
};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct EmailJsApiServiceImpl {
    config: EmailJsApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct EmailJsApiServiceConfig {
    send_endpoint: Arc<Url>,
}

impl EmailJsApiServiceConfig {
    pub fn new(send_endpoint_override: Option<Url>) -> anyhow::Result<Self> {
        let send_endpoint = match send_endpoint_override {
            Some(url) => url,
            None => SEND_ENDPOINT.parse()?,
        };
        Ok(Self {
            send_endpoint: send_endpoint.into(),
        })
    }

    pub fn send_endpoint(&self) -> &Url {
        &self.send_endpoint
    }
}

impl EmailJsApiServiceImpl {
    pub fn new(config: EmailJsApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

impl EmailJsApiService for EmailJsApiServiceImpl {
    async fn send(&self, request: EmailJsSendRequest) -> anyhow::Result<()> {
        debug!(
            endpoint = %self.config.send_endpoint,
            service_id = %request.service_id,
            template_id = %request.template_id,
            "Sending email via EmailJS"
        );

        let response = self
            .client
            .post((*self.config.send_endpoint).clone())
            .json(&SendRequest::from(&request))
            .send()
            .await
            .context("Failed to send request to EmailJS")?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|err| format!("<failed to read response body: {err}>"));
        anyhow::bail!("EmailJS rejected the request with status {status}: {body}")
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_name: &'a str,
}

impl<'a> From<&'a EmailJsSendRequest> for SendRequest<'a> {
    fn from(value: &'a EmailJsSendRequest) -> Self {
        Self {
            service_id: &value.service_id,
            template_id: &value.template_id,
            user_id: &value.public_key,
            template_params: (&value.template_params).into(),
        }
    }
}

impl<'a> From<&'a EmailJsTemplateParams> for TemplateParams<'a> {
    fn from(value: &'a EmailJsTemplateParams) -> Self {
        Self {
            from_name: &value.from_name,
            from_email: &value.from_email,
            subject: &value.subject,
            message: &value.message,
            to_name: &value.to_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        let config = EmailJsApiServiceConfig::new(None).unwrap();
        assert_eq!(config.send_endpoint().as_str(), SEND_ENDPOINT);
    }
}
