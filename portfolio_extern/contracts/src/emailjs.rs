use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailJsApiService: Send + Sync + 'static {
    /// Renders the template of the request and sends the resulting email.
    ///
    /// Fails if EmailJS cannot be reached or rejects the request.
    fn send(&self, request: EmailJsSendRequest) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsSendRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub template_params: EmailJsTemplateParams,
}

/// The variables referenced by the contact email template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsTemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

#[cfg(feature = "mock")]
impl MockEmailJsApiService {
    pub fn with_send(mut self, request: EmailJsSendRequest, result: anyhow::Result<()>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
