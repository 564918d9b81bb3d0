use portfolio_core_contact_impl::{controller::ContactFormController, ContactServiceImpl};
use portfolio_core_content_impl::ContentServiceImpl;
use portfolio_extern_impl::emailjs::EmailJsApiServiceImpl;

// API
pub type RestServer = portfolio_api_rest::RestServer<Content>;

// Extern
pub type EmailJsApi = EmailJsApiServiceImpl;

// Core
pub type Contact = ContactServiceImpl<EmailJsApi>;
pub type ContactForm<Notify> = ContactFormController<Contact, Notify>;
pub type Content = ContentServiceImpl;
