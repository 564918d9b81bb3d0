use serde::Serialize;

/// A transient toast reporting the outcome of a user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

impl Notification {
    pub fn message_sent() -> Self {
        Self {
            title: "Message sent successfully!".into(),
            description: "Thank you for your message. I'll get back to you soon.".into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn message_failed() -> Self {
        Self {
            title: "Failed to send message".into(),
            description: "Please try again or contact me directly via email.".into(),
            variant: NotificationVariant::Destructive,
        }
    }
}
