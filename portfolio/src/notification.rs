use owo_colors::OwoColorize;
use portfolio_core_contact_contracts::ContactNotificationService;
use portfolio_models::notification::{Notification, NotificationVariant};

/// Prints notifications to stderr.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotificationService {
    colored: bool,
}

impl TerminalNotificationService {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn render(&self, notification: &Notification) -> String {
        let icon = match notification.variant {
            NotificationVariant::Default => "✔",
            NotificationVariant::Destructive => "✖",
        };
        let headline = format!("{icon} {}", notification.title);

        if !self.colored {
            return format!("{headline}\n  {}", notification.description);
        }

        let headline = match notification.variant {
            NotificationVariant::Default => headline.green().bold().to_string(),
            NotificationVariant::Destructive => headline.red().bold().to_string(),
        };
        format!("{headline}\n  {}", notification.description.dimmed())
    }
}

impl ContactNotificationService for TerminalNotificationService {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", self.render(&notification));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_plain() {
        let sut = TerminalNotificationService::new(false);

        assert_eq!(
            sut.render(&Notification::message_sent()),
            "✔ Message sent successfully!\n  Thank you for your message. I'll get back to you soon."
        );
        assert_eq!(
            sut.render(&Notification::message_failed()),
            "✖ Failed to send message\n  Please try again or contact me directly via email."
        );
    }

    #[test]
    fn render_colored() {
        let sut = TerminalNotificationService::new(true);

        let output = sut.render(&Notification::message_failed());

        assert!(output.contains("\x1b["));
        assert!(output.contains("Failed to send message"));
    }
}
