//! # Chat Commands
//!
//! The floating assistant. Replies arrive on their own after the
//! configured delay; the front end re-reads `get_messages`.

use kirana_core::chat::ChatMessage;
use tracing::debug;

use crate::state::ChatWindow;

/// Sends a message to the assistant.
///
/// Returns the user's message as appended, or `None` for blank input.
/// The bot answer is appended later by a background task.
pub fn send_message(chat: &ChatWindow, text: &str) -> Option<ChatMessage> {
    debug!(len = text.len(), "send_message command");
    chat.submit(text).map(|(message, _reply)| message)
}

/// The conversation so far, greeting first.
pub fn get_messages(chat: &ChatWindow) -> Vec<ChatMessage> {
    chat.messages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kirana_core::chat::GREETING;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_reply_follows_after_delay() {
        let chat = ChatWindow::new(Duration::from_millis(1000));

        let sent = send_message(&chat, "how to view sales").unwrap();
        assert!(!sent.is_bot);
        assert_eq!(get_messages(&chat).len(), 2);

        tokio::time::sleep(Duration::from_millis(1001)).await;
        let messages = get_messages(&chat);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].text, GREETING);
        assert!(messages[2].is_bot);
        assert!(messages[2].text.starts_with("To view sales data"));
    }

    #[tokio::test]
    async fn test_blank_message_is_ignored() {
        let chat = ChatWindow::new(Duration::from_millis(10));
        assert!(send_message(&chat, "   ").is_none());
        assert_eq!(get_messages(&chat).len(), 1);
    }
}
