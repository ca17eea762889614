//! # Chat Window
//!
//! The floating assistant. A user message is appended at once; the bot
//! answer arrives after a short delay from a spawned task.
//!
//! ```text
//! submit("how to add product")
//!   ├── log.push_user(..)                    immediately
//!   └── spawn ── sleep(reply_delay) ── Weak::upgrade()
//!                                        ├── Some(log) → push_bot(ChatRules::respond(..))
//!                                        └── None      → window gone, reply dropped
//! ```

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use chrono::Utc;
use kirana_core::chat::{ChatLog, ChatMessage, ChatRules};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Managed chat window.
#[derive(Debug)]
pub struct ChatWindow {
    log: Arc<Mutex<ChatLog>>,
    reply_delay: Duration,
}

impl ChatWindow {
    pub fn new(reply_delay: Duration) -> Self {
        ChatWindow {
            log: Arc::new(Mutex::new(ChatLog::new(Utc::now()))),
            reply_delay,
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.log
            .lock()
            .expect("chat log mutex poisoned")
            .messages()
            .to_vec()
    }

    /// Appends the user's message and schedules the reply.
    ///
    /// Blank input is ignored: nothing is appended and no reply is
    /// scheduled. Must be called from inside a tokio runtime.
    pub fn submit(&self, text: &str) -> Option<(ChatMessage, JoinHandle<()>)> {
        let message = {
            let mut log = self.log.lock().expect("chat log mutex poisoned");
            log.push_user(text, Utc::now())?.clone()
        };

        debug!(rule = ?ChatRules::matched_rule(text), "Chat message received");
        let reply = ChatRules::respond(text);
        let task = tokio::spawn(deliver_reply(
            Arc::downgrade(&self.log),
            reply,
            self.reply_delay,
        ));
        Some((message, task))
    }
}

async fn deliver_reply(log: Weak<Mutex<ChatLog>>, reply: String, delay: Duration) {
    tokio::time::sleep(delay).await;

    match log.upgrade() {
        Some(log) => {
            log.lock()
                .expect("chat log mutex poisoned")
                .push_bot(reply, Utc::now());
        }
        None => info!("Chat window closed before the reply was ready"),
    }
}
