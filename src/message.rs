use chrono::{DateTime, Local};

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// Monotonic, timestamp-derived message identifier (milliseconds since epoch)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub i64);

/// A single entry in the conversation. Never mutated after creation.
#[derive(Clone, Debug)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Clock label shown under the bubble, e.g. "14:05"
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Hands out message ids derived from the wall clock.
///
/// Two messages created within the same millisecond (a user message and an
/// immediate greeting, say) still get distinct, increasing ids.
#[derive(Debug, Default, Clone)]
pub struct MessageIdGen {
    last: Option<i64>,
}

impl MessageIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_at(&mut self, now: DateTime<Local>) -> MessageId {
        let millis = now.timestamp_millis();
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        MessageId(id)
    }

    /// Build a message stamped with the current local time.
    pub fn create(&mut self, sender: Sender, text: impl Into<String>) -> Message {
        let timestamp = Local::now();
        Message {
            id: self.next_at(timestamp),
            text: text.into(),
            sender,
            timestamp,
        }
    }
}
