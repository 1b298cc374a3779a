//! Reply policy for the assistant stub.
//!
//! Everything the assistant "says" lives in [`ReplyBook`] as plain data, and
//! the choice of reply and its latency sits behind the [`ReplyGenerator`]
//! trait. A real inference backend would implement the trait; the reducer
//! and the scheduler stay untouched.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::Timings;
use crate::message::Message;
use crate::protocol::TaskId;

/// Canned text data: reply pool, templates and quick topics.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ReplyBook {
    /// Free-form replies, one picked uniformly at random per message
    pub pool: Vec<String>,
    /// Reply to a quick topic; `{topic}` is replaced by the lowercased topic
    pub topic_template: String,
    /// First assistant message; `{user}` and `{avatar}` are substituted
    pub greeting_template: String,
    /// Suggestions offered as one-click prompts
    pub quick_topics: Vec<String>,
}

impl Default for ReplyBook {
    fn default() -> Self {
        Self {
            pool: vec![
                "Obrigada pela sua mensagem! Estou aqui para te ajudar com geografia!".into(),
                "Que pergunta interessante! Deixe-me te ajudar com isso.".into(),
                "Fico feliz em te auxiliar. O que você gostaria de saber sobre geografia?".into(),
                "Ótima pergunta! Posso te ajudar a explorar esse tópico geográfico.".into(),
                "Entendo sua dúvida. Aqui está o que posso te explicar sobre geografia...".into(),
            ],
            topic_template: "Ótima pergunta sobre {topic}! Ficarei feliz em te ajudar a \
                             explorar este tópico. Que aspecto específico você gostaria \
                             de saber mais?"
                .into(),
            greeting_template: "Olá {user}! {avatar} Como posso te ajudar hoje?".into(),
            quick_topics: vec![
                "Com o que você pode me ajudar?".into(),
                "Me fale sobre relevo brasileiro".into(),
                "Como funcionam os climas?".into(),
                "Dicas para a olimpíada de geografia".into(),
            ],
        }
    }
}

impl ReplyBook {
    pub fn render_greeting(&self, user_name: &str, avatar: &str) -> String {
        self.greeting_template
            .replace("{user}", user_name)
            .replace("{avatar}", avatar)
    }

    pub fn render_topic_reply(&self, topic: &str) -> String {
        self.topic_template.replace("{topic}", &topic.to_lowercase())
    }
}

/// What the user asked for
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyPrompt {
    /// Text typed into the composer
    Free(String),
    /// One of the quick-topic suggestions
    Topic(String),
}

/// Everything a reply generator gets to look at.
#[derive(Clone, Debug)]
pub struct ReplyRequest {
    pub task: TaskId,
    /// Conversation as it stood right after the user's message was appended
    pub history: Vec<Message>,
    pub prompt: ReplyPrompt,
}

/// A reply and how long to wait before delivering it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedReply {
    pub text: String,
    pub delay: Duration,
}

/// Produces assistant replies. Runs on the scheduler thread.
pub trait ReplyGenerator: Send {
    fn plan(&mut self, request: &ReplyRequest) -> PlannedReply;
}

/// Stock generator: random pick from the pool, templated topic replies.
pub struct CannedReplies {
    book: ReplyBook,
    timings: Timings,
    rng: StdRng,
}

impl CannedReplies {
    pub fn new(book: ReplyBook, timings: Timings) -> Self {
        Self {
            book,
            timings,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible demos.
    pub fn with_seed(book: ReplyBook, timings: Timings, seed: u64) -> Self {
        Self {
            book,
            timings,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn free_delay(&mut self) -> Duration {
        let min = self.timings.reply_delay_min_ms;
        let max = self.timings.reply_delay_max_ms;
        if max <= min {
            return Duration::from_millis(min);
        }
        Duration::from_millis(self.rng.random_range(min..max))
    }
}

impl ReplyGenerator for CannedReplies {
    fn plan(&mut self, request: &ReplyRequest) -> PlannedReply {
        match &request.prompt {
            ReplyPrompt::Free(_) => {
                let text = self
                    .book
                    .pool
                    .choose(&mut self.rng)
                    .cloned()
                    .unwrap_or_default();
                PlannedReply {
                    text,
                    delay: self.free_delay(),
                }
            }
            ReplyPrompt::Topic(topic) => PlannedReply {
                text: self.book.render_topic_reply(topic),
                delay: Duration::from_millis(self.timings.topic_reply_delay_ms),
            },
        }
    }
}
