//! Conversation state and its transitions.
//!
//! `ConversationState` is the only mutable model in the widget. Every user
//! gesture and every scheduler event goes through one of its transition
//! functions, which update the state and return the [`Effect`]s the caller
//! must hand to the backend. Nothing here sleeps, spawns or sends.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::WidgetConfig;
use crate::message::{Message, MessageIdGen, Sender};
use crate::protocol::{BackendAction, TaskId};
use crate::replies::{ReplyPrompt, ReplyRequest};
use crate::validation;

/// The screen shown inside the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Welcome,
    Capabilities,
    Chat,
}

impl View {
    /// Transitions reachable through plain navigation (header buttons).
    ///
    /// Entering chat goes through `start_conversation`, a send, or a quick
    /// topic instead.
    pub fn can_navigate_to(self, target: View) -> bool {
        matches!(
            (self, target),
            (View::Welcome, View::Capabilities)
                | (View::Capabilities, View::Welcome)
                | (View::Chat, View::Welcome)
        ) || self == target
    }
}

/// Side effect requested by a transition
#[derive(Debug, Clone)]
pub enum Effect {
    RequestReply(ReplyRequest),
    CancelReply(TaskId),
    ScheduleReset,
}

impl From<Effect> for BackendAction {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::RequestReply(request) => BackendAction::ScheduleReply(request),
            Effect::CancelReply(task) => BackendAction::CancelReply(task),
            Effect::ScheduleReset => BackendAction::ScheduleReset,
        }
    }
}

/// User intents produced by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetAction {
    OpenPanel,
    ClosePanel,
    TogglePanel,
    Reset,
    StartConversation,
    SendMessage(String),
    SendQuickTopic(String),
    Navigate(View),
    EditComposer(String),
    SubmitComposer,
}

#[derive(Debug, Clone)]
pub struct ConversationState {
    view: View,
    messages: Vec<Message>,
    composer_text: String,
    pending_replies: BTreeSet<TaskId>,
    is_resetting: bool,
    is_panel_open: bool,
    greeting: String,
    ids: MessageIdGen,
    next_task: u64,
}

impl ConversationState {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            view: View::Welcome,
            messages: Vec::new(),
            composer_text: String::new(),
            pending_replies: BTreeSet::new(),
            is_resetting: false,
            is_panel_open: false,
            greeting: config
                .replies
                .render_greeting(&config.user_name, &config.bot_avatar),
            ids: MessageIdGen::new(),
            next_task: 0,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn composer_text(&self) -> &str {
        &self.composer_text
    }

    /// True while at least one reply continuation is outstanding.
    pub fn is_assistant_typing(&self) -> bool {
        !self.pending_replies.is_empty()
    }

    pub fn pending_replies(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.pending_replies.iter().copied()
    }

    pub fn is_resetting(&self) -> bool {
        self.is_resetting
    }

    pub fn is_panel_open(&self) -> bool {
        self.is_panel_open
    }

    /// Whether the composer's send affordance is enabled.
    pub fn can_send(&self) -> bool {
        validation::is_sendable(&self.composer_text)
    }

    pub fn apply(&mut self, action: WidgetAction) -> Vec<Effect> {
        match action {
            WidgetAction::OpenPanel => {
                self.open();
                Vec::new()
            }
            WidgetAction::ClosePanel => {
                self.close();
                Vec::new()
            }
            WidgetAction::TogglePanel => {
                self.toggle();
                Vec::new()
            }
            WidgetAction::Reset => self.reset(),
            WidgetAction::StartConversation => self.start_conversation(),
            WidgetAction::SendMessage(text) => self.send_message(&text),
            WidgetAction::SendQuickTopic(topic) => self.send_quick_topic(&topic),
            WidgetAction::Navigate(view) => {
                self.navigate(view);
                Vec::new()
            }
            WidgetAction::EditComposer(text) => {
                self.edit_composer(text);
                Vec::new()
            }
            WidgetAction::SubmitComposer => self.submit_composer(),
        }
    }

    pub fn open(&mut self) {
        self.is_panel_open = true;
    }

    pub fn close(&mut self) {
        self.is_panel_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_panel_open = !self.is_panel_open;
    }

    /// Begin a reset. The conversation is cleared by [`Self::finish_reset`]
    /// once the reset continuation fires.
    pub fn reset(&mut self) -> Vec<Effect> {
        if self.is_resetting {
            debug!("reset already in progress");
            return Vec::new();
        }
        self.is_resetting = true;
        let mut effects = self.cancel_pending();
        effects.push(Effect::ScheduleReset);
        effects
    }

    pub fn finish_reset(&mut self) -> Vec<Effect> {
        let effects = self.cancel_pending();
        self.messages.clear();
        self.view = View::Welcome;
        self.is_resetting = false;
        debug!("conversation reset");
        effects
    }

    /// Open the chat with a fresh greeting as its only message.
    pub fn start_conversation(&mut self) -> Vec<Effect> {
        let effects = self.cancel_pending();
        self.view = View::Chat;
        let greeting = self.ids.create(Sender::Assistant, self.greeting.clone());
        self.messages = vec![greeting];
        effects
    }

    pub fn send_message(&mut self, text: &str) -> Vec<Effect> {
        if !validation::is_sendable(text) {
            return Vec::new();
        }
        let msg = self.ids.create(Sender::User, text);
        self.messages.push(msg);
        self.composer_text.clear();
        vec![self.request_reply(ReplyPrompt::Free(text.to_string()))]
    }

    pub fn send_quick_topic(&mut self, topic: &str) -> Vec<Effect> {
        self.view = View::Chat;
        let msg = self.ids.create(Sender::User, topic);
        self.messages.push(msg);
        vec![self.request_reply(ReplyPrompt::Topic(topic.to_string()))]
    }

    pub fn navigate(&mut self, target: View) {
        if self.view.can_navigate_to(target) {
            self.view = target;
        } else {
            debug!(from = ?self.view, to = ?target, "ignoring navigation");
        }
    }

    pub fn edit_composer(&mut self, text: String) {
        self.composer_text = text;
    }

    /// Send whatever is in the composer. From the capabilities screen a
    /// successful send also moves to the chat.
    pub fn submit_composer(&mut self) -> Vec<Effect> {
        let text = self.composer_text.clone();
        let effects = self.send_message(&text);
        if !effects.is_empty() && self.view == View::Capabilities {
            self.view = View::Chat;
        }
        effects
    }

    /// Deliver a reply. Replies for tasks that are no longer pending were
    /// cancelled and are dropped.
    pub fn receive_reply(&mut self, task: TaskId, text: String) {
        if !self.pending_replies.remove(&task) {
            debug!(?task, "dropping stale reply");
            return;
        }
        let msg = self.ids.create(Sender::Assistant, text);
        self.messages.push(msg);
    }

    fn request_reply(&mut self, prompt: ReplyPrompt) -> Effect {
        self.next_task += 1;
        let task = TaskId(self.next_task);
        self.pending_replies.insert(task);
        Effect::RequestReply(ReplyRequest {
            task,
            history: self.messages.clone(),
            prompt,
        })
    }

    fn cancel_pending(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending_replies)
            .into_iter()
            .map(Effect::CancelReply)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state() -> ConversationState {
        ConversationState::new(&WidgetConfig::default())
    }

    fn requested_task(effects: &[Effect]) -> TaskId {
        match effects {
            [Effect::RequestReply(req)] => req.task,
            other => panic!("expected one reply request, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.view(), View::Welcome);
        assert!(s.messages().is_empty());
        assert!(!s.is_panel_open());
        assert!(!s.is_assistant_typing());
        assert!(!s.is_resetting());
        assert!(!s.can_send());
    }

    #[test]
    fn test_open_close_leave_conversation_alone() {
        let mut s = state();
        s.start_conversation();
        s.open();
        assert!(s.is_panel_open());
        s.close();
        assert!(!s.is_panel_open());
        assert_eq!(s.view(), View::Chat);
        assert_eq!(s.messages().len(), 1);
        s.toggle();
        assert!(s.is_panel_open());
    }

    #[test]
    fn test_start_conversation_greets_user() {
        let mut s = state();
        let effects = s.start_conversation();
        assert!(effects.is_empty());
        assert_eq!(s.view(), View::Chat);
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].sender, Sender::Assistant);
        assert!(s.messages()[0].text.contains("Amigo"));
    }

    #[test]
    fn test_start_conversation_replaces_previous_chat() {
        let mut s = state();
        s.start_conversation();
        let task = requested_task(&s.send_message("oi"));
        s.navigate(View::Welcome);
        let effects = s.start_conversation();
        assert!(matches!(effects.as_slice(), [Effect::CancelReply(t)] if *t == task));
        assert_eq!(s.messages().len(), 1);
        assert!(!s.is_assistant_typing());
    }

    #[test]
    fn test_send_message_appends_and_requests_reply() {
        let mut s = state();
        s.start_conversation();
        s.edit_composer("Como funcionam os climas?".into());
        let effects = s.submit_composer();
        let task = requested_task(&effects);
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.messages()[1].sender, Sender::User);
        assert_eq!(s.messages()[1].text, "Como funcionam os climas?");
        assert_eq!(s.composer_text(), "");
        assert!(s.is_assistant_typing());

        s.receive_reply(task, "Que pergunta interessante!".into());
        assert_eq!(s.messages().len(), 3);
        assert_eq!(s.messages()[2].sender, Sender::Assistant);
        assert!(!s.is_assistant_typing());
    }

    #[test]
    fn test_send_keeps_raw_text() {
        let mut s = state();
        let effects = s.send_message("  olá  ");
        assert_eq!(s.messages()[0].text, "  olá  ");
        match &effects[0] {
            Effect::RequestReply(req) => {
                assert_eq!(req.prompt, ReplyPrompt::Free("  olá  ".into()));
                assert_eq!(req.history.len(), 1);
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_quick_topic_switches_to_chat() {
        let mut s = state();
        s.navigate(View::Capabilities);
        let effects = s.send_quick_topic("Me fale sobre relevo brasileiro");
        let task = requested_task(&effects);
        assert_eq!(s.view(), View::Chat);
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].text, "Me fale sobre relevo brasileiro");
        assert!(s.is_assistant_typing());
        s.receive_reply(task, "ok".into());
        assert!(!s.is_assistant_typing());
    }

    #[test]
    fn test_submit_from_capabilities_moves_to_chat() {
        let mut s = state();
        s.navigate(View::Capabilities);
        s.edit_composer("Dicas?".into());
        let effects = s.submit_composer();
        assert_eq!(effects.len(), 1);
        assert_eq!(s.view(), View::Chat);
    }

    #[test]
    fn test_empty_submit_from_capabilities_stays() {
        let mut s = state();
        s.navigate(View::Capabilities);
        s.edit_composer("   ".into());
        assert!(s.submit_composer().is_empty());
        assert_eq!(s.view(), View::Capabilities);
        assert!(s.messages().is_empty());
    }

    #[test]
    fn test_reset_cancels_pending_and_clears_on_finish() {
        let mut s = state();
        s.start_conversation();
        let task = requested_task(&s.send_message("oi"));

        let effects = s.reset();
        assert!(s.is_resetting());
        assert!(!s.is_assistant_typing());
        assert!(matches!(
            effects.as_slice(),
            [Effect::CancelReply(t), Effect::ScheduleReset] if *t == task
        ));
        // still visible until the reset continuation fires
        assert_eq!(s.messages().len(), 2);

        assert!(s.finish_reset().is_empty());
        assert!(s.messages().is_empty());
        assert_eq!(s.view(), View::Welcome);
        assert!(!s.is_resetting());

        // the cancelled reply shows up anyway
        s.receive_reply(task, "late".into());
        assert!(s.messages().is_empty());
    }

    #[test]
    fn test_reset_while_resetting_is_ignored() {
        let mut s = state();
        assert_eq!(s.reset().len(), 1);
        assert!(s.reset().is_empty());
    }

    #[test]
    fn test_send_during_reset_window_is_cancelled() {
        let mut s = state();
        s.start_conversation();
        s.reset();
        let task = requested_task(&s.send_message("oi"));
        let effects = s.finish_reset();
        assert!(matches!(effects.as_slice(), [Effect::CancelReply(t)] if *t == task));
        assert!(!s.is_assistant_typing());
    }

    #[test]
    fn test_overlapping_replies_all_land() {
        let mut s = state();
        s.start_conversation();
        let first = requested_task(&s.send_message("um"));
        let second = requested_task(&s.send_message("dois"));
        assert_ne!(first, second);

        s.receive_reply(second, "b".into());
        assert!(s.is_assistant_typing());
        s.receive_reply(first, "a".into());
        assert!(!s.is_assistant_typing());
        assert_eq!(s.messages().len(), 5);
    }

    #[test]
    fn test_duplicate_reply_is_dropped() {
        let mut s = state();
        let task = requested_task(&s.send_message("oi"));
        s.receive_reply(task, "a".into());
        s.receive_reply(task, "a".into());
        assert_eq!(s.messages().len(), 2);
    }

    #[test]
    fn test_navigation_table() {
        let mut s = state();
        s.navigate(View::Chat);
        assert_eq!(s.view(), View::Welcome);
        s.navigate(View::Capabilities);
        assert_eq!(s.view(), View::Capabilities);
        s.navigate(View::Chat);
        assert_eq!(s.view(), View::Capabilities);
        s.navigate(View::Welcome);
        assert_eq!(s.view(), View::Welcome);

        s.start_conversation();
        s.navigate(View::Capabilities);
        assert_eq!(s.view(), View::Chat);
        s.navigate(View::Welcome);
        assert_eq!(s.view(), View::Welcome);
        // leaving chat keeps the messages
        assert_eq!(s.messages().len(), 1);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut s = state();
        s.apply(WidgetAction::TogglePanel);
        assert!(s.is_panel_open());
        s.apply(WidgetAction::StartConversation);
        s.apply(WidgetAction::EditComposer("oi".into()));
        assert!(s.can_send());
        let effects = s.apply(WidgetAction::SubmitComposer);
        assert_eq!(effects.len(), 1);
        let effects = s.apply(WidgetAction::SendQuickTopic("Como funcionam os climas?".into()));
        assert_eq!(effects.len(), 1);
        s.apply(WidgetAction::ClosePanel);
        assert!(!s.is_panel_open());
        s.apply(WidgetAction::OpenPanel);
        assert!(s.is_panel_open());
    }

    #[test]
    fn test_effect_into_backend_action() {
        assert!(matches!(
            BackendAction::from(Effect::ScheduleReset),
            BackendAction::ScheduleReset
        ));
        assert!(matches!(
            BackendAction::from(Effect::CancelReply(TaskId(3))),
            BackendAction::CancelReply(TaskId(3))
        ));
    }

    proptest! {
        #[test]
        fn prop_blank_input_is_noop(text in "[ \t\n\r]{0,12}", in_chat in any::<bool>()) {
            let mut s = state();
            if in_chat {
                s.start_conversation();
            }
            let view = s.view();
            let count = s.messages().len();
            prop_assert!(s.send_message(&text).is_empty());
            prop_assert_eq!(s.view(), view);
            prop_assert_eq!(s.messages().len(), count);
            prop_assert!(!s.is_assistant_typing());
        }

        #[test]
        fn prop_non_blank_input_sends_once(text in "[ ]{0,3}[a-zA-Z0-9?!]{1,20}[ ]{0,3}") {
            let mut s = state();
            s.start_conversation();
            let effects = s.send_message(&text);
            prop_assert_eq!(effects.len(), 1);
            prop_assert_eq!(s.messages().len(), 2);
            let task = match &effects[0] {
                Effect::RequestReply(req) => req.task,
                _ => unreachable!(),
            };
            s.receive_reply(task, "resposta".into());
            prop_assert_eq!(s.messages().len(), 3);
            prop_assert_eq!(s.messages()[2].sender, Sender::Assistant);
        }

        #[test]
        fn prop_finish_reset_always_clears(sends in 0usize..5, topic in any::<bool>()) {
            let mut s = state();
            s.start_conversation();
            for i in 0..sends {
                s.send_message(&format!("mensagem {}", i));
            }
            if topic {
                s.send_quick_topic("Como funcionam os climas?");
            }
            s.reset();
            s.finish_reset();
            prop_assert!(s.messages().is_empty());
            prop_assert_eq!(s.view(), View::Welcome);
            prop_assert!(!s.is_assistant_typing());
        }
    }
}
