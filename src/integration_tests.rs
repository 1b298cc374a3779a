//! Integration tests for the chat widget
//!
//! These drive `ChatWidgetApp` end to end: user actions go through the
//! reducer, effects reach the real scheduler thread, and fired continuations
//! come back through `process_events`.

use std::thread;
use std::time::{Duration, Instant};

use crate::app::ChatWidgetApp;
use crate::config::{Timings, WidgetConfig};
use crate::message::Sender;
use crate::replies::{PlannedReply, ReplyGenerator, ReplyRequest};
use crate::state::{ConversationState, View, WidgetAction};

fn fast_config() -> WidgetConfig {
    WidgetConfig {
        timings: Timings {
            reset_delay_ms: 40,
            reply_delay_min_ms: 30,
            reply_delay_max_ms: 60,
            topic_reply_delay_ms: 35,
        },
        ..WidgetConfig::default()
    }
}

/// Process backend events until `done` holds or two seconds pass.
fn pump_until(app: &mut ChatWidgetApp, done: impl Fn(&ConversationState) -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        app.process_events();
        if done(&app.state) {
            return true;
        }
        if Instant::now() > deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(5));
    }
}

/// Replies immediately, so the reply is queued before the test reacts
struct InstantReply;

impl ReplyGenerator for InstantReply {
    fn plan(&mut self, _request: &ReplyRequest) -> PlannedReply {
        PlannedReply {
            text: "já respondi".into(),
            delay: Duration::ZERO,
        }
    }
}

#[test]
fn test_start_conversation_then_send() {
    let mut app = ChatWidgetApp::with_config(fast_config());
    app.dispatch(WidgetAction::OpenPanel);
    assert_eq!(app.state.view(), View::Welcome);

    app.dispatch(WidgetAction::StartConversation);
    assert_eq!(app.state.view(), View::Chat);
    assert_eq!(app.state.messages().len(), 1);
    assert_eq!(app.state.messages()[0].sender, Sender::Assistant);

    app.dispatch(WidgetAction::EditComposer("Como funcionam os climas?".into()));
    app.dispatch(WidgetAction::SubmitComposer);
    assert_eq!(app.state.messages().len(), 2);
    assert!(app.state.is_assistant_typing());

    assert!(pump_until(&mut app, |s| s.messages().len() == 3));
    let last = app.state.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Assistant);
    assert!(app.config.replies.pool.contains(&last.text));
    assert!(!app.state.is_assistant_typing());
}

#[test]
fn test_quick_topic_from_capabilities() {
    let mut app = ChatWidgetApp::with_config(fast_config());
    app.dispatch(WidgetAction::OpenPanel);
    app.dispatch(WidgetAction::Navigate(View::Capabilities));
    let topic = app.config.replies.quick_topics[1].clone();

    app.dispatch(WidgetAction::SendQuickTopic(topic.clone()));
    assert_eq!(app.state.view(), View::Chat);
    assert_eq!(app.state.messages()[0].text, topic);

    assert!(pump_until(&mut app, |s| s.messages().len() == 2));
    let reply = &app.state.messages()[1];
    assert_eq!(reply.sender, Sender::Assistant);
    assert!(reply.text.contains(&topic.to_lowercase()));
}

#[test]
fn test_reset_clears_after_delay() {
    let mut app = ChatWidgetApp::with_config(fast_config());
    app.dispatch(WidgetAction::StartConversation);
    app.dispatch(WidgetAction::Reset);
    assert!(app.state.is_resetting());
    assert_eq!(app.state.messages().len(), 1);

    assert!(pump_until(&mut app, |s| !s.is_resetting()));
    assert!(app.state.messages().is_empty());
    assert_eq!(app.state.view(), View::Welcome);
}

#[test]
fn test_reset_before_reply_fires_stays_clean() {
    let mut app = ChatWidgetApp::with_config(fast_config());
    app.dispatch(WidgetAction::StartConversation);
    app.dispatch(WidgetAction::SendMessage("oi".into()));
    app.dispatch(WidgetAction::Reset);

    assert!(pump_until(&mut app, |s| !s.is_resetting()));
    assert!(app.state.messages().is_empty());

    // outlive the longest reply delay
    thread::sleep(Duration::from_millis(150));
    app.process_events();
    assert!(app.state.messages().is_empty());
    assert!(!app.state.is_assistant_typing());
}

#[test]
fn test_reply_already_queued_at_reset_is_dropped() {
    let mut app = ChatWidgetApp::with_generator(fast_config(), Box::new(InstantReply));
    app.dispatch(WidgetAction::StartConversation);
    app.dispatch(WidgetAction::SendMessage("oi".into()));

    // let the reply land in the channel without processing it
    thread::sleep(Duration::from_millis(100));
    app.dispatch(WidgetAction::Reset);

    assert!(pump_until(&mut app, |s| !s.is_resetting()));
    assert!(app.state.messages().is_empty());
}

#[test]
fn test_rapid_sends_each_get_a_reply() {
    let mut app = ChatWidgetApp::with_config(fast_config());
    app.dispatch(WidgetAction::StartConversation);
    app.dispatch(WidgetAction::SendMessage("um".into()));
    app.dispatch(WidgetAction::SendMessage("dois".into()));
    assert_eq!(app.state.messages().len(), 3);

    assert!(pump_until(&mut app, |s| !s.is_assistant_typing()));
    let messages = app.state.messages();
    assert_eq!(messages.len(), 5);
    let replies = messages
        .iter()
        .filter(|m| m.sender == Sender::Assistant)
        .count();
    assert_eq!(replies, 3);
}

#[test]
fn test_blank_submit_does_nothing() {
    let mut app = ChatWidgetApp::with_config(fast_config());
    app.dispatch(WidgetAction::StartConversation);
    app.dispatch(WidgetAction::EditComposer("   ".into()));
    app.dispatch(WidgetAction::SubmitComposer);
    assert_eq!(app.state.messages().len(), 1);
    assert!(!app.state.is_assistant_typing());
    assert_eq!(app.state.composer_text(), "   ");
}

#[test]
fn test_close_keeps_view_and_messages() {
    let mut app = ChatWidgetApp::with_config(fast_config());
    app.dispatch(WidgetAction::TogglePanel);
    app.dispatch(WidgetAction::StartConversation);
    app.dispatch(WidgetAction::ClosePanel);
    assert!(!app.state.is_panel_open());
    assert_eq!(app.state.view(), View::Chat);
    assert_eq!(app.state.messages().len(), 1);

    app.dispatch(WidgetAction::TogglePanel);
    assert!(app.state.is_panel_open());
    assert_eq!(app.state.view(), View::Chat);
}

#[test]
fn test_message_ids_increase() {
    let mut app = ChatWidgetApp::with_generator(fast_config(), Box::new(InstantReply));
    app.dispatch(WidgetAction::StartConversation);
    app.dispatch(WidgetAction::SendMessage("a".into()));
    app.dispatch(WidgetAction::SendMessage("b".into()));
    assert!(pump_until(&mut app, |s| s.messages().len() == 5));
    let ids: Vec<_> = app.state.messages().iter().map(|m| m.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}
