use super::*;
use crate::net::types::ConversationTurn;

fn reply(answer: &str, conversation_id: Option<&str>) -> ChatReply {
    ChatReply { answer: answer.to_owned(), conversation_id: conversation_id.map(str::to_owned), sources: Vec::new() }
}

fn summary(id: &str, title: &str) -> ConversationSummary {
    ConversationSummary { id: Some(id.to_owned()), title: Some(title.to_owned()), ..ConversationSummary::default() }
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn default_state_shows_welcome_only() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert!(state.messages[0].is_welcome());
    assert_eq!(state.messages[0].content, WELCOME_MESSAGE);
    assert_eq!(state.conversation_id, None);
    assert!(!state.typing);
}

#[test]
fn begin_question_trims_and_marks_typing() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_question("  where is my invoice?  ").as_deref(), Some("where is my invoice?"));
    assert!(state.typing);
    let last = state.messages.last().unwrap();
    assert_eq!(last.sender, Sender::User);
    assert_eq!(last.content, "where is my invoice?");
}

#[test]
fn begin_question_rejects_blank_and_concurrent_input() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_question("   "), None);
    assert_eq!(state.messages.len(), 1);

    state.begin_question("first");
    assert_eq!(state.begin_question("second"), None);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn answer_continues_returned_conversation() {
    let mut state = ChatState::default();
    state.begin_question("hi");
    state.receive_answer(reply("hello", Some("c1")));
    assert!(!state.typing);
    assert_eq!(state.conversation_id.as_deref(), Some("c1"));

    state.begin_question("again");
    state.receive_answer(reply("still here", None));
    assert_eq!(state.conversation_id.as_deref(), Some("c1"));
    assert_eq!(state.messages.last().unwrap().sender, Sender::Assistant);
}

#[test]
fn error_ends_typing_with_notice() {
    let mut state = ChatState::default();
    state.begin_question("hi");
    state.receive_error("network error: offline");
    assert!(!state.typing);
    let last = state.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Error);
    assert!(last.content.contains("offline"));
}

// =============================================================
// Feedback
// =============================================================

#[test]
fn feedback_applies_to_assistant_answers_only() {
    let mut state = ChatState::default();
    state.begin_question("hi");
    state.receive_answer(reply("hello", None));
    let user_id = state.messages[1].id.clone();
    let answer_id = state.messages[2].id.clone();

    assert!(state.set_feedback(&answer_id, Feedback::Positive));
    assert!(state.set_feedback(&answer_id, Feedback::Negative));
    assert_eq!(state.messages[2].feedback, Some(Feedback::Negative));

    assert!(!state.set_feedback(&user_id, Feedback::Positive));
    assert!(!state.set_feedback("welcome", Feedback::Positive));
    assert!(!state.set_feedback("missing", Feedback::Positive));
}

// =============================================================
// History
// =============================================================

#[test]
fn open_conversation_replays_turns() {
    let mut state = ChatState::default();
    state.history_open = true;
    let detail = ConversationDetail {
        id: Some("c9".to_owned()),
        messages: vec![
            ConversationTurn { question: Some("q1".to_owned()), answer: Some("a1".to_owned()), timestamp: None },
            ConversationTurn { question: Some("q2".to_owned()), answer: None, timestamp: None },
        ],
    };

    state.open_conversation("c9", detail);

    let contents: Vec<&str> = state.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec![WELCOME_MESSAGE, "q1", "a1", "q2"]);
    assert_eq!(state.conversation_id.as_deref(), Some("c9"));
    assert!(!state.history_open);
}

#[test]
fn rename_and_remove_history_entries() {
    let mut state = ChatState::default();
    state.set_history(vec![summary("c1", "Billing"), summary("c2", "Shipping")]);
    state.rename_in_history("c2", "Returns");
    assert_eq!(state.history[1].label(), "Returns");

    state.conversation_id = Some("c1".to_owned());
    state.begin_question("hi");
    state.remove_from_history("c1");
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.conversation_id, None);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn removing_other_conversation_keeps_transcript() {
    let mut state = ChatState::default();
    state.set_history(vec![summary("c1", "Billing"), summary("c2", "Shipping")]);
    state.conversation_id = Some("c1".to_owned());
    state.begin_question("hi");
    state.remove_from_history("c2");
    assert_eq!(state.conversation_id.as_deref(), Some("c1"));
    assert_eq!(state.messages.len(), 2);
}
