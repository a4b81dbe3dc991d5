use super::*;

// --- turn constructors ---

#[test]
fn constructors_tag_sender_and_error() {
    let question = ConversationTurn::user("hi".to_owned(), 1.0);
    assert_eq!(question.sender, Sender::User);
    assert!(!question.is_error);

    let reply = ConversationTurn::assistant("hello".to_owned(), 2.0);
    assert_eq!(reply.sender, Sender::Assistant);
    assert!(!reply.is_error);

    let failure = ConversationTurn::error("offline".to_owned(), 3.0);
    assert_eq!(failure.sender, Sender::Assistant);
    assert!(failure.is_error);
}

#[test]
fn turn_ids_are_unique() {
    let a = ConversationTurn::user("same text".to_owned(), 0.0);
    let b = ConversationTurn::user("same text".to_owned(), 0.0);
    assert_ne!(a.id, b.id);
}

// --- conversation state ---

#[test]
fn welcome_shows_only_before_the_first_turn() {
    let mut state = ChatState::default();
    assert!(state.show_welcome());

    state.turns.push(ConversationTurn::user("q".to_owned(), 0.0));
    assert!(!state.show_welcome());
}

#[test]
fn error_turns_also_dismiss_the_welcome() {
    let mut state = ChatState::default();
    state
        .turns
        .push(ConversationTurn::error("cannot connect".to_owned(), 0.0));
    assert!(!state.show_welcome());
}

#[test]
fn turns_accumulate_without_a_cap() {
    let mut state = ChatState::default();
    for i in 0..200 {
        state
            .turns
            .push(ConversationTurn::assistant(format!("turn {i}"), 0.0));
    }
    assert_eq!(state.turns.len(), 200);
}

#[test]
fn defaults_are_idle_with_no_simulation() {
    let state = ChatState::default();
    assert!(!state.loading);
    assert_eq!(state.simulation_id, None);
}
