use super::*;
use serde_json::json;

fn signals() -> (RwSignal<ChatState>, RwSignal<ChartState>) {
    (
        RwSignal::new(ChatState::default()),
        RwSignal::new(ChartState::default()),
    )
}

fn showing_donut() -> ChartState {
    let spec = ChartSpec::from_parts(
        "donut",
        &json!({ "stackDataList": [{ "name": "Overdue", "quantity": 5 }] }),
    )
    .unwrap();
    let mut state = ChartState::default();
    state.show(spec);
    state
}

// --- message text ---

#[test]
fn connectivity_banner_names_the_local_port() {
    assert_eq!(
        HEALTH_ERROR_TEXT,
        "Cannot connect to server. Make sure the local server is running on port 5001."
    );
}

#[test]
fn failed_queries_compose_the_sorry_prefix() {
    let bubble = format!("{QUERY_ERROR_PREFIX}no response after 30 seconds");
    assert_eq!(
        bubble,
        "Sorry, I encountered an error: no response after 30 seconds"
    );
}

// --- apply_response ---

#[test]
fn answer_with_chart_fields_appends_a_turn_and_shows_the_chart() {
    let (chat, chart) = signals();
    let response = ChatResponse {
        answer: Some("Here is your demand breakdown.".to_owned()),
        chart_data: Some(json!({ "stackDataList": [{ "name": "Overdue", "quantity": 5 }] })),
        visualization_type: Some("donut".to_owned()),
        ..ChatResponse::default()
    };

    apply_response(chat, chart, &response);

    let turns = chat.get_untracked().turns;
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].text, "Here is your demand breakdown.");
    assert!(!turns[0].is_error);
    assert!(chart.get_untracked().visible());
}

#[test]
fn acknowledgment_clears_a_showing_chart() {
    let (chat, chart) = signals();
    chart.set(showing_donut());
    let response = ChatResponse {
        kind: Some("acknowledgment".to_owned()),
        answer: Some("Noted.".to_owned()),
        ..ChatResponse::default()
    };

    apply_response(chat, chart, &response);

    assert_eq!(chat.get_untracked().turns[0].text, "Noted.");
    assert!(!chart.get_untracked().visible());
}

#[test]
fn greeting_leaves_a_showing_chart_alone() {
    let (chat, chart) = signals();
    chart.set(showing_donut());
    let response = ChatResponse {
        kind: Some("greeting".to_owned()),
        message: Some("Hello!".to_owned()),
        ..ChatResponse::default()
    };

    apply_response(chat, chart, &response);

    assert_eq!(chat.get_untracked().turns[0].text, "Hello!");
    assert!(chart.get_untracked().visible());
}

#[test]
fn unrecognized_visualization_type_mounts_no_chart() {
    let (chat, chart) = signals();
    chart.set(showing_donut());
    let response = ChatResponse {
        answer: Some("Numbers below.".to_owned()),
        chart_data: Some(json!({ "stackDataList": [] })),
        visualization_type: Some("pie".to_owned()),
        ..ChatResponse::default()
    };

    apply_response(chat, chart, &response);

    assert!(!chart.get_untracked().visible());
}

#[test]
fn answer_without_chart_fields_clears_the_chart() {
    let (chat, chart) = signals();
    chart.set(showing_donut());
    let response = ChatResponse {
        answer: Some("Just text.".to_owned()),
        ..ChatResponse::default()
    };

    apply_response(chat, chart, &response);

    assert!(!chart.get_untracked().visible());
}
