//! Responder precedence and matching-policy tests

use cityatlas::assistant::{MAP_INTENT_KEYWORDS, respond};
use rstest::rstest;

#[rstest]
#[case("what is hitech city", "Hitech City is Hyderabad's premier IT hub")]
#[case("how many companies are there", "Hitech City houses over 200+ IT companies")]
#[case("tell me about the workforce", "The total workforce in Hitech City")]
#[case("anything on metro connectivity?", "Hitech City has its own metro station")]
fn faq_fragment_returns_fixed_answer(#[case] prompt: &str, #[case] expected_start: &str) {
    let response = respond(prompt);
    assert!(
        response.text.starts_with(expected_start),
        "prompt {prompt:?} answered {:?}",
        response.text
    );
}

#[rstest]
#[case("show me Cyber Towers", "cyber-towers")]
#[case("WHERE is ikea hyderabad?", "ikea-hyd")]
#[case("navigate to inorbit mall", "inorbit-mall")]
#[case("can you display raheja mindspace", "mindspace")]
fn landmark_with_map_intent_sets_focus(#[case] prompt: &str, #[case] expected_id: &str) {
    let response = respond(prompt);
    assert_eq!(response.landmark_id.as_deref(), Some(expected_id));
    assert!(response.should_show_map, "prompt {prompt:?} should request the map");
}

#[rstest]
#[case("tell me about Cyber Towers")]
#[case("describe shilparamam")]
fn landmark_without_map_intent_keeps_flag_false(#[case] prompt: &str) {
    let response = respond(prompt);
    assert!(response.landmark_id.is_some());
    assert!(!response.should_show_map);
}

#[rstest]
#[case("about hitech city", "Hitech City:")]
#[case("madhapur shopping", "Madhapur:")]
#[case("kondapur", "Kondapur:")]
fn region_queries_compose_descriptions(#[case] prompt: &str, #[case] expected_start: &str) {
    let response = respond(prompt);
    assert!(response.text.starts_with(expected_start));
    assert!(response.text.contains("Key Features:"));
}

#[test]
fn landmark_spaced_id_shadows_region_name() {
    // "gachibowli" is both a region key and the landmark id slug; the
    // landmark branch has higher precedence
    let response = respond("gachibowli area please");
    assert_eq!(response.landmark_id.as_deref(), Some("gachibowli"));
    assert!(!response.text.contains("Key Features:"));
}

#[test]
fn statistic_query_formats_label_and_value() {
    // Most statistic labels are shadowed by FAQ fragments; "office
    // occupancy" is the one the FAQ table does not cover
    let response = respond("office occupancy stats");
    assert_eq!(response.text, "Office occupancy in Hitech City: 92%");
    assert!(!response.should_show_map);
}

#[test]
fn statistic_matches_label_without_spaces() {
    // "totaltechparks" only matches the label with spaces removed
    let response = respond("totaltechparks");
    assert_eq!(response.text, "Total tech parks in Hitech City: 42+");
}

#[test]
fn greeting_and_help_are_fixed_messages() {
    assert!(respond("greetings!").text.starts_with("Hello!"));
    assert!(respond("help").text.contains("I can assist you with"));
    assert!(respond("your capabilities?").text.contains("I can assist you with"));
}

#[test]
fn fallback_echoes_input_in_suggestions_template() {
    let response = respond("asdkjasbdkj");
    assert!(response.text.contains("\"asdkjasbdkj\""));
    assert!(response.text.contains("Try asking:"));
    assert!(!response.should_show_map);
    assert!(response.landmark_id.is_none());
}

#[test]
fn fallback_still_reports_map_intent() {
    let response = respond("show me the nearest wormhole");
    assert!(response.should_show_map);
    assert!(response.landmark_id.is_none());
}

#[test]
fn responder_is_total_over_odd_inputs() {
    // No input may panic or error; the responder is a total function
    for prompt in ["", "   ", "\n\t", "🗺️🗺️🗺️", "ñandú", "a]b[c{d}"] {
        let response = respond(prompt);
        assert!(!response.text.is_empty());
    }
}

#[test]
fn every_map_intent_keyword_triggers_the_flag() {
    for keyword in MAP_INTENT_KEYWORDS {
        let response = respond(&format!("{keyword} me Cyber Towers"));
        assert!(
            response.should_show_map,
            "keyword {keyword:?} should signal map intent"
        );
        assert_eq!(response.landmark_id.as_deref(), Some("cyber-towers"));
    }
}

#[test]
fn faq_takes_precedence_over_region() {
    // "what is hitech city" contains the region name too; FAQ wins
    let response = respond("what is hitech city");
    assert!(!response.text.contains("Key Features:"));
}
