//! Keyword-matching query responder
//!
//! A zero-state, deterministic classifier over the static knowledge
//! tables. Total over all inputs: anything unrecognized falls through to
//! a suggestions template, so there is no error channel.

use serde::{Deserialize, Serialize};

use super::knowledge;
use crate::landmarks;
use crate::models::GroundingLink;

/// Terms whose presence signals the user wants a visual, geographic answer
pub const MAP_INTENT_KEYWORDS: &[&str] = &[
    "show", "where", "location", "navigate", "view", "map", "see", "display", "find",
];

/// Result of a single responder call. Transient, no identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub text: String,
    pub links: Vec<GroundingLink>,
    pub should_show_map: bool,
    pub landmark_id: Option<String>,
}

impl QueryResponse {
    fn text_only(text: String) -> Self {
        Self {
            text,
            links: Vec::new(),
            should_show_map: false,
            landmark_id: None,
        }
    }
}

fn has_map_intent(lower: &str) -> bool {
    MAP_INTENT_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn matches_any(lower: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| lower.contains(p))
}

/// Find the best FAQ answer for the query, if any.
///
/// A fragment matches when the lowercased input contains it, or when the
/// fragment contains the first whitespace-delimited token of the input.
/// Overlapping matches resolve by longest-fragment-wins.
fn match_faq(lower: &str) -> Option<&'static str> {
    let first_token = lower.split_whitespace().next().unwrap_or("");
    knowledge::FAQ
        .iter()
        .filter(|(fragment, _)| {
            lower.contains(fragment) || (!first_token.is_empty() && fragment.contains(first_token))
        })
        .max_by_key(|(fragment, _)| fragment.len())
        .map(|(_, answer)| *answer)
}

fn match_statistic(lower: &str) -> Option<(&'static str, &'static str)> {
    knowledge::STATISTICS
        .iter()
        .find(|(label, _)| lower.contains(label) || lower.contains(&label.replace(' ', "")))
        .copied()
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

const GREETING: &str = "Hello! I'm your Hitech City geospatial intelligence assistant. I can \
                        help you with:\n\n\
                        • Information about landmarks and locations\n\
                        • Statistics about tech parks and companies\n\
                        • Details about regions (Hitech City, Gachibowli, Madhapur, Kondapur)\n\
                        • Navigation to specific locations on the map\n\n\
                        What would you like to know?";

const CAPABILITIES: &str = "I can assist you with:\n\n\
                            📍 **Locations & Landmarks**: Ask about Cyber Towers, T-Hub, \
                            Mindspace, IKEA, etc.\n\n\
                            📊 **Statistics**: Employment data, tech parks, startups, workforce\n\n\
                            🗺️ **Regions**: Information about Hitech City, Gachibowli, Madhapur, \
                            Kondapur\n\n\
                            🔍 **Navigation**: Ask to \"show\" or \"view\" any location to see it \
                            on the map\n\n\
                            Try asking: \"Show me Cyber Towers\" or \"What companies are in \
                            Hitech City?\"";

fn fallback_text(prompt: &str) -> String {
    format!(
        "I understand you're asking about \"{prompt}\". Here's what I can help you with:\n\n\
         • **Locations**: Ask about specific landmarks like \"Cyber Towers\", \"T-Hub\", \
         \"Mindspace\"\n\
         • **Regions**: Information about Hitech City, Gachibowli, Madhapur, Kondapur\n\
         • **Statistics**: Employment data, tech parks count, workforce size\n\
         • **Map Navigation**: Say \"show [location]\" to view it on the map\n\n\
         Try asking:\n\
         - \"Show me Cyber Towers\"\n\
         - \"What is Hitech City?\"\n\
         - \"How many tech parks are there?\"\n\
         - \"Tell me about T-Hub\""
    )
}

/// Answer a free-text query against the knowledge tables.
///
/// Matching precedence, first match wins: FAQ, landmark, region,
/// statistic, greeting, help, fallback. The map-intent flag is computed
/// once over the whole input and attached per the matched branch.
#[must_use]
pub fn respond(prompt: &str) -> QueryResponse {
    let lower = prompt.to_lowercase().trim().to_string();

    let should_show_map = has_map_intent(&lower);
    let landmark = landmarks::find_in_text(&lower);
    let landmark_id = landmark.map(|l| l.id.clone());

    if let Some(answer) = match_faq(&lower) {
        return QueryResponse {
            text: answer.to_string(),
            links: Vec::new(),
            should_show_map,
            landmark_id,
        };
    }

    if let Some(landmark) = landmark {
        let text = if should_show_map {
            format!(
                "{}: {}\n\nWould you like me to show this on the map?",
                landmark.name, landmark.description
            )
        } else {
            format!("{}: {}", landmark.name, landmark.description)
        };
        return QueryResponse {
            text,
            links: Vec::new(),
            should_show_map,
            landmark_id,
        };
    }

    if let Some(region) = knowledge::region_in_text(&lower) {
        return QueryResponse {
            text: region.summary(),
            links: Vec::new(),
            should_show_map,
            landmark_id: None,
        };
    }

    if let Some((label, value)) = match_statistic(&lower) {
        return QueryResponse::text_only(format!(
            "{} in Hitech City: {value}",
            capitalize(label)
        ));
    }

    if matches_any(&lower, &["hello", "hi", "hey", "greetings"]) {
        return QueryResponse::text_only(GREETING.to_string());
    }

    if matches_any(&lower, &["help", "what can you do", "capabilities"]) {
        return QueryResponse::text_only(CAPABILITIES.to_string());
    }

    QueryResponse {
        text: fallback_text(prompt),
        links: Vec::new(),
        should_show_map,
        landmark_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_answer_is_verbatim() {
        let response = respond("what is hitech city");
        assert!(
            response
                .text
                .starts_with("Hitech City is Hyderabad's premier IT hub")
        );
    }

    #[test]
    fn test_faq_longest_fragment_wins() {
        // "innovation hubs" also appears inside the statistics table and
        // overlaps the "hubs" substring of other entries
        let response = respond("tell us about innovation hubs");
        assert!(response.text.contains("world's largest innovation campus"));
    }

    #[test]
    fn test_landmark_with_map_intent() {
        let response = respond("show me Cyber Towers");
        assert_eq!(response.landmark_id.as_deref(), Some("cyber-towers"));
        assert!(response.should_show_map);
        assert!(response.text.contains("Would you like me to show this on the map?"));
    }

    #[test]
    fn test_landmark_without_map_intent() {
        let response = respond("tell me about Cyber Towers");
        assert_eq!(response.landmark_id.as_deref(), Some("cyber-towers"));
        assert!(!response.should_show_map);
        assert!(!response.text.contains("Would you like me"));
    }

    #[test]
    fn test_region_answer_composition() {
        let response = respond("what's special about madhapur");
        assert!(response.text.starts_with("Madhapur:"));
        assert!(response.text.contains("Inorbit Mall, Shilparamam"));
    }

    #[test]
    fn test_statistic_answer() {
        let response = respond("office occupancy rate?");
        assert_eq!(response.text, "Office occupancy in Hitech City: 92%");
        assert!(!response.should_show_map);
    }

    #[test]
    fn test_greeting() {
        let response = respond("hey there");
        assert!(response.text.starts_with("Hello!"));
        assert!(!response.should_show_map);
    }

    #[test]
    fn test_fallback_embeds_input() {
        let response = respond("asdkjasbdkj");
        assert!(response.text.contains("\"asdkjasbdkj\""));
        assert!(!response.should_show_map);
        assert!(response.landmark_id.is_none());
    }

    #[test]
    fn test_fallback_carries_map_intent() {
        let response = respond("display the warp core");
        assert!(response.text.contains("\"display the warp core\""));
        assert!(response.should_show_map);
    }

    #[test]
    fn test_empty_input_falls_through() {
        // An empty first token must not reverse-match every FAQ fragment
        let response = respond("");
        assert!(response.text.contains("Here's what I can help you with"));
    }
}
