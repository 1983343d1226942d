//! Dashboard session state
//!
//! Holds the active view, the append-only conversation log, and the
//! sequencing between "switch to the map" and "fly to a landmark". The
//! original dashboard issued the fly-to after a fixed delay; here the
//! directive stays queued until the map surface reports mounted, so the
//! handoff is driven by an explicit readiness signal instead of timing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assistant::{self, QueryResponse};
use crate::map::{self, FlyTo};
use crate::models::ChatMessage;

const ONBOARDING_MESSAGE: &str = "System Initialized. I am your Hitech City geospatial \
                                  intelligence officer. How can I assist your exploration today?";

/// The dashboard's top-level views. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Assistant,
    Map,
    Analytics,
}

/// Result of submitting one query through the session
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    /// The assistant message appended to the log
    pub reply: ChatMessage,
    /// Raw responder output
    pub response: QueryResponse,
    /// View after any map switch
    pub active_view: View,
    /// Fly-to issued immediately because the map was already mounted;
    /// otherwise the directive is queued for the readiness signal
    pub fly_to: Option<FlyTo>,
}

/// Per-session dashboard state. Never persisted.
#[derive(Debug)]
pub struct Session {
    active_view: View,
    messages: Vec<ChatMessage>,
    map_ready: bool,
    pending_focus: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session seeded with the onboarding message
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_view: View::Assistant,
            messages: vec![ChatMessage::assistant(ONBOARDING_MESSAGE)],
            map_ready: false,
            pending_focus: None,
        }
    }

    #[must_use]
    pub fn active_view(&self) -> View {
        self.active_view
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Switch the active view. Leaving the map view drops its readiness;
    /// the surface has to report mounted again next time.
    pub fn set_view(&mut self, view: View) {
        if self.active_view == View::Map && view != View::Map {
            self.map_ready = false;
        }
        self.active_view = view;
    }

    /// Run one query through the responder and update session state.
    ///
    /// Appends the user and assistant messages, switches to the map view
    /// when the response asks for it, and either issues the fly-to right
    /// away (map already mounted) or queues it for [`Self::mark_map_ready`].
    pub fn submit_query(&mut self, prompt: &str) -> QueryOutcome {
        self.messages.push(ChatMessage::user(prompt));

        let response = assistant::respond(prompt);
        let reply =
            ChatMessage::assistant(response.text.clone()).with_links(response.links.clone());
        self.messages.push(reply.clone());

        let mut fly_to = None;
        if response.should_show_map {
            self.active_view = View::Map;
            if let Some(id) = &response.landmark_id {
                if self.map_ready {
                    fly_to = map::focus_on(id);
                } else {
                    debug!(landmark = %id, "map not mounted yet, queueing focus");
                    self.pending_focus = Some(id.clone());
                }
            }
        }

        QueryOutcome {
            reply,
            response,
            active_view: self.active_view,
            fly_to,
        }
    }

    /// Append a visible error line to the chat, used when the query call
    /// fails outside the responder itself
    pub fn record_failure(&mut self, description: &str) {
        self.messages
            .push(ChatMessage::assistant(format!("Error: {description}")));
    }

    /// Focus a landmark directly (e.g. from the sites list). Switches to
    /// the map view; the command is queued if the surface is not mounted.
    /// Unknown ids are a no-op.
    pub fn focus_landmark(&mut self, id: &str) -> Option<FlyTo> {
        map::focus_on(id)?;
        self.active_view = View::Map;
        if self.map_ready {
            map::focus_on(id)
        } else {
            self.pending_focus = Some(id.to_string());
            None
        }
    }

    /// Readiness signal from the map surface. Flushes any queued focus
    /// directive and returns its fly-to command.
    pub fn mark_map_ready(&mut self) -> Option<FlyTo> {
        self.map_ready = true;
        self.pending_focus.take().and_then(|id| map::focus_on(&id))
    }

    #[must_use]
    pub fn map_ready(&self) -> bool {
        self.map_ready
    }
}
