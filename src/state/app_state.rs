use crate::state::review_session::ReviewSession;
use crate::state::theme::Theme;

pub const VERSION: &str = "0.1.0";

/// Top-level application state: at most one review session at a time,
/// plus presentation preferences.
#[derive(Debug, Default)]
pub struct AppState {
    pub session: Option<ReviewSession>,
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any current session with a freshly loaded task.
    pub fn open_session(&mut self, session: ReviewSession) {
        self.session = Some(session);
    }

    pub fn close_session(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_task_replaces_the_session() {
        let mut state = AppState::new();
        assert!(state.session.is_none());

        state.open_session(ReviewSession::new("a", vec![1.0]));
        assert_eq!(state.session.as_ref().map(|s| s.task_name()), Some("a"));

        state.open_session(ReviewSession::new("b", vec![2.0, 3.0]));
        let session = state.session.as_ref().expect("session should exist");
        assert_eq!(session.task_name(), "b");
        assert_eq!(session.len(), 2);

        state.close_session();
        assert!(state.session.is_none());
    }
}
