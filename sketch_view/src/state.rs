//! Display state owned by the view.
//!
//! The view shows exactly one piece of text. It starts empty and is replaced
//! wholesale whenever a command response is applied.

/// Text shown in the result line while no response has been applied.
pub const PLACEHOLDER: &str = "(click the button)";

/// The single UI-visible text value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// Last applied command response (empty until the first one lands)
    pub current_text: String,
}

impl DisplayState {
    /// Text for the result line: the current value, or [`PLACEHOLDER`].
    pub fn result_text(&self) -> &str {
        if self.current_text.is_empty() {
            PLACEHOLDER
        } else {
            &self.current_text
        }
    }

    /// `true` until the first response has been applied.
    pub fn is_default(&self) -> bool {
        self.current_text.is_empty()
    }

    /// Replace the displayed text.
    pub(crate) fn replace(&mut self, text: String) {
        self.current_text = text;
    }
}

/// Token handed out per click, ordered by issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

impl RequestTicket {
    /// The ticket issued after this one.
    pub fn next(self) -> Self {
        RequestTicket(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_shows_placeholder() {
        let state = DisplayState::default();
        assert!(state.is_default());
        assert_eq!(state.result_text(), "(click the button)");
    }

    #[test]
    fn replace_is_wholesale() {
        let mut state = DisplayState::default();
        state.replace("Hello World!".into());
        state.replace("pong".into());
        assert_eq!(state.current_text, "pong");
        assert_eq!(state.result_text(), "pong");
        assert!(!state.is_default());
    }

    #[test]
    fn tickets_are_ordered() {
        let first = RequestTicket(0).next();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second, RequestTicket(2));
    }
}
