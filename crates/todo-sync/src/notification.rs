//! Notification State
//!
//! A single transient error banner. Showing a new message while one is
//! visible replaces it and restarts the auto-dismiss timer; the timer itself
//! lives in the UI and reports back with the ticket it was started for.

use crate::error::Failure;

/// Identifies one display period of the banner
pub type Ticket = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    /// Last shown message, kept while hidden so the banner can fade out
    message: Option<Failure>,
    visible: bool,
    ticket: Ticket,
}

impl Notification {
    /// Show `failure`, returning the ticket the expiry timer must present
    pub fn show(&mut self, failure: Failure) -> Ticket {
        self.ticket += 1;
        self.message = Some(failure);
        self.visible = true;
        self.ticket
    }

    /// Hide if `ticket` still belongs to the current display period.
    /// Returns whether the banner was hidden.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if self.visible && ticket == self.ticket {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> Option<Failure> {
        self.message
    }

    pub fn text(&self) -> &'static str {
        self.message.map(|m| m.message()).unwrap_or_default()
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_hides_current_message() {
        let mut n = Notification::default();
        assert!(!n.is_visible());

        let ticket = n.show(Failure::LoadTodos);
        assert!(n.is_visible());
        assert_eq!(n.text(), "Unable to load todos");

        assert!(n.expire(ticket));
        assert!(!n.is_visible());
        // Message stays for the fade-out
        assert_eq!(n.message(), Some(Failure::LoadTodos));
    }

    #[test]
    fn test_new_failure_restarts_timer() {
        let mut n = Notification::default();
        let first = n.show(Failure::AddTodo);
        let second = n.show(Failure::DeleteTodo);

        // The first timer fires late and must not hide the newer message
        assert!(!n.expire(first));
        assert!(n.is_visible());
        assert_eq!(n.text(), "Unable to delete a todo");

        assert!(n.expire(second));
        assert!(!n.is_visible());
    }

    #[test]
    fn test_dismiss_then_stale_timer() {
        let mut n = Notification::default();
        let ticket = n.show(Failure::UpdateTodo);
        n.dismiss();
        assert!(!n.is_visible());
        assert!(!n.expire(ticket));
    }
}
