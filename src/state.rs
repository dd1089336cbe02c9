//! Navigation history state.

use crate::trace_log;

/// Direction of a history movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// A new entry was pushed (or history moved toward newer entries).
    Forward,
    /// History moved toward older entries.
    Back,
    /// The current entry was replaced in place.
    Replace,
}

/// Record of one completed history movement.
#[derive(Debug, Clone)]
pub struct RouteChangeEvent {
    /// Path before the movement, if any.
    pub from: Option<String>,
    /// Path after the movement.
    pub to: String,
    /// How the history moved.
    pub direction: NavigationDirection,
}

/// History stack with a cursor, mirroring browser session history.
///
/// Starts at `/`. `push` truncates any forward entries, `replace` swaps the
/// current entry, `back`/`forward` move the cursor without changing the
/// stack. The current entry is the console's "browser location".
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Navigation history stack
    history: Vec<String>,
    /// Current position in history
    current: usize,
}

impl RouterState {
    /// Create history positioned at the root path.
    pub fn new() -> Self {
        Self {
            history: vec!["/".to_string()],
            current: 0,
        }
    }

    /// Get current path
    pub fn current_path(&self) -> &str {
        &self.history[self.current]
    }

    /// Navigate to a new path
    pub fn push(&mut self, path: String) -> RouteChangeEvent {
        let from = Some(self.current_path().to_string());

        // Remove forward history when pushing
        self.history.truncate(self.current + 1);

        self.history.push(path.clone());
        self.current += 1;

        trace_log!("history push: {:?} → '{}'", from, path);

        RouteChangeEvent {
            from,
            to: path,
            direction: NavigationDirection::Forward,
        }
    }

    /// Replace current path
    pub fn replace(&mut self, path: String) -> RouteChangeEvent {
        let from = Some(self.current_path().to_string());

        self.history[self.current] = path.clone();

        RouteChangeEvent {
            from,
            to: path,
            direction: NavigationDirection::Replace,
        }
    }

    /// Go back in history
    pub fn back(&mut self) -> Option<RouteChangeEvent> {
        if self.current > 0 {
            let from = Some(self.current_path().to_string());
            self.current -= 1;
            let to = self.current_path().to_string();

            Some(RouteChangeEvent {
                from,
                to,
                direction: NavigationDirection::Back,
            })
        } else {
            None
        }
    }

    /// Go forward in history
    pub fn forward(&mut self) -> Option<RouteChangeEvent> {
        if self.current < self.history.len() - 1 {
            let from = Some(self.current_path().to_string());
            self.current += 1;
            let to = self.current_path().to_string();

            Some(RouteChangeEvent {
                from,
                to,
                direction: NavigationDirection::Forward,
            })
        } else {
            None
        }
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        self.current < self.history.len() - 1
    }

    /// Peek at the path we would navigate to on `back()`, without actually navigating.
    pub fn peek_back_path(&self) -> Option<&str> {
        if self.current > 0 {
            Some(&self.history[self.current - 1])
        } else {
            None
        }
    }

    /// Peek at the path we would navigate to on `forward()`, without actually navigating.
    pub fn peek_forward_path(&self) -> Option<&str> {
        if self.current < self.history.len() - 1 {
            Some(&self.history[self.current + 1])
        } else {
            None
        }
    }

    /// Clear navigation history
    pub fn clear(&mut self) {
        self.history.clear();
        self.history.push("/".to_string());
        self.current = 0;
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        let mut state = RouterState::new();

        assert_eq!(state.current_path(), "/");

        state.push("/nodes".to_string());
        assert_eq!(state.current_path(), "/nodes");

        state.push("/node/seed-1".to_string());
        assert_eq!(state.current_path(), "/node/seed-1");

        state.back();
        assert_eq!(state.current_path(), "/nodes");

        state.forward();
        assert_eq!(state.current_path(), "/node/seed-1");
    }

    #[test]
    fn test_replace() {
        let mut state = RouterState::new();

        state.push("/nodes".to_string());
        state.replace("/apps".to_string());

        assert_eq!(state.current_path(), "/apps");
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut state = RouterState::new();

        state.push("/nodes".to_string());
        state.push("/apps".to_string());
        state.back();
        assert!(state.can_go_forward());

        state.push("/appTypes".to_string());
        assert!(!state.can_go_forward());
        assert_eq!(state.current_path(), "/appTypes");
    }

    #[test]
    fn test_back_at_root_is_none() {
        let mut state = RouterState::new();
        assert!(state.back().is_none());
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_peek_does_not_move() {
        let mut state = RouterState::new();
        state.push("/nodes".to_string());

        assert_eq!(state.peek_back_path(), Some("/"));
        assert_eq!(state.current_path(), "/nodes");
        assert_eq!(state.peek_forward_path(), None);
    }

    #[test]
    fn test_change_event_fields() {
        let mut state = RouterState::new();
        let event = state.push("/nodes".to_string());

        assert_eq!(event.from.as_deref(), Some("/"));
        assert_eq!(event.to, "/nodes");
        assert_eq!(event.direction, NavigationDirection::Forward);
    }

    #[test]
    fn test_clear_resets_to_root() {
        let mut state = RouterState::new();
        state.push("/nodes".to_string());
        state.clear();

        assert_eq!(state.current_path(), "/");
        assert!(!state.can_go_back());
        assert!(!state.can_go_forward());
    }
}
