//! Search prompt state.

/// Search state.
///
/// The query is live: every keystroke changes it immediately, there is no
/// separate submit buffer.
#[derive(Debug, Default)]
pub struct SearchState {
    is_active: bool,
    query: String,
}

impl SearchState {
    /// Create a new search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the prompt is accepting input.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Open the prompt, keeping the current query for editing.
    pub fn start(&mut self) {
        self.is_active = true;
    }

    /// Append a character to the query.
    pub fn input(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character from the query.
    pub fn backspace(&mut self) {
        self.query.pop();
    }

    /// Close the prompt and keep filtering by the query.
    pub fn submit(&mut self) {
        self.is_active = false;
    }

    /// Close the prompt and clear the query.
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.query.clear();
    }

    /// Get the search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Check if a non-blank query is in effect.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_updates_query_immediately() {
        let mut search = SearchState::new();
        search.start();
        for c in "rock".chars() {
            search.input(c);
        }
        assert_eq!(search.query(), "rock");

        search.backspace();
        assert_eq!(search.query(), "roc");
        assert!(search.is_active());
    }

    #[test]
    fn submit_keeps_query_and_cancel_clears_it() {
        let mut search = SearchState::new();
        search.start();
        search.input('x');
        search.submit();
        assert!(!search.is_active());
        assert!(search.has_query());

        search.start();
        search.cancel();
        assert_eq!(search.query(), "");
        assert!(!search.has_query());
    }

    #[test]
    fn whitespace_is_not_a_query() {
        let mut search = SearchState::new();
        search.input(' ');
        search.input('\t');
        assert!(!search.has_query());
    }
}
