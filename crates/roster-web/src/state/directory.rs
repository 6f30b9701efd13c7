/// Directory view state
///
/// Holds the current page of users and the page/search/loading/error flags.
/// Every fetch is tagged with a request id; only the response to the most
/// recently issued request is applied.

use log::{debug, warn};

use crate::error::ApiError;
use crate::types::{ListQuery, Severity, User, UserPage};

pub const DELETE_SUCCESS: &str = "User deleted successfully!";
pub const DELETE_FAILURE: &str = "Error deleting user.";

/// What the list area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryView {
    Loading,
    Empty,
    List,
}

/// A fetch the view has to issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub id: u64,
    pub page: u32,
    pub search: String,
}

impl PageRequest {
    pub fn to_query(&self, company_id: &str) -> ListQuery {
        ListQuery::new(self.page, company_id, &self.search)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryState {
    pub users: Vec<User>,
    pub current_page: u32,
    pub total_pages: u32,
    pub is_loading: bool,
    pub is_error: bool,
    pub search_term: String,
    /// Ids of users with a delete call in flight.
    pub pending_deletes: Vec<String>,
    latest_request: u64,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            current_page: 1,
            total_pages: 1,
            is_loading: true,
            is_error: false,
            search_term: String::new(),
            pending_deletes: Vec::new(),
            latest_request: 0,
        }
    }
}

impl DirectoryState {
    /// Initial fetch on mount: page 1 with the current search term.
    pub fn mount(&mut self) -> PageRequest {
        self.issue(1)
    }

    /// Page-change event. Returns `None` when the page is already the
    /// requested one.
    pub fn request_page(&mut self, page: u32) -> Option<PageRequest> {
        let page = page.max(1);
        if page == self.current_page {
            return None;
        }
        Some(self.issue(page))
    }

    /// Search-term change. Always restarts from page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> Option<PageRequest> {
        let term = term.into();
        if term == self.search_term {
            return None;
        }
        self.search_term = term;
        Some(self.issue(1))
    }

    fn issue(&mut self, page: u32) -> PageRequest {
        self.latest_request += 1;
        self.current_page = page;
        self.is_loading = true;
        self.is_error = false;

        debug!("Issuing users request #{} for page {}", self.latest_request, page);
        PageRequest {
            id: self.latest_request,
            page,
            search: self.search_term.clone(),
        }
    }

    /// Apply the outcome of a fetch. Returns `false` when the response was
    /// superseded by a later request and dropped.
    pub fn apply_page(&mut self, request_id: u64, result: Result<UserPage, ApiError>) -> bool {
        if request_id != self.latest_request {
            debug!(
                "Discarding stale users response #{} (latest #{})",
                request_id, self.latest_request
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.users = page.users;
                self.total_pages = page.total_pages;
                self.current_page = page.current_page.max(1);
            }
            Err(e) => {
                warn!("Error fetching users: {}", e);
                self.users.clear();
                self.is_error = true;
            }
        }
        self.is_loading = false;
        true
    }

    pub fn view(&self) -> DirectoryView {
        if self.is_loading {
            DirectoryView::Loading
        } else if self.is_error || self.users.is_empty() {
            DirectoryView::Empty
        } else {
            DirectoryView::List
        }
    }

    /// Append a freshly created user without refetching.
    pub fn append_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Mark a delete as in flight. Returns `false` if one is already pending
    /// for this id.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.is_deleting(id) {
            return false;
        }
        self.pending_deletes.push(id.to_string());
        true
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.pending_deletes.iter().any(|pending| pending == id)
    }

    /// Settle a delete call and return the notification to show. On success
    /// the user leaves the local list; on failure the list is untouched.
    pub fn finish_delete(&mut self, id: &str, result: &Result<(), ApiError>) -> (&'static str, Severity) {
        self.pending_deletes.retain(|pending| pending != id);
        match result {
            Ok(()) => {
                self.users.retain(|user| user.id != id);
                (DELETE_SUCCESS, Severity::Success)
            }
            Err(_) => (DELETE_FAILURE, Severity::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: format!("{}@example.com", id),
            company_id: "acme".to_string(),
            password: None,
        }
    }

    fn page(ids: &[&str], current_page: u32, total_pages: u32) -> UserPage {
        UserPage {
            users: ids.iter().map(|id| user(id)).collect(),
            total_pages,
            current_page,
        }
    }

    fn loaded(ids: &[&str]) -> DirectoryState {
        let mut state = DirectoryState::default();
        let request = state.mount();
        assert!(state.apply_page(request.id, Ok(page(ids, 1, 3))));
        state
    }

    #[test]
    fn test_initial_state_is_loading() {
        let mut state = DirectoryState::default();
        assert_eq!(state.view(), DirectoryView::Loading);

        let request = state.mount();
        assert_eq!(request.page, 1);
        assert_eq!(request.search, "");
        assert!(state.is_loading);
    }

    #[test]
    fn test_successful_fetch_replaces_list() {
        let state = loaded(&["a", "b"]);
        assert_eq!(state.view(), DirectoryView::List);
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.total_pages, 3);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_failed_fetch_discards_previous_list() {
        let mut state = loaded(&["a", "b"]);
        let request = state.request_page(2).unwrap();
        assert!(!state.is_error);
        assert!(state.apply_page(request.id, Err(ApiError::network("offline"))));

        assert!(state.is_error);
        assert!(state.users.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.view(), DirectoryView::Empty);
    }

    #[test]
    fn test_empty_page_shows_placeholder() {
        let state = loaded(&[]);
        assert_eq!(state.view(), DirectoryView::Empty);
    }

    #[test]
    fn test_search_resets_to_first_page() {
        let mut state = loaded(&["a"]);
        let request = state.request_page(3).unwrap();
        state.apply_page(request.id, Ok(page(&["c"], 3, 3)));
        assert_eq!(state.current_page, 3);

        let request = state.set_search_term("ada").unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.search, "ada");
        assert_eq!(state.current_page, 1);
        assert_eq!(request.to_query("acme").search.as_deref(), Some("ada"));
    }

    #[test]
    fn test_unchanged_inputs_issue_no_request() {
        let mut state = loaded(&["a"]);
        assert_eq!(state.request_page(1), None);
        assert_eq!(state.set_search_term(""), None);
    }

    #[test]
    fn test_page_request_keeps_search_term() {
        let mut state = loaded(&["a"]);
        let search = state.set_search_term("lo").unwrap();
        state.apply_page(search.id, Ok(page(&["a"], 1, 2)));

        let request = state.request_page(2).unwrap();
        assert_eq!(request.search, "lo");
        assert_eq!(request.page, 2);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = loaded(&["a"]);
        let first = state.request_page(2).unwrap();
        let second = state.set_search_term("zed").unwrap();

        assert!(state.apply_page(second.id, Ok(page(&["z"], 1, 1))));
        assert!(!state.apply_page(first.id, Ok(page(&["b"], 2, 3))));

        assert_eq!(state.users, vec![user("z")]);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut state = loaded(&["a"]);
        let first = state.request_page(2).unwrap();
        let _second = state.request_page(3).unwrap();

        assert!(!state.apply_page(first.id, Ok(page(&["b"], 2, 3))));
        assert!(state.is_loading);
        assert_eq!(state.view(), DirectoryView::Loading);
    }

    #[test]
    fn test_append_user() {
        let mut state = loaded(&["a"]);
        state.append_user(user("new"));
        assert_eq!(state.users.last().map(|u| u.id.as_str()), Some("new"));
        assert_eq!(state.users.len(), 2);
    }

    #[test]
    fn test_delete_success_removes_exactly_one() {
        let mut state = loaded(&["a", "b", "c"]);
        assert!(state.begin_delete("b"));
        assert!(!state.begin_delete("b"));
        assert!(state.is_deleting("b"));

        let notice = state.finish_delete("b", &Ok(()));
        assert_eq!(notice, (DELETE_SUCCESS, Severity::Success));
        assert!(!state.is_deleting("b"));
        let ids: Vec<_> = state.users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_delete_failure_keeps_list() {
        let mut state = loaded(&["a", "b"]);
        let before = state.users.clone();
        state.begin_delete("a");
        let error = ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        };
        let notice = state.finish_delete("a", &Err(error));
        assert_eq!(notice, (DELETE_FAILURE, Severity::Error));
        assert_eq!(state.users, before);
        assert!(state.pending_deletes.is_empty());
    }
}
