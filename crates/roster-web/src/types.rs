/// Type definitions for the Roster web interface
///
/// Wire types exchanged with the users API and the small value types the
/// views share.

use serde::{Deserialize, Serialize};

/// Number of users requested per page.
pub const PAGE_SIZE: u32 = 10;

/// User record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_id: String,
    /// Never populated on read paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Creation payload; the server assigns the id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub company_id: String,
}

/// One page of the user listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub users: Vec<User>,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Result of the (email, companyId) pre-flight check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExistsResponse {
    pub is_exists: bool,
    #[serde(default)]
    pub user: Option<User>,
}

/// Parameters of a list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub company_id: String,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn new(page: u32, company_id: impl Into<String>, search: &str) -> Self {
        let search = search.trim();
        Self {
            page: page.max(1),
            company_id: company_id.into(),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// Query-string pairs in request order. `searchQuery` is left out when
    /// there is no search term.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", PAGE_SIZE.to_string()),
            ("companyId", self.company_id.clone()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("searchQuery", search.clone()));
        }
        pairs
    }
}

/// Company every request is scoped to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub id: String,
    pub name: String,
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}
