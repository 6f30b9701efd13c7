/// API client for communicating with the users service
///
/// HTTP client abstraction for all API operations with proper error handling.

pub mod client;
pub mod users;

pub use users::{use_user_api, HttpUserApi, SharedUserApi, UserApi};
