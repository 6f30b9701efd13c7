/// Users API operations
///
/// The four calls the admin interface makes against the users service. Each
/// one is a single request with no retry and no caching; failures are logged
/// with their detail and returned as `ApiError`.

use std::rc::Rc;

use async_trait::async_trait;
use leptos::use_context;
use log::{debug, error, info};

use crate::api::client::ApiClient;
use crate::config::{use_config, AppConfig};
use crate::error::Result;
use crate::types::{ExistsResponse, ListQuery, NewUser, User, UserPage};

#[async_trait(?Send)]
pub trait UserApi {
    async fn list_users(&self, query: &ListQuery) -> Result<UserPage>;

    async fn user_exists(&self, email: &str, company_id: &str) -> Result<ExistsResponse>;

    async fn create_user(&self, user: &NewUser) -> Result<User>;

    async fn delete_user(&self, id: &str) -> Result<()>;
}

/// Handle the views share; provided as context by the root component.
pub type SharedUserApi = Rc<dyn UserApi>;

/// Hook to access the users API, falling back to the HTTP client built from
/// the provided configuration.
pub fn use_user_api() -> SharedUserApi {
    use_context::<SharedUserApi>().unwrap_or_else(|| Rc::new(HttpUserApi::new(&use_config())))
}

/// `UserApi` backed by the remote HTTP service
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: ApiClient,
}

impl HttpUserApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: ApiClient::new(config.users_url()),
        }
    }
}

#[async_trait(?Send)]
impl UserApi for HttpUserApi {
    async fn list_users(&self, query: &ListQuery) -> Result<UserPage> {
        debug!("Fetching users page {} (search: {:?})", query.page, query.search);
        self.client
            .get("", &query.to_pairs())
            .await
            .inspect_err(|e| error!("Error fetching users: {}", e))
    }

    async fn user_exists(&self, email: &str, company_id: &str) -> Result<ExistsResponse> {
        let query = [("email", email.to_string()), ("companyId", company_id.to_string())];
        self.client
            .get("/exists", &query)
            .await
            .inspect_err(|e| error!("Error checking user existence: {}", e))
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let created: User = self
            .client
            .post("", user)
            .await
            .inspect_err(|e| error!("Error creating user: {}", e))?;
        info!("Created user {}", created.id);
        Ok(created)
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("/{}", id))
            .await
            .inspect_err(|e| error!("Error deleting user {}: {}", id, e))?;
        info!("Deleted user {}", id);
        Ok(())
    }
}
