/// Create-user dialog state and submission flow
///
/// Local validation runs synchronously through `UserForm::submit`. Once the
/// form passes, `register_user` runs the duplicate check and the creation
/// call. Every remote outcome closes the dialog; only a local validation
/// failure keeps it open.

use log::{info, warn};

use crate::api::UserApi;
use crate::types::{NewUser, Severity, User};
use crate::utils::validation::{FormField, FormRejection, UserForm};

pub const USER_EXISTS: &str = "User already exists!";
pub const CREATE_SUCCESS: &str = "User created successfully!";
pub const CREATE_FAILURE: &str = "Error creating user. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDialogState {
    pub open: bool,
    pub form: UserForm,
    /// Free-form error slot shown under the fields.
    pub error: String,
    pub submitting: bool,
}

impl CreateDialogState {
    /// Open the dialog with every field blank and no error display.
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        self.open = false;
        self.submitting = false;
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    /// Validate the form for submission. A rejection leaves the dialog open
    /// with per-field errors enabled.
    pub fn begin_submit(&mut self, company_id: &str) -> Result<NewUser, FormRejection> {
        if self.submitting {
            return Err(FormRejection::InFlight);
        }
        let new_user = self.form.submit(company_id)?;
        self.submitting = true;
        Ok(new_user)
    }

    /// Apply the result of `register_user`: the dialog closes in every case.
    pub fn finish_submit(&mut self) {
        self.close();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    AlreadyExists,
    CheckFailed,
    Created(User),
    CreateFailed,
}

impl RegistrationOutcome {
    pub fn notice(&self) -> (&'static str, Severity) {
        match self {
            RegistrationOutcome::AlreadyExists => (USER_EXISTS, Severity::Error),
            RegistrationOutcome::Created(_) => (CREATE_SUCCESS, Severity::Success),
            RegistrationOutcome::CheckFailed | RegistrationOutcome::CreateFailed => {
                (CREATE_FAILURE, Severity::Error)
            }
        }
    }

    pub fn created(self) -> Option<User> {
        match self {
            RegistrationOutcome::Created(user) => Some(user),
            _ => None,
        }
    }
}

/// Check (email, companyId) uniqueness, then create the user.
///
/// The check and the create are two separate calls, so a concurrent
/// submission for the same email can still slip between them; the server
/// remains the authority on uniqueness.
pub async fn register_user<A>(api: &A, new_user: NewUser) -> RegistrationOutcome
where
    A: UserApi + ?Sized,
{
    match api.user_exists(&new_user.email, &new_user.company_id).await {
        Ok(response) if response.is_exists => {
            warn!("User {} already exists in company {}", new_user.email, new_user.company_id);
            return RegistrationOutcome::AlreadyExists;
        }
        Ok(_) => {}
        Err(e) => {
            warn!("Registration stopped, existence check failed: {}", e);
            return RegistrationOutcome::CheckFailed;
        }
    }

    match api.create_user(&new_user).await {
        Ok(user) => {
            info!("User {} created", user.id);
            RegistrationOutcome::Created(user)
        }
        Err(e) => {
            warn!("Registration failed: {}", e);
            RegistrationOutcome::CreateFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::users::mock::{Call, MockUserApi};
    use crate::error::ApiError;
    use crate::state::DirectoryState;
    use crate::types::{ExistsResponse, UserPage};

    fn fill(dialog: &mut CreateDialogState) {
        for (field, value) in [
            (FormField::FirstName, "Grace"),
            (FormField::LastName, "Hopper"),
            (FormField::Email, "grace@example.com"),
            (FormField::VerifyEmail, "grace@example.com"),
            (FormField::Password, "cobol"),
            (FormField::VerifyPassword, "cobol"),
        ] {
            dialog.set_field(field, value.to_string());
        }
    }

    fn new_user() -> NewUser {
        NewUser {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            password: "cobol".into(),
            company_id: "acme".into(),
        }
    }

    fn created() -> User {
        User {
            id: "u-42".into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            company_id: "acme".into(),
            password: None,
        }
    }

    fn not_exists() -> ExistsResponse {
        ExistsResponse { is_exists: false, user: None }
    }

    #[test]
    fn test_open_resets_previous_attempt() {
        let mut dialog = CreateDialogState::default();
        dialog.open();
        fill(&mut dialog);
        dialog.set_field(FormField::VerifyEmail, "typo@example.com".into());
        assert!(dialog.begin_submit("acme").is_err());
        dialog.error = "leftover".into();
        dialog.close();

        dialog.open();
        assert!(dialog.open);
        assert_eq!(dialog.form, UserForm::default());
        assert!(dialog.error.is_empty());
        assert!(FormField::ALL.iter().all(|field| !dialog.form.has_error(*field)));
    }

    #[test]
    fn test_validation_failure_keeps_dialog_open() {
        let mut dialog = CreateDialogState::default();
        dialog.open();
        assert_eq!(dialog.begin_submit("acme"), Err(FormRejection::MissingFields));
        assert!(dialog.open);
        assert!(!dialog.submitting);
        assert!(dialog.form.submitted);
    }

    #[test]
    fn test_valid_submit_marks_submitting() {
        let mut dialog = CreateDialogState::default();
        dialog.open();
        fill(&mut dialog);
        assert_eq!(dialog.begin_submit("acme"), Ok(new_user()));
        assert!(dialog.submitting);

        dialog.finish_submit();
        assert!(!dialog.open);
        assert!(!dialog.submitting);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut dialog = CreateDialogState::default();
        dialog.open();
        fill(&mut dialog);
        assert!(dialog.begin_submit("acme").is_ok());
        assert_eq!(dialog.begin_submit("acme"), Err(FormRejection::InFlight));
        assert!(dialog.submitting);
    }

    #[tokio::test]
    async fn test_existing_user_skips_create() {
        let api = MockUserApi::default();
        api.push_exists(Ok(ExistsResponse {
            is_exists: true,
            user: Some(created()),
        }));

        let outcome = register_user(&api, new_user()).await;
        assert_eq!(outcome, RegistrationOutcome::AlreadyExists);
        assert_eq!(outcome.notice(), ("User already exists!", Severity::Error));
        assert_eq!(
            api.calls(),
            vec![Call::Exists {
                email: "grace@example.com".into(),
                company_id: "acme".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_check_failure_reports_generic_error() {
        let api = MockUserApi::default();
        api.push_exists(Err(ApiError::network("connection refused")));

        let outcome = register_user(&api, new_user()).await;
        assert_eq!(outcome, RegistrationOutcome::CheckFailed);
        assert_eq!(outcome.notice(), (CREATE_FAILURE, Severity::Error));
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_create_called_with_exact_payload() {
        let api = MockUserApi::default();
        api.push_exists(Ok(not_exists())).push_create(Ok(created()));

        let outcome = register_user(&api, new_user()).await;
        assert_eq!(outcome.notice(), (CREATE_SUCCESS, Severity::Success));
        assert_eq!(api.calls().last(), Some(&Call::Create(new_user())));
        assert_eq!(outcome.created(), Some(created()));
    }

    #[tokio::test]
    async fn test_create_failure_reports_generic_error() {
        let api = MockUserApi::default();
        api.push_exists(Ok(not_exists())).push_create(Err(ApiError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        }));

        let outcome = register_user(&api, new_user()).await;
        assert_eq!(outcome, RegistrationOutcome::CreateFailed);
        assert_eq!(outcome.notice(), (CREATE_FAILURE, Severity::Error));
        assert_eq!(outcome.created(), None);
    }

    #[tokio::test]
    async fn test_created_user_is_appended_to_directory() {
        let api = MockUserApi::default();
        api.push_list(Ok(UserPage {
            users: Vec::new(),
            total_pages: 1,
            current_page: 1,
        }))
        .push_exists(Ok(not_exists()))
        .push_create(Ok(created()));

        let mut directory = DirectoryState::default();
        let request = directory.mount();
        let page = api.list_users(&request.to_query("acme")).await;
        directory.apply_page(request.id, page);

        let mut dialog = CreateDialogState::default();
        dialog.open();
        fill(&mut dialog);
        let payload = dialog.begin_submit("acme").unwrap();
        let outcome = register_user(&api, payload).await;
        dialog.finish_submit();
        if let Some(user) = outcome.created() {
            directory.append_user(user);
        }

        assert!(!dialog.open);
        assert_eq!(directory.users, vec![created()]);
        assert_eq!(api.calls().len(), 3);
    }
}
