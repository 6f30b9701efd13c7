/// View state for the admin interface
///
/// Plain state machines the components drive. None of them touch the DOM or
/// the network, so they are exercised directly by host tests.

pub mod directory;
pub mod notification;
pub mod registration;

pub use directory::{DirectoryState, DirectoryView, PageRequest};
pub use notification::{NotificationState, AUTO_DISMISS_MS};
pub use registration::{register_user, RegistrationOutcome};
