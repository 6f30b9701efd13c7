/// UI components for the Roster web interface

pub mod create_user;
pub mod icons;
pub mod modal;
pub mod notifications;
pub mod pagination;
pub mod user_list;
