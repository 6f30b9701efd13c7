/// Utility functions for the web interface
///
/// Form validation and pagination helpers shared by the components.

pub mod pagination;
pub mod validation;
