//! Success message constants used throughout the application.

pub const MSG_HELLO: &str = "Hello! This is the user CRUD API service.";
pub const MSG_USER_DELETED: &str = "User deleted successfully";
