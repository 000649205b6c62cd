//! Client-facing messages shared by every service.

pub const VALIDATION_FAILED: &str = "One or more validation errors occurred";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
