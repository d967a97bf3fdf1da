//! Standard error messages and codes for consistent error responses.

// Message constants
pub const VALIDATION_FAILED: &str = "Request validation failed";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred";
pub const MISSING_TOKEN: &str = "No token provided";
pub const INVALID_TOKEN: &str = "Invalid token";

// Machine-readable codes
pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_JSON_EXTRACTION: &str = "INVALID_BODY";
pub const CODE_QUERY_EXTRACTION: &str = "INVALID_QUERY";
pub const CODE_PATH_EXTRACTION: &str = "INVALID_PATH";
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
pub const CODE_INTERNAL: &str = "INTERNAL_ERROR";
