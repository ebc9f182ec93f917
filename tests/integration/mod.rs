//! Integration tests
//!
//! Selection scenarios exercised end to end through the public API.
