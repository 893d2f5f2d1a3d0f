//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: layer composition shared by the tests
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: API key, identifier, and derived settings tests

mod helpers;
