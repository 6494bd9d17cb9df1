//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, API base, and cache directory resolution
//! - `loading`: End-to-end loading from CLI arguments and the environment

mod helpers;
