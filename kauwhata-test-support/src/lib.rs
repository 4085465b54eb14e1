//! Shared test utilities used across kauwhata crates.
//!
//! [`profile`] reads the property-test run profile from the environment and
//! [`recording`] captures spans and events so instrumentation can be asserted.

pub mod profile;
pub mod recording;
