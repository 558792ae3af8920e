//! UI module tests
//!
//! Display-free test suites for the UI layer:
//! - Widget registry namespace rules
//! - GridSpec validation
//! - MVC Controller logic over a fixed rate table

#[cfg(test)]
mod grid_spec_tests;
