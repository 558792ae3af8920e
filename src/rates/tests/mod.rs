//! Rate source tests
//!
//! Contains test suites for the rate source:
//! - Extraction tests over fixture documents
//! - End-to-end source tests over a local mock server


#[cfg(test)]
mod scrape_tests;
#[cfg(test)]
mod source_tests;
