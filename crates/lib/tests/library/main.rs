//! Integration tests for neuik-build-lib.

mod plan_tests;
mod properties_tests;
