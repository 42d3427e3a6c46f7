//! Integration tests.

mod file_backed;
mod onboarding_scenario;
