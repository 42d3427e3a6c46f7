//! Property-based tests for campaign queries.
