//! Property-based tests for mastery and trial counters.
