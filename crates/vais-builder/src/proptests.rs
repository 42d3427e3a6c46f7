//! Property-based tests for canvas operations.
