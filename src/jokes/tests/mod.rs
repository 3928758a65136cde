//! Unit tests for the joke collection module.
