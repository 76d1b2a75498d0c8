//! Unit tests for the application screens.
