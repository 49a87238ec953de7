//! Property test modules

mod drag_session_tests;
mod registry_tests;
mod viewport_sync_tests;
