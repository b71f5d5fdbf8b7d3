//! login-screen: the login workflow behind the app's sign-in screen.
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod services;
pub mod startup;
pub mod workflow;

pub use workflow::{AttemptResult, AttemptState, LoginWorkflow};
