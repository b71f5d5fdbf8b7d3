pub mod credentials;
pub mod outcome;

pub use credentials::{AuthRequest, Credentials};
pub use outcome::{AuthOutcome, AuthProvider};
