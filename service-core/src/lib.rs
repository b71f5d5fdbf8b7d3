//! service-core: shared configuration, error and observability plumbing.
pub mod config;
pub mod error;
pub mod observability;
