pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::AccountService;
pub use domain::{User, UserRepository, UserRole};
