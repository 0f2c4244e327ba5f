// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod database; // Connection pool + embedded migrations
pub mod errors; // Shared error types
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use application::PostCommitQueue;
pub use database::Database;
pub use errors::{AppError, AppResult};
