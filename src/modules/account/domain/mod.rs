pub mod entities;
pub mod repositories;

pub use entities::user::{User, UserRole};
pub use repositories::user_repository::UserRepository;
