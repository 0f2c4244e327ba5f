pub mod persistence;

pub use persistence::UserRepositoryImpl;
