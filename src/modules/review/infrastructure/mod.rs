pub mod persistence;

pub use persistence::ReviewRepositoryImpl;
