pub mod name;
pub mod phone;
pub mod record;

// Re-exports for convenience
pub use name::Name;
pub use phone::Phone;
pub use record::Record;
