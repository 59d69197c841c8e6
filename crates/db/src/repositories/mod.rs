//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or another executor) as the first argument.

pub mod contact_repo;
pub mod label_repo;

pub use contact_repo::ContactRepo;
pub use label_repo::LabelRepo;
