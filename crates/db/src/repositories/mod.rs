//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod digimon_repo;

pub use digimon_repo::DigimonRepo;
