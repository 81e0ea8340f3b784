//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers validate input, delegate to the corresponding
//! repository in `digidex_db`, and map errors via [`crate::error::AppError`].

pub mod digimons;
