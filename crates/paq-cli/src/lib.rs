//! paq CLI library.
//!
//! Parameter loading, logging setup and the `schema`, `validate` and
//! `generate` commands behind the `paq` binary.

pub mod commands;
pub mod input;
pub mod logging;
