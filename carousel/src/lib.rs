//! Constrained gift-exchange draws.
//!
//! Assigns every participant exactly one other participant to give to, honoring
//! per-person forbidden recipients, and presents the result as give-cycles. The
//! architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure logic (generation, cycle ordering, exclusion merging).
//!   No I/O; randomness comes from the caller's RNG.
//! - **[`io`]**: Config, persisted draw state, export/import files.
//!
//! Orchestration modules ([`draw`], [`import`], [`reveal`], [`setup`]) coordinate
//! core logic with I/O to implement CLI commands.

pub mod core;
pub mod draw;
pub mod exit_codes;
pub mod import;
pub mod io;
pub mod logging;
pub mod reveal;
pub mod setup;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
