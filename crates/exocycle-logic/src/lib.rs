//! Pure heat-cycle logic for ExoCycle.
//!
//! This crate contains every calculation the calculator performs, with no
//! console, window, or runtime dependency. Functions take plain data and
//! return results, so the interactive driver and the viewer share the same
//! arithmetic and everything here is unit-testable.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Session defaults: heat constant, sweep ranges, demo planet |
//! | [`cycle`] | Effective gamma, lambda ratio, efficiency bound, gamma bounds |
//! | [`error`] | `CycleError` taxonomy shared by every crate |
//! | [`heat`] | Inverse-square heat input and power output |
//! | [`sweep`] | Hot × cold temperature sweeps for the scatter plots |
//! | [`tables`] | Gas gamma table and planet atmosphere catalog |

pub mod config;
pub mod cycle;
pub mod error;
pub mod heat;
pub mod sweep;
pub mod tables;

pub use error::{CycleError, CycleResult};
