//! Method tables, visibility control, and aliasing for a small
//! class-based object runtime.
//!
//! - [`methods`]: method entries, per-class tables, the visibility
//!   cursor used while a class body is evaluated, and aliasing.
//! - [`vm`]: class body evaluation, dispatch with visibility checks,
//!   and the frame stack calls are checked against.
//! - [`types`]: values, classes, and instances hosting the above.
pub mod config;
pub mod methods;
pub mod scenarios;
pub mod types;
pub mod util;
pub mod vm;

#[cfg(test)]
mod tests;
