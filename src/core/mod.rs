//! Core algorithms – directory listing, suffix grouping, and report rendering.
//!
//! Nothing in this module writes to stdout; the binary decides where the
//! rendered report goes.

pub mod fs;
pub mod grouping;
pub mod report;
