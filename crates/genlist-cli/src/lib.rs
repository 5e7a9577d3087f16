//! Library surface of the `genlister` binary: logging setup and the
//! diagnostic renderer.

pub mod diagnostics;
pub mod logging;
