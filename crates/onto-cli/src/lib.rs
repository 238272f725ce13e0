//! Library side of the `onto` binary: logging, configuration and the
//! end-to-end pipeline.

#![deny(unsafe_code)]

pub mod config;
pub mod logging;
pub mod pipeline;
