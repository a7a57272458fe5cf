//! Library side of `mediadexctl`: reading entity files, running them
//! through the validators or the catalog service, and shaping the JSON
//! reports the binary prints.

#![allow(missing_docs)]

pub mod commands;
pub mod error;
pub mod input;
pub mod report;

pub use error::{CtlError, Result};
