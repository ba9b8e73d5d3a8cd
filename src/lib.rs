#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(feature = "env_logger", feature = "log"))]
mod log;

pub mod greeting;
pub mod program;
