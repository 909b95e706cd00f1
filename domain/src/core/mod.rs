//! Core helpers shared across all subdomains.
//!
//! - [`string`]: UTF-8 safe truncation and secret masking for messages and logs

pub mod string;
