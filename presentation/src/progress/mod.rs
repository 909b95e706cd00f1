//! Progress reporting while a call is in flight

pub mod reporter;
