//! Provider gateways
//!
//! - [`RestCloudGateway`]: bearer-token REST client with pagination
//! - [`DryRunGateway`]: reports the request without sending it
//!
//! Both build requests from the same [`routes`] table.

pub mod dry_run;
pub mod rest;
pub mod routes;

pub use dry_run::DryRunGateway;
pub use rest::RestCloudGateway;
pub use routes::{HttpMethod, PreparedRequest, Route, route_for};
