//! REST outbound adapter for the user gateway port.

mod dto;
mod gateway;

pub use gateway::{RestGatewayConfig, RestUserGateway};
