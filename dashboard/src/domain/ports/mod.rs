//! Domain ports for driven collaborators.

mod user_gateway;

#[cfg(test)]
pub use user_gateway::MockUserGateway;
pub use user_gateway::{FixtureUserGateway, UserGateway, UserGatewayError};
