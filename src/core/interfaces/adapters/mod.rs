mod display_sink;
mod photo_api_gateway;

pub use display_sink::DisplaySink;
pub use photo_api_gateway::PhotoApiGateway;
