mod reqwest_photo_gateway;
mod temp_file_display_sink;

pub use reqwest_photo_gateway::ReqwestPhotoGateway;
pub use temp_file_display_sink::TempFileDisplaySink;
