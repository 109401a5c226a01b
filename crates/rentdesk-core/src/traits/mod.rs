//! Core traits for entities and transports.

mod resource;
mod transport;

pub use resource::Resource;
pub use transport::Transport;
