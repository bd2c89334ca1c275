pub mod server;
pub mod servers;
