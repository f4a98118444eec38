pub mod archive;
pub mod message;
pub mod robot_connection;
