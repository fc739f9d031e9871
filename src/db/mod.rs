pub mod connection;
pub mod lookup;
pub mod migration;
