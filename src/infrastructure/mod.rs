pub mod config;
pub mod gateway;
pub mod notify;
pub mod seed;
pub mod store;
