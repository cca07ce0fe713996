pub mod activity;
pub mod catalog;
pub mod scrollsync;
pub mod session;
