pub mod config;
pub mod consts;
pub mod error;
pub mod notify;
pub mod render;
pub mod resize;
pub mod scheduler;
pub mod store;
pub mod timer;
pub mod view;
pub mod viewport;
pub mod worker;
