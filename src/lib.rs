pub mod config;
pub mod data;
pub mod engine;
pub mod layout;
pub mod net;
pub mod page;
pub mod render;
