pub mod fetch;
pub mod loader;
