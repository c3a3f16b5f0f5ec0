//! Chart orchestration: the controller and dataset navigation.

pub mod controller;
pub mod switcher;

pub use controller::ChartController;
pub use switcher::{DatasetSwitcher, HeaderState};
