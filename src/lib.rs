pub mod dispatch;
pub mod display;
pub mod inject;
pub mod keys;
pub mod logging;
pub mod overlay;
pub mod registry;
pub mod target;
