#[allow(clippy::module_inception)]
mod status;

pub use status::StatusBar;
