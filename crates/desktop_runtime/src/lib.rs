pub mod apps;
pub mod boot;
pub mod components;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;

pub use components::DesktopShell;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
