//! Ephemeral, per-view interaction state
//!
//! Every view owns its own instances; nothing here is shared between views.

pub mod mode;
pub mod selection;
pub mod tabs;
pub mod task;

pub use mode::DisplayMode;
pub use selection::{toggled, Selection};
pub use tabs::{TabNavigator, TabSet};
pub use task::{SimulatedTask, TaskNotice, TaskStatus};
