//! Motion engine for the impact section
//!
//! # Layers
//!
//! - `easing` - pure progress curves mapping [0, 1] to [0, 1]
//! - `visibility` - single-shot reveal trigger driven by viewport reports
//! - `counter` - stepped counter run and its tokio-driven animator
//!
//! # Usage
//!
//! ```ignore
//! use regenera_core::motion::{CounterAnimator, Region, VisibilityTrigger};
//!
//! let mut trigger = VisibilityTrigger::observe(Some(region), 0.3, move || {
//!     let _ = tx.send(());
//! });
//!
//! // On every render pass
//! trigger.report(viewport);
//!
//! // Once the trigger fired
//! let handle = CounterAnimator::new(&config.motion).start(metrics, move |frame| {
//!     let _ = frame_tx.send(frame.to_vec());
//! });
//!
//! // On unmount, whether or not the run finished
//! handle.cancel();
//! ```

pub mod counter;
pub mod easing;
pub mod visibility;

pub use counter::{format_compact, AnimationHandle, CounterAnimator, CounterRun, Metric};
pub use visibility::{visible_fraction, Region, VisibilityTrigger};
