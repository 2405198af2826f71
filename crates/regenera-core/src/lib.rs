pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod interaction;
pub mod motion;
pub mod route;

pub use auth::{AuthEvent, AuthEventKind, IdentityProvider, Session};
pub use config::{AppConfig, EasingType, MotionConfig};
pub use error::{Error, Result};
pub use route::Route;
