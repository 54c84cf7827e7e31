pub mod errors;
pub mod logging;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, HostError, ShellError};
pub use notifications::{Notification, NotificationLevel, ToastLength};
pub use types::Color;

pub type Result<T> = std::result::Result<T, ShellError>;
