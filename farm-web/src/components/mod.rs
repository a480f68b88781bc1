pub mod footer;
pub mod guards;
pub mod header;
pub mod notifications;

pub use footer::Footer;
pub use guards::{AdminOnly, Protected, PublicOnly};
pub use header::Header;
pub use notifications::NotificationOverlay;
