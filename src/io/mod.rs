//! I/O layer: the automation host abstraction and its platform backends.
//! `automation` defines the narrow capability traits the export logic is
//! written against; `com` drives a real PowerPoint over COM on Windows.
pub mod automation;
pub use automation::{AutomationHost, Dispatch, HostError, UnsupportedHost, Variant};

#[cfg(windows)]
pub mod com;
#[cfg(windows)]
pub use com::{ComHost, ComObject};

#[cfg(windows)]
pub type PlatformHost = ComHost;
#[cfg(not(windows))]
pub type PlatformHost = UnsupportedHost;

/// Host for the current platform: COM on Windows, a host that refuses every
/// connection elsewhere.
pub fn platform_host() -> Result<PlatformHost, HostError> {
    #[cfg(windows)]
    {
        ComHost::new()
    }
    #[cfg(not(windows))]
    {
        Ok(UnsupportedHost)
    }
}
