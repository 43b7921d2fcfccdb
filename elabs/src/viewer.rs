//! Browser launch for the web visualizer.

use crate::core::ElabsError;

/// Where the visualizer frontend listens when run locally
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3001";

/// Opens a URL somewhere a user can see it
pub trait Launcher {
    fn open(&self, url: &str) -> Result<(), ElabsError>;
}

/// The operating system's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ElabsError> {
        open::that(url).map_err(|source| ElabsError::Browser {
            url: url.to_string(),
            source,
        })
    }
}
