//! Environment signals read on demand.

use crate::constants::CLOUD_INSTALLATION_ENV;

/// True when running as a cloud installation.  Not cached; every call
/// re-reads the environment.
pub fn is_cloud() -> bool {
    std::env::var(CLOUD_INSTALLATION_ENV)
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}
