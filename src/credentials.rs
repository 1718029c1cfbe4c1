//! Quote API key storage in the system keychain.
//!
//! `tickertape store-key` writes the key once; at startup
//! [`populate_env_from_keychain`] exports it as `TWELVEDATA_API_KEY` so
//! [`crate::config::fetch_config`] finds it like any other variable.

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::TickertapeError;

/// Keychain service name.
const SERVICE: &str = "tickertape";

/// Keychain entry holding the Twelve Data key.
const API_KEY_ENTRY: &str = "twelvedata_api_key";

/// Environment variable the config layer reads the key from.
pub const API_KEY_VAR: &str = "TWELVEDATA_API_KEY";

fn api_key_entry() -> crate::Result<keyring::Entry> {
    keyring::Entry::new(SERVICE, API_KEY_ENTRY)
        .map_err(|e| TickertapeError::Config(format!("keyring entry error: {e}")))
}

/// Reads the stored API key. `Ok(None)` means nothing is stored.
pub fn load_api_key() -> crate::Result<Option<Zeroizing<String>>> {
    match api_key_entry()?.get_password() {
        Ok(key) => Ok(Some(Zeroizing::new(key))),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(TickertapeError::Config(format!(
            "failed to read keychain entry: {e}"
        ))),
    }
}

/// Stores `key` in the keychain, replacing any previous value.
pub fn save_api_key(key: &str) -> crate::Result<()> {
    api_key_entry()?
        .set_password(key)
        .map_err(|e| TickertapeError::Config(format!("failed to save to keychain: {e}")))
}

/// Whether the keychain should be consulted given the current value of
/// [`API_KEY_VAR`]. Empty counts as unset, as it does for the config layer.
fn needs_keychain(current: Option<&str>) -> bool {
    current.is_none_or(str::is_empty)
}

/// Exports the stored API key unless the environment already has one.
///
/// Call after logging is installed and before any task is spawned. A
/// keychain read failure is logged and otherwise ignored; the config layer
/// reports the missing key.
pub fn populate_env_from_keychain() {
    if !needs_keychain(std::env::var(API_KEY_VAR).ok().as_deref()) {
        return;
    }

    match load_api_key() {
        Ok(Some(key)) => {
            debug!(var = API_KEY_VAR, "Loaded API key from keychain");
            // SAFETY: called from main before the runtime spawns tasks.
            unsafe {
                std::env::set_var(API_KEY_VAR, key.as_str());
            }
        }
        Ok(None) => debug!("No API key in keychain"),
        Err(e) => warn!(error = %e, "Keychain unavailable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keychain_consulted_only_without_a_usable_key() {
        assert!(needs_keychain(None));
        assert!(needs_keychain(Some("")));
        assert!(!needs_keychain(Some("abc123")));
    }
}
