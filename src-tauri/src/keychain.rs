use keyring::Entry;
use log::{debug, info};
use serde::{de::DeserializeOwned, Serialize};

const SERVICE: &str = "com.audioscribe.app";

/// Keychain accounts, one per credential-backed provider
#[derive(Debug, Clone, Copy)]
pub enum ProviderAccount {
    OpenAI,
}

impl ProviderAccount {
    fn account_name(self) -> &'static str {
        match self {
            ProviderAccount::OpenAI => "openai",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KeychainError {
    #[error("Keychain error: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("Config serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Save a provider config as JSON under the app's keychain service
pub fn save_provider_config<T: Serialize>(
    account: ProviderAccount,
    config: &T,
) -> Result<(), KeychainError> {
    let entry = Entry::new(SERVICE, account.account_name())?;
    let payload = serde_json::to_string(config)?;
    entry.set_password(&payload)?;
    info!("Saved {:?} config to keychain", account);
    Ok(())
}

/// Load a provider config, `Ok(None)` when nothing is stored
pub fn load_provider_config<T: DeserializeOwned>(
    account: ProviderAccount,
) -> Result<Option<T>, KeychainError> {
    let entry = Entry::new(SERVICE, account.account_name())?;

    match entry.get_password() {
        Ok(payload) => {
            let config = serde_json::from_str(&payload)?;
            debug!("Loaded {:?} config from keychain", account);
            Ok(Some(config))
        }
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete a provider config; deleting a missing entry is not an error
pub fn delete_provider_config(account: ProviderAccount) -> Result<(), KeychainError> {
    let entry = Entry::new(SERVICE, account.account_name())?;

    match entry.delete_credential() {
        Ok(()) => {
            info!("Deleted {:?} config from keychain", account);
            Ok(())
        }
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
