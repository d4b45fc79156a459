//! マイク検索のエラー型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("At least one of by_name and by_index must be provided")]
    MissingSelector,

    #[error("Failed to enumerate input devices: {0}")]
    Enumeration(#[from] cpal::DevicesError),

    #[error("Failed to read device name: {0}")]
    DeviceName(#[from] cpal::DeviceNameError),

    #[error("Audio host unavailable: {0}")]
    HostUnavailable(#[from] cpal::HostUnavailable),

    #[error("Unknown audio host '{name}' (available: {available})")]
    UnknownHost { name: String, available: String },

    #[error("Failed to serialize search result: {0}")]
    Serialize(#[from] serde_json::Error),
}
