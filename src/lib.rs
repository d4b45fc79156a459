pub mod audio;
pub mod config;
pub mod error;
pub mod registry;
pub mod search;
pub mod telemetry;
pub mod ui;
pub mod util;

pub use audio::{CpalSource, DeviceSource};
pub use config::{CliArgs, ListArgs};
pub use error::{RegistryError, Result};
pub use registry::{MicRegistry, Microphone};
pub use search::{MicrophoneList, Query, SearchOutcome};
