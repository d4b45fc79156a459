use crate::error::{RegistryError, Result};
use cpal::traits::{DeviceTrait, HostTrait};

/// 入力デバイス名を列挙順に返すもの
pub trait DeviceSource {
    fn input_device_names(&self) -> Result<Vec<String>>;
}

/// cpal のホストから入力デバイスを列挙する
pub struct CpalSource {
    host: cpal::Host,
}

impl CpalSource {
    /// ホスト名を指定しなければ既定のホストを使う
    pub fn new(host_name: Option<&str>) -> Result<Self> {
        let host = match host_name {
            None => cpal::default_host(),
            Some(name) => {
                let hosts = cpal::available_hosts();
                let id = hosts
                    .iter()
                    .find(|id| id.name().eq_ignore_ascii_case(name))
                    .copied()
                    .ok_or_else(|| RegistryError::UnknownHost {
                        name: name.to_string(),
                        available: hosts
                            .iter()
                            .map(|id| id.name())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })?;
                cpal::host_from_id(id)?
            }
        };
        tracing::debug!(host = host.id().name(), "audio host selected");
        Ok(Self { host })
    }

    pub fn host_name(&self) -> &'static str {
        self.host.id().name()
    }

    /// 既定の入力デバイス名 (無ければ None、名前が読めなければエラー)
    pub fn default_input_name(&self) -> Result<Option<String>> {
        default_name(self.host.default_input_device().map(|dev| dev.name()))
    }
}

fn default_name(
    name: Option<std::result::Result<String, cpal::DeviceNameError>>,
) -> Result<Option<String>> {
    name.transpose().map_err(RegistryError::from)
}

impl DeviceSource for CpalSource {
    fn input_device_names(&self) -> Result<Vec<String>> {
        self.host
            .input_devices()?
            .map(|dev| dev.name().map_err(RegistryError::from))
            .collect()
    }
}
