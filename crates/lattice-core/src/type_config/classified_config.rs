use crate::type_config::ConfigKind;
use crate::type_config::TypeConfig;

/// A [`TypeConfig`] paired with the [`ConfigKind`] it was classified as at
/// ingestion.
#[derive(Clone, Debug)]
pub struct ClassifiedConfig {
    config: TypeConfig,
    kind: ConfigKind,
}
impl ClassifiedConfig {
    /// Classify `config`, or return `None` if it is not schema-relevant.
    pub fn classify(config: TypeConfig) -> Option<Self> {
        let kind = ConfigKind::classify(&config)?;
        Some(Self { config, kind })
    }

    pub fn config(&self) -> &TypeConfig {
        &self.config
    }

    pub fn into_config(self) -> TypeConfig {
        self.config
    }

    pub fn kind(&self) -> ConfigKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.config.name.as_str()
    }
}
