use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::ValueSpecifier;
use crate::error::{OverlayError, OverlayResult};

use super::style::{OverlayBoxStyle, Platform, PlatformChrome};

pub const OVERLAY_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Host-facing overlay setup.
///
/// Serializable so applications can persist the overlay look next to their
/// chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayConfig {
    #[serde(default)]
    pub specifier: ValueSpecifier,
    #[serde(default)]
    pub ignore_zero: bool,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub style: OverlayBoxStyle,
    /// Replaces the platform chrome table entry when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome: Option<PlatformChrome>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            specifier: ValueSpecifier::default(),
            ignore_zero: false,
            platform: Platform::current(),
            style: OverlayBoxStyle::default(),
            chrome: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: OverlayConfig,
}

impl OverlayConfig {
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_specifier(mut self, specifier: impl Into<ValueSpecifier>) -> Self {
        self.specifier = specifier.into();
        self
    }

    #[must_use]
    pub fn with_ignore_zero(mut self, ignore_zero: bool) -> Self {
        self.ignore_zero = ignore_zero;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: OverlayBoxStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_chrome(mut self, chrome: PlatformChrome) -> Self {
        self.chrome = Some(chrome);
        self
    }

    #[must_use]
    pub fn resolved_chrome(&self) -> PlatformChrome {
        self.chrome
            .unwrap_or_else(|| PlatformChrome::for_platform(self.platform))
    }

    /// Rejects unusable geometry or colors. Unparseable specifiers are kept:
    /// they render values unformatted.
    pub fn validate(&self) -> OverlayResult<()> {
        if let Err(err) = self
            .style
            .validate()
            .and_then(|()| self.resolved_chrome().validate())
        {
            warn!(%err, "rejecting overlay config");
            return Err(err);
        }
        if self.specifier.is_fallback() {
            warn!(
                specifier = %self.specifier,
                "overlay values will be rendered without formatting"
            );
        }
        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> OverlayResult<String> {
        let payload = OverlayConfigJsonContractV1 {
            schema_version: OVERLAY_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            OverlayError::InvalidConfig(format!("failed to serialize overlay config v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned v1 contract.
    ///
    /// A document carrying `schema_version` is always read as a contract, so
    /// a malformed contract is an error rather than a default config.
    pub fn from_json_compat_str(input: &str) -> OverlayResult<Self> {
        let document: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            OverlayError::InvalidConfig(format!("failed to parse overlay config json: {e}"))
        })?;

        let config = match document.get("schema_version") {
            Some(version) => {
                if version.as_u64() != Some(u64::from(OVERLAY_CONFIG_JSON_SCHEMA_V1)) {
                    return Err(OverlayError::InvalidConfig(format!(
                        "unsupported overlay config schema version: {version}"
                    )));
                }
                let payload: OverlayConfigJsonContractV1 = serde_json::from_value(document)
                    .map_err(|e| {
                        OverlayError::InvalidConfig(format!(
                            "failed to parse overlay config contract v1: {e}"
                        ))
                    })?;
                payload.config
            }
            None => serde_json::from_value::<Self>(document).map_err(|e| {
                OverlayError::InvalidConfig(format!("failed to parse overlay config json: {e}"))
            })?,
        };
        config.validate()?;
        Ok(config)
    }
}
