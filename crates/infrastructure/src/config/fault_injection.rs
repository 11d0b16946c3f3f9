//! Fault injection settings.

use fault::{Fault, FaultConfig, FaultError, Injector, InjectorKind, PathFilter};
use serde::{Deserialize, Serialize};

/// Fault injection settings as read from file, environment, or flags.
///
/// Nothing here is validated until [`FaultAppConfig::build_fault`] runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultAppConfig {
    /// Enable fault injection
    #[serde(default)]
    pub enabled: bool,

    /// Fraction of eligible requests to fault (0.0 to 1.0)
    #[serde(default, alias = "percent")]
    pub participation: f64,

    /// Fault kind: "error" or "slowness"
    #[serde(default, alias = "type")]
    pub kind: InjectorKind,

    /// Status code returned by the error fault
    #[serde(default = "default_status_code")]
    pub status_code: u16,

    /// Latency added by the slowness fault, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: i64,

    /// Extra paths exempt from faults; `/ping` and `/health` are always exempt
    #[serde(default)]
    pub blocked_paths: Vec<String>,
}

const fn default_status_code() -> u16 {
    500
}

const fn default_latency_ms() -> i64 {
    1
}

impl Default for FaultAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            participation: 0.0,
            kind: InjectorKind::default(),
            status_code: default_status_code(),
            latency_ms: default_latency_ms(),
            blocked_paths: Vec::new(),
        }
    }
}

impl FaultAppConfig {
    /// Validate the settings and build the shared [`Fault`] policy.
    ///
    /// Validation happens even when `enabled` is false so a bad setting
    /// never waits until someone flips the switch.
    pub fn build_fault(&self) -> Result<Fault, FaultError> {
        let injector = Injector::from_kind(self.kind, self.status_code, self.latency_ms)?;
        let config = FaultConfig::with_filter(
            injector,
            self.enabled,
            self.participation,
            PathFilter::with_defaults(self.blocked_paths.iter().cloned()),
        )?;
        Ok(Fault::new(config))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn defaults_match_original_flags() {
        let config = FaultAppConfig::default();
        assert!(!config.enabled);
        assert!(config.participation.abs() < f64::EPSILON);
        assert_eq!(config.kind, InjectorKind::Error);
        assert_eq!(config.status_code, 500);
        assert_eq!(config.latency_ms, 1);
        assert!(config.blocked_paths.is_empty());
    }

    #[test]
    fn build_error_fault() {
        let config = FaultAppConfig {
            enabled: true,
            participation: 1.0,
            status_code: 503,
            ..Default::default()
        };

        let fault = config.build_fault().unwrap();

        assert_eq!(fault.injector(), &Injector::error(503).unwrap());
        assert!(fault.decide("/data").is_faulted());
        assert!(!fault.decide("/health").is_faulted());
        assert!(!fault.decide("/ping").is_faulted());
    }

    #[test]
    fn build_slowness_fault() {
        let config = FaultAppConfig {
            kind: InjectorKind::Slowness,
            latency_ms: 150,
            ..Default::default()
        };

        let fault = config.build_fault().unwrap();

        assert_eq!(fault.injector(), &Injector::slow(Duration::from_millis(150)));
    }

    #[test]
    fn extra_blocked_paths_keep_defaults() {
        let config = FaultAppConfig {
            blocked_paths: vec!["/ready".to_string()],
            ..Default::default()
        };

        let fault = config.build_fault().unwrap();
        let blocked = fault.config().blocked_paths();

        assert!(blocked.is_blocked("/ready"));
        assert!(blocked.is_blocked("/health"));
        assert!(blocked.is_blocked("/ping"));
    }

    #[test]
    fn invalid_settings_are_rejected_even_when_disabled() {
        let cases = [
            FaultAppConfig {
                participation: 1.5,
                ..Default::default()
            },
            FaultAppConfig {
                participation: -0.1,
                ..Default::default()
            },
            FaultAppConfig {
                status_code: 700,
                ..Default::default()
            },
            FaultAppConfig {
                kind: InjectorKind::Slowness,
                latency_ms: -10,
                ..Default::default()
            },
        ];

        for config in cases {
            let err = config.build_fault().unwrap_err();
            assert!(err.is_invalid_config(), "{config:?}");
        }
    }

    #[test]
    fn deserializes_original_flag_names() {
        let json = r#"{"enabled": true, "percent": 0.4, "type": "slowness", "latency_ms": 20}"#;
        let config: FaultAppConfig = serde_json::from_str(json).unwrap();

        assert!(config.enabled);
        assert!((config.participation - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.kind, InjectorKind::Slowness);
        assert_eq!(config.latency_ms, 20);
        assert_eq!(config.status_code, 500);
    }
}
