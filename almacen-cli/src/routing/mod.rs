//! Routing parameter builder
//!
//! A static form-to-JSON mapping: delivery time windows, courier limits,
//! quality and proximity factors, and excluded claim ids, assembled into
//! the payload the platform's routing configuration endpoint expects.
//! This component never talks to the network itself.

use anyhow::{Result, bail};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// "HH:MM" on the wire and in TOML input.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT)
            .map_err(|_| D::Error::custom(format!("invalid time '{}', expected HH:MM", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierLimits {
    pub min_couriers: u32,
    pub max_couriers: u32,
    pub max_orders_per_courier: u32,
}

impl Default for CourierLimits {
    fn default() -> Self {
        CourierLimits {
            min_couriers: 1,
            max_couriers: 10,
            max_orders_per_courier: 20,
        }
    }
}

/// The routing configuration form, validated before serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingParams {
    #[serde(default)]
    pub time_windows: Vec<TimeWindow>,
    #[serde(default)]
    pub courier_limits: CourierLimits,
    pub quality: f64,
    pub proximity_factor: f64,
    #[serde(default)]
    pub excluded_claims: Vec<String>,
}

impl RoutingParams {
    pub fn builder() -> RoutingParamsBuilder {
        RoutingParamsBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.time_windows.is_empty() {
            bail!("Routing error: at least one time window is required");
        }
        for window in &self.time_windows {
            if window.start >= window.end {
                bail!(
                    "Routing error: time window {}-{} must start before it ends",
                    window.start.format("%H:%M"),
                    window.end.format("%H:%M")
                );
            }
        }
        let limits = &self.courier_limits;
        if limits.min_couriers == 0 || limits.max_orders_per_courier == 0 {
            bail!("Routing error: courier limits must be nonzero");
        }
        if limits.min_couriers > limits.max_couriers {
            bail!(
                "Routing error: min_couriers {} exceeds max_couriers {}",
                limits.min_couriers,
                limits.max_couriers
            );
        }
        if !(0.0..=1.0).contains(&self.quality) {
            bail!("Routing error: quality must be within [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.proximity_factor) {
            bail!("Routing error: proximity_factor must be within [0, 1]");
        }
        if self.excluded_claims.iter().any(|id| id.trim().is_empty()) {
            bail!("Routing error: excluded claim ids must not be empty");
        }
        Ok(())
    }

    /// Serialize to the platform payload. Excluded claims are deduplicated,
    /// first occurrence kept.
    pub fn to_payload(&self) -> Result<serde_json::Value> {
        self.validate()?;
        let mut deduped = self.clone();
        let mut seen = std::collections::HashSet::new();
        deduped.excluded_claims.retain(|id| seen.insert(id.clone()));
        Ok(serde_json::to_value(&deduped)?)
    }
}

#[derive(Debug, Default)]
pub struct RoutingParamsBuilder {
    time_windows: Vec<TimeWindow>,
    courier_limits: CourierLimits,
    quality: f64,
    proximity_factor: f64,
    excluded_claims: Vec<String>,
}

impl RoutingParamsBuilder {
    pub fn window(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.time_windows.push(TimeWindow { start, end });
        self
    }

    pub fn courier_limits(mut self, min: u32, max: u32, max_orders_per_courier: u32) -> Self {
        self.courier_limits = CourierLimits {
            min_couriers: min,
            max_couriers: max,
            max_orders_per_courier,
        };
        self
    }

    pub fn quality(mut self, quality: f64) -> Self {
        self.quality = quality;
        self
    }

    pub fn proximity_factor(mut self, factor: f64) -> Self {
        self.proximity_factor = factor;
        self
    }

    pub fn excluded_claim(mut self, id: impl Into<String>) -> Self {
        self.excluded_claims.push(id.into());
        self
    }

    /// Validate and produce the params.
    pub fn build(self) -> Result<RoutingParams> {
        let params = RoutingParams {
            time_windows: self.time_windows,
            courier_limits: self.courier_limits,
            quality: self.quality,
            proximity_factor: self.proximity_factor,
            excluded_claims: self.excluded_claims,
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_payload_shape() {
        let params = RoutingParams::builder()
            .window(t(9, 0), t(13, 30))
            .courier_limits(2, 8, 25)
            .quality(0.9)
            .proximity_factor(0.4)
            .excluded_claim("claim-1")
            .build()
            .unwrap();

        assert_eq!(
            params.to_payload().unwrap(),
            json!({
                "time_windows": [{"start": "09:00", "end": "13:30"}],
                "courier_limits": {
                    "min_couriers": 2,
                    "max_couriers": 8,
                    "max_orders_per_courier": 25
                },
                "quality": 0.9,
                "proximity_factor": 0.4,
                "excluded_claims": ["claim-1"]
            })
        );
    }

    #[test]
    fn test_claims_deduplicated_first_occurrence_kept() {
        let params = RoutingParams::builder()
            .window(t(9, 0), t(12, 0))
            .quality(0.5)
            .proximity_factor(0.5)
            .excluded_claim("a")
            .excluded_claim("b")
            .excluded_claim("a")
            .build()
            .unwrap();
        let payload = params.to_payload().unwrap();
        assert_eq!(payload["excluded_claims"], json!(["a", "b"]));
    }

    #[test]
    fn test_rejects_inverted_window() {
        let err = RoutingParams::builder()
            .window(t(14, 0), t(9, 0))
            .quality(0.5)
            .proximity_factor(0.5)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("start before it ends"), "{}", err);
    }

    #[test]
    fn test_rejects_bad_limits_and_factors() {
        assert!(
            RoutingParams::builder()
                .window(t(9, 0), t(12, 0))
                .courier_limits(5, 2, 10)
                .quality(0.5)
                .proximity_factor(0.5)
                .build()
                .is_err()
        );
        assert!(
            RoutingParams::builder()
                .window(t(9, 0), t(12, 0))
                .quality(1.5)
                .proximity_factor(0.5)
                .build()
                .is_err()
        );
        assert!(
            RoutingParams::builder()
                .window(t(9, 0), t(12, 0))
                .quality(0.5)
                .proximity_factor(-0.1)
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_toml_input_round_trip() {
        let toml = r#"
            quality = 0.8
            proximity_factor = 0.3
            excluded_claims = ["c1"]

            [[time_windows]]
            start = "09:00"
            end = "13:00"

            [courier_limits]
            min_couriers = 1
            max_couriers = 4
            max_orders_per_courier = 15
        "#;
        let params: RoutingParams = toml::from_str(toml).unwrap();
        params.validate().unwrap();
        assert_eq!(params.time_windows[0].start, t(9, 0));
        assert_eq!(params.courier_limits.max_couriers, 4);
    }
}
