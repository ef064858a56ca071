//! Wire types for the delivery platform API
//!
//! Shapes only; the values that go into a creation request are decided by
//! the payload builder in `crate::orders::payload`.

use serde::{Deserialize, Serialize};

/// Body of `POST {base_url}/create?dump=eventlog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub info: RequestInfo,
    pub last_mile_policy: String,
    pub source: Source,
    pub destination: Destination,
    pub items: Vec<Item>,
    pub places: Vec<Place>,
    pub billing_info: BillingInfo,
    pub recipient_info: RecipientInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestInfo {
    /// Operator-side identifier, `WH-{barcode}`.
    pub operator_request_id: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub platform_station: PlatformStation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStation {
    pub platform_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "type")]
    pub kind: String,
    pub custom_location: CustomLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomLocation {
    pub details: LocationDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetails {
    pub full_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub count: u32,
    pub name: String,
    pub article: String,
    pub barcode: String,
    pub billing_details: BillingDetails,
    pub physical_dims: PhysicalDims,
    pub place_barcode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub unit_price: u32,
    pub assessed_unit_price: u32,
    pub currency: String,
}

/// Item dims carry a gross weight; place dims only a predefined volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalDims {
    pub predefined_volume: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_gross: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub physical_dims: PhysicalDims,
    pub description: String,
    pub barcode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingInfo {
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Body of `POST {base_url}/confirm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub offer_id: String,
}

/// The slice of a 200 creation response this tool cares about: the offers
/// proposed by the platform. Everything else in the body is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(default)]
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Offer {
    pub offer_id: String,
}

impl CreateOrderResponse {
    /// First offer's identifier, if the platform proposed any.
    pub fn first_offer_id(&self) -> Option<&str> {
        self.offers.first().map(|o| o.offer_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_offer_id_present() {
        let response: CreateOrderResponse =
            serde_json::from_str(r#"{"offers":[{"offer_id":"abc"},{"offer_id":"def"}]}"#).unwrap();
        assert_eq!(response.first_offer_id(), Some("abc"));
    }

    #[test]
    fn test_empty_or_missing_offers() {
        let response: CreateOrderResponse = serde_json::from_str(r#"{"offers":[]}"#).unwrap();
        assert_eq!(response.first_offer_id(), None);

        let response: CreateOrderResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(response.first_offer_id(), None);
    }

    #[test]
    fn test_unknown_response_fields_ignored() {
        let response: CreateOrderResponse = serde_json::from_str(
            r#"{"offers":[{"offer_id":"abc","expires_at":"2026-01-01T00:00:00Z"}],"request_id":"r1"}"#,
        )
        .unwrap();
        assert_eq!(response.first_offer_id(), Some("abc"));
    }

    #[test]
    fn test_confirm_request_wire_shape() {
        let body = serde_json::to_value(ConfirmRequest {
            offer_id: "abc".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"offer_id": "abc"}));
    }
}
