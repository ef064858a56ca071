//! Creation payload construction
//!
//! Builds the `POST /create` body for one order row. Everything except the
//! row fields is fixed: warehouse parcels all ship with the same predefined
//! volume and weight, zero billing amounts in MXN, and "already_paid" as the
//! payment method. The barcode is reused as article, item barcode and place
//! barcode so the platform's scans all resolve to the same parcel.

use crate::api::models::{
    BillingDetails, BillingInfo, CreateOrderRequest, CustomLocation, Destination, Item,
    LocationDetails, PhysicalDims, Place, PlatformStation, RecipientInfo, RequestInfo, Source,
};
use crate::config::CommentStyle;
use crate::orders::address::sanitize_address;
use crate::orders::models::{LAST_NAME_PLACEHOLDER, OrderRow};
use crate::orders::phone::normalize;

const ITEM_PREDEFINED_VOLUME: u32 = 800;
const ITEM_WEIGHT_GROSS: u32 = 150;
const PLACE_PREDEFINED_VOLUME: u32 = 800;
const PLACE_DESCRIPTION: &str = "Yango Delivery almacen orden";
const CURRENCY: &str = "MXN";
const PAYMENT_METHOD: &str = "already_paid";
const LAST_MILE_POLICY: &str = "time_interval";
const DESTINATION_TYPE: &str = "custom_location";

/// Build the creation request for one row.
///
/// The destination address is sanitized; the comment field, depending on
/// the configured style, carries either the fixed label or the original
/// unsanitized address.
pub fn build_create_payload(
    row: &OrderRow,
    station_id: &str,
    comment_label: &str,
    style: CommentStyle,
) -> CreateOrderRequest {
    let comment = match style {
        CommentStyle::FixedLabel => comment_label.to_string(),
        CommentStyle::AddressEcho => {
            let extra = if row.comment.is_empty() {
                comment_label
            } else {
                row.comment.as_str()
            };
            format!("{} {}", row.address, extra)
        }
    };

    CreateOrderRequest {
        info: RequestInfo {
            operator_request_id: format!("WH-{}", row.barcode),
            comment,
        },
        last_mile_policy: LAST_MILE_POLICY.to_string(),
        source: Source {
            platform_station: PlatformStation {
                platform_id: station_id.to_string(),
            },
        },
        destination: Destination {
            kind: DESTINATION_TYPE.to_string(),
            custom_location: CustomLocation {
                details: LocationDetails {
                    full_address: sanitize_address(&row.address),
                },
            },
        },
        items: vec![Item {
            count: 1,
            name: "Order".to_string(),
            article: row.barcode.clone(),
            barcode: row.barcode.clone(),
            billing_details: BillingDetails {
                unit_price: 0,
                assessed_unit_price: 0,
                currency: CURRENCY.to_string(),
            },
            physical_dims: PhysicalDims {
                predefined_volume: ITEM_PREDEFINED_VOLUME,
                weight_gross: Some(ITEM_WEIGHT_GROSS),
            },
            place_barcode: row.barcode.clone(),
        }],
        places: vec![Place {
            physical_dims: PhysicalDims {
                predefined_volume: PLACE_PREDEFINED_VOLUME,
                weight_gross: None,
            },
            description: PLACE_DESCRIPTION.to_string(),
            barcode: row.barcode.clone(),
        }],
        billing_info: BillingInfo {
            payment_method: PAYMENT_METHOD.to_string(),
        },
        recipient_info: RecipientInfo {
            first_name: row.recipient.clone(),
            last_name: LAST_NAME_PLACEHOLDER.to_string(),
            phone: normalize(&row.phone),
        },
    }
}
