//! Wire shapes for the HTTP API and their mapping from domain types.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};

use orderdesk_core::{Entity, Money, OrderId, ProductId};
use orderdesk_products::{Product, ProductCategory};
use orderdesk_sales::{Order, OrderStatus, PlaceOrder};

// -------------------------
// Request DTOs
// -------------------------

/// Decode the first JSON value in `body`; anything after it is ignored.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .next()
        .unwrap_or_else(|| Err(serde_json::Error::custom("empty request body")))
}

/// `null` reads as the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body of `POST /order`.
///
/// Absent fields take their zero value, and any other order fields a client
/// sends (value, status, ...) are ignored because placement recomputes them.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub id: OrderId,
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: ProductId,
    #[serde(deserialize_with = "null_as_default")]
    pub prod_quantity: i64,
}

impl From<PlaceOrderRequest> for PlaceOrder {
    fn from(req: PlaceOrderRequest) -> Self {
        PlaceOrder {
            order_id: req.id,
            product_id: req.product_id,
            quantity: req.prod_quantity,
        }
    }
}

/// Body of `PUT /order/status`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub dispatch_date: Option<String>,
}

impl StatusUpdateRequest {
    /// An empty dispatch date means none.
    pub fn dispatch_date(&self) -> Option<String> {
        self.dispatch_date.clone().filter(|d| !d.is_empty())
    }
}

/// Query string of `PUT /order/status`.
#[derive(Debug, Default)]
pub struct StatusUpdateQuery {
    pub order_id: OrderId,
}

impl StatusUpdateQuery {
    pub const ORDER_ID_PARAM: &'static str = "orderID";

    /// The first `orderID` wins; none means the empty id.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let order_id = pairs
            .into_iter()
            .find(|(key, _)| key == Self::ORDER_ID_PARAM)
            .map(|(_, value)| OrderId::from(value))
            .unwrap_or_default();
        Self { order_id }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub availability: bool,
    pub price: Money,
    pub category: ProductCategory,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id().clone(),
            name: p.name().to_string(),
            availability: p.is_available(),
            price: p.unit_price(),
            category: p.category().clone(),
        }
    }
}

/// The premium flag is internal and not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: OrderId,
    pub product_id: ProductId,
    pub order_value: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_date: Option<String>,
    pub order_status: OrderStatus,
    pub prod_quantity: u32,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id().clone(),
            product_id: o.product_id().clone(),
            order_value: o.order_value(),
            dispatch_date: o.dispatch_date().map(str::to_string),
            order_status: o.status(),
            prod_quantity: o.quantity().get(),
        }
    }
}

pub fn catalogue_to_json(catalogue: BTreeMap<ProductId, Product>) -> BTreeMap<ProductId, ProductResponse> {
    catalogue
        .into_iter()
        .map(|(id, product)| (id, ProductResponse::from(product)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_products::seed_products;
    use orderdesk_sales::place;
    use serde_json::json;

    #[test]
    fn place_request_defaults_missing_fields() {
        let req: PlaceOrderRequest =
            serde_json::from_value(json!({ "productId": "2", "orderValue": 999, "orderStatus": "Completed" }))
                .unwrap();
        assert_eq!(req.id.as_str(), "");
        assert_eq!(req.prod_quantity, 0);

        let cmd = PlaceOrder::from(req);
        assert_eq!(cmd.product_id.as_str(), "2");
    }

    #[test]
    fn order_json_omits_absent_dispatch_date_and_premium_flag() {
        let cmd = PlaceOrder {
            order_id: OrderId::new("o-1"),
            product_id: ProductId::new("1"),
            quantity: 2,
        };
        let order = place(&cmd, |id| seed_products().into_iter().find(|p| p.id() == id)).unwrap();

        let body = serde_json::to_value(OrderResponse::from(order)).unwrap();
        assert_eq!(
            body,
            json!({
                "id": "o-1",
                "productId": "1",
                "orderValue": 18.0,
                "orderStatus": "Placed",
                "prodQuantity": 2,
            })
        );
    }

    #[test]
    fn product_json_shape() {
        let product = seed_products().swap_remove(0);
        let body = serde_json::to_value(ProductResponse::from(product)).unwrap();
        assert_eq!(
            body,
            json!({
                "id": "1",
                "name": "Product 1",
                "availability": true,
                "price": 10.0,
                "category": "Premium",
            })
        );
    }

    #[test]
    fn decode_reads_null_as_zero_value() {
        let req: PlaceOrderRequest =
            decode(br#"{"id":null,"productId":"2","prodQuantity":null}"#).unwrap();
        assert_eq!(req.id.as_str(), "");
        assert_eq!(req.product_id.as_str(), "2");
        assert_eq!(req.prod_quantity, 0);

        let req: StatusUpdateRequest = decode(br#"{"status":null,"dispatchDate":null}"#).unwrap();
        assert_eq!(req.status, "");
        assert_eq!(req.dispatch_date(), None);
    }

    #[test]
    fn decode_ignores_bytes_after_first_value() {
        let req: StatusUpdateRequest = decode(br#"{"status":"Cancelled"} trailing"#).unwrap();
        assert_eq!(req.status, "Cancelled");
    }

    #[test]
    fn decode_rejects_empty_and_non_object_bodies() {
        assert!(decode::<StatusUpdateRequest>(b"").is_err());
        assert!(decode::<StatusUpdateRequest>(b"   ").is_err());
        assert!(decode::<StatusUpdateRequest>(b"42").is_err());
        assert!(decode::<PlaceOrderRequest>(b"garbage").is_err());
    }

    #[test]
    fn first_order_id_param_wins() {
        let pairs = vec![
            ("status".to_string(), "x".to_string()),
            ("orderID".to_string(), "o".to_string()),
            ("orderID".to_string(), "zz".to_string()),
        ];
        assert_eq!(StatusUpdateQuery::from_pairs(pairs).order_id.as_str(), "o");
        assert_eq!(StatusUpdateQuery::from_pairs(Vec::new()).order_id.as_str(), "");
    }

    #[test]
    fn empty_dispatch_date_is_none() {
        let req: StatusUpdateRequest =
            serde_json::from_value(json!({ "status": "Dispatched", "dispatchDate": "" })).unwrap();
        assert_eq!(req.dispatch_date(), None);
    }
}
