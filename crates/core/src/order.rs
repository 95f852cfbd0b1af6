//! Purchase validation and order confirmation.
//!
//! A purchase goes through [`validate`], a single pass that stops at the first
//! failing check:
//!
//! 1. SKU present
//! 2. SKU names a product
//! 3. quantity is a whole number >= 1
//! 4. payment token present
//! 5. size given when the product has more than one
//! 6. size is one the product comes in
//! 7. enough stock in that size
//!
//! A [`ValidatedPurchase`] is then turned into an [`OrderConfirmation`] by an
//! [`OrderSynthesizer`]. Nothing is charged, stored or decremented: the
//! catalog's inventory is read to validate and never written.

use std::borrow::Cow;

use chrono::{DateTime, Days, NaiveDate, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::catalog::{Catalog, Product};
use crate::types::{CURRENCY_CODE, OrderId, Price, Sku};

/// Default days between ordering and delivery.
pub const DEFAULT_DELIVERY_DAYS: u32 = 5;

const ORDER_PLACED_MESSAGE: &str = "Order placed successfully!";

/// A purchase request as posted by a shopper or agent.
///
/// Fields are kept as raw JSON values so any well-formed body reaches
/// [`validate`]: `qty` may be a number or a numeric string, and `size: 10`
/// means the same as `size: "10"`. The payment token is kept secret so it
/// never shows up in `Debug` output or logs.
#[derive(Debug, Default, Deserialize)]
pub struct PurchaseRequest {
    pub sku: Option<Value>,
    pub qty: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_secret")]
    pub pay_token: Option<SecretString>,
    pub size: Option<Value>,
    pub email: Option<Value>,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(scalar_text(value.as_ref()).map(|token| SecretString::from(token.into_owned())))
}

/// Why a purchase was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("SKU required")]
    MissingSku,

    #[error("Product not found")]
    ProductNotFound(String),

    #[error("Invalid quantity")]
    InvalidQuantity,

    #[error("Payment token required")]
    MissingPaymentToken,

    #[error("Size required")]
    SizeRequired { available_sizes: Vec<String> },

    #[error("Invalid size")]
    InvalidSize { available_sizes: Vec<String> },

    #[error("Insufficient inventory")]
    InsufficientInventory { available_quantity: u32 },
}

impl OrderError {
    /// Sizes the caller can choose from, for size errors.
    #[must_use]
    pub fn available_sizes(&self) -> Option<&[String]> {
        match self {
            Self::SizeRequired { available_sizes } | Self::InvalidSize { available_sizes } => {
                Some(available_sizes)
            }
            _ => None,
        }
    }

    /// Stock actually on hand, for inventory errors.
    #[must_use]
    pub const fn available_quantity(&self) -> Option<u32> {
        match self {
            Self::InsufficientInventory { available_quantity } => Some(*available_quantity),
            _ => None,
        }
    }
}

/// A purchase that passed every check.
#[derive(Debug, Clone)]
pub struct ValidatedPurchase<'a> {
    pub product: &'a Product,
    pub qty: u32,
    /// Catalog label of the resolved size.
    pub size: &'a str,
    /// Trimmed email as given; it is only echoed back, never checked.
    pub email: Option<String>,
}

/// Validate a purchase against the catalog.
///
/// # Errors
///
/// Returns the [`OrderError`] for the first check that fails.
pub fn validate<'a>(
    catalog: &'a Catalog,
    request: &PurchaseRequest,
) -> Result<ValidatedPurchase<'a>, OrderError> {
    let sku = scalar_text(request.sku.as_ref());
    let sku = non_blank(sku.as_deref()).ok_or(OrderError::MissingSku)?;

    let product = catalog
        .find(sku)
        .ok_or_else(|| OrderError::ProductNotFound(sku.to_string()))?;

    let qty = parse_quantity(request.qty.as_ref()).ok_or(OrderError::InvalidQuantity)?;

    if request
        .pay_token
        .as_ref()
        .is_none_or(|token| token.expose_secret().trim().is_empty())
    {
        return Err(OrderError::MissingPaymentToken);
    }

    let size = match request.size.as_ref().filter(|v| !v.is_null()) {
        Some(value) => Some(scalar_text(Some(value)).ok_or_else(|| invalid_size(product))?),
        None => None,
    };
    let size = resolve_size(product, non_blank(size.as_deref()))?;

    let available_quantity = product.stock(size);
    let qty = u32::try_from(qty)
        .ok()
        .filter(|q| *q <= available_quantity)
        .ok_or(OrderError::InsufficientInventory { available_quantity })?;

    let email = scalar_text(request.email.as_ref());
    let email = non_blank(email.as_deref()).map(|e| e.trim().to_string());

    Ok(ValidatedPurchase {
        product,
        qty,
        size,
        email,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Read a loosely typed field as text. Numbers and booleans are spelled out;
/// null, arrays and objects count as absent.
fn scalar_text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Accept integers >= 1, whether sent as a JSON number or a numeric string.
///
/// Values past `u64::MAX` saturate; they can never be in stock anyway.
fn parse_quantity(value: Option<&Value>) -> Option<u64> {
    let qty = match value? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 1.0).map(|f| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                // float to int casts saturate
                let whole = f as u64;
                whole
            })
        })?,
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<u64>() {
                Ok(qty) => qty,
                Err(_) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => u64::MAX,
                Err(_) => return None,
            }
        }
        _ => return None,
    };

    Some(qty).filter(|q| *q >= 1)
}

fn invalid_size(product: &Product) -> OrderError {
    OrderError::InvalidSize {
        available_sizes: product.sizes.clone(),
    }
}

fn resolve_size<'a>(product: &'a Product, requested: Option<&str>) -> Result<&'a str, OrderError> {
    let Some(requested) = requested else {
        return product.sole_size().ok_or_else(|| OrderError::SizeRequired {
            available_sizes: product.sizes.clone(),
        });
    };

    product
        .size_label(requested)
        .ok_or_else(|| invalid_size(product))
}

/// Lifecycle state of a synthesized order. Orders are only ever confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
}

/// The confirmation returned for a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub sku: Sku,
    pub product_name: String,
    pub qty: u32,
    pub size: String,
    pub unit_price: Price,
    pub total_price: u64,
    pub currency: &'static str,
    pub delivery_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_confirmation: Option<String>,
    pub message: &'static str,
}

/// Turns validated purchases into order confirmations.
#[derive(Debug, Clone, Copy)]
pub struct OrderSynthesizer {
    delivery_days: u32,
}

impl Default for OrderSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIVERY_DAYS)
    }
}

impl OrderSynthesizer {
    #[must_use]
    pub const fn new(delivery_days: u32) -> Self {
        Self { delivery_days }
    }

    #[must_use]
    pub const fn delivery_days(&self) -> u32 {
        self.delivery_days
    }

    /// Confirm a purchase now, with a freshly minted order ID.
    #[must_use]
    pub fn confirm(&self, purchase: &ValidatedPurchase<'_>) -> OrderConfirmation {
        self.confirm_at(purchase, Utc::now(), OrderId::generate())
    }

    /// Confirm a purchase as of `now` under `order_id`.
    #[must_use]
    pub fn confirm_at(
        &self,
        purchase: &ValidatedPurchase<'_>,
        now: DateTime<Utc>,
        order_id: OrderId,
    ) -> OrderConfirmation {
        let product = purchase.product;
        let today = now.date_naive();
        let delivery_date = today
            .checked_add_days(Days::new(u64::from(self.delivery_days)))
            .unwrap_or(NaiveDate::MAX);

        OrderConfirmation {
            order_id,
            status: OrderStatus::Confirmed,
            sku: product.sku.clone(),
            product_name: product.name.clone(),
            qty: purchase.qty,
            size: purchase.size.to_string(),
            unit_price: product.price,
            total_price: product.price.total_for(purchase.qty),
            currency: CURRENCY_CODE,
            delivery_date,
            created_at: now,
            email_confirmation: purchase
                .email
                .as_ref()
                .map(|email| format!("Order confirmation will be sent to {email}")),
            message: ORDER_PLACED_MESSAGE,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn request(body: Value) -> PurchaseRequest {
        serde_json::from_value(body).unwrap()
    }

    fn check(body: Value) -> Result<ValidatedPurchase<'static>, OrderError> {
        static CATALOG: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();
        let catalog = CATALOG.get_or_init(Catalog::builtin);
        validate(catalog, &request(body))
    }

    #[test]
    fn test_valid_hoodie_purchase() {
        let purchase =
            check(json!({"sku": "HOODIE-BLACK-001", "qty": 1, "size": "L", "pay_token": "demo"}))
                .unwrap();
        assert_eq!(purchase.product.sku.as_str(), "HOODIE-BLACK-001");
        assert_eq!(purchase.qty, 1);
        assert_eq!(purchase.size, "L");
        assert!(purchase.email.is_none());
    }

    #[test]
    fn test_one_size_product_needs_no_size() {
        let purchase = check(json!({"sku": "HAT-BLACK-001", "qty": 1, "pay_token": "demo"})).unwrap();
        assert_eq!(purchase.size, "OS");
    }

    #[test]
    fn test_sku_case_insensitive() {
        let purchase =
            check(json!({"sku": "hat-red-002", "qty": 2, "pay_token": "demo"})).unwrap();
        assert_eq!(purchase.product.sku.as_str(), "HAT-RED-002");
    }

    #[test]
    fn test_missing_sku() {
        assert_eq!(
            check(json!({"qty": 1, "pay_token": "demo"})).unwrap_err(),
            OrderError::MissingSku
        );
        assert_eq!(
            check(json!({"sku": "", "qty": 1, "pay_token": "demo"})).unwrap_err(),
            OrderError::MissingSku
        );
    }

    #[test]
    fn test_unknown_sku() {
        let err = check(json!({"sku": "INVALID-SKU", "qty": 1, "pay_token": "demo"})).unwrap_err();
        assert_eq!(err, OrderError::ProductNotFound("INVALID-SKU".to_string()));
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn test_invalid_quantities_for_every_sku() {
        for product in Catalog::builtin().products() {
            let sku = product.sku.as_str();
            for qty in [json!(0), json!(-1), json!(null), json!("two"), json!(1.5), json!(true)] {
                let err = check(json!({"sku": sku, "qty": qty, "pay_token": "demo"})).unwrap_err();
                assert_eq!(err, OrderError::InvalidQuantity, "{sku} qty={qty}");
            }
            let err = check(json!({"sku": sku, "pay_token": "demo"})).unwrap_err();
            assert_eq!(err, OrderError::InvalidQuantity, "{sku} without qty");
        }
    }

    #[test]
    fn test_quantity_forms_accepted() {
        for qty in [json!(3), json!("3"), json!(3.0), json!(" 3 ")] {
            let purchase =
                check(json!({"sku": "HAT-WHITE-003", "qty": qty, "pay_token": "demo"})).unwrap();
            assert_eq!(purchase.qty, 3);
        }
    }

    #[test]
    fn test_quantity_checked_before_payment_token() {
        assert_eq!(
            check(json!({"sku": "HAT-WHITE-003", "qty": 0})).unwrap_err(),
            OrderError::InvalidQuantity
        );
    }

    #[test]
    fn test_missing_payment_token() {
        for body in [
            json!({"sku": "HOODIE-BLACK-001", "qty": 1}),
            json!({"sku": "HOODIE-BLACK-001", "qty": 1, "pay_token": ""}),
            json!({"sku": "HOODIE-BLACK-001", "qty": 1, "pay_token": null}),
        ] {
            assert_eq!(check(body).unwrap_err(), OrderError::MissingPaymentToken);
        }
    }

    #[test]
    fn test_size_required_lists_sizes() {
        let err = check(json!({"sku": "HOODIE-NAVY-003", "qty": 1, "pay_token": "demo"})).unwrap_err();
        assert_eq!(err.to_string(), "Size required");
        assert_eq!(
            err.available_sizes().unwrap(),
            ["M".to_string(), "L".to_string(), "XL".to_string()]
        );
    }

    #[test]
    fn test_invalid_size() {
        let err = check(json!({"sku": "HOODIE-NAVY-003", "qty": 1, "size": "S", "pay_token": "demo"}))
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidSize { .. }));
        assert_eq!(err.available_sizes().unwrap().len(), 3);

        let err = check(json!({"sku": "HAT-RED-002", "qty": 1, "size": "XL", "pay_token": "demo"}))
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidSize {
                available_sizes: vec!["OS".to_string()]
            }
        );
    }

    #[test]
    fn test_size_matching_ignores_case() {
        let purchase =
            check(json!({"sku": "HOODIE-BLACK-001", "qty": 1, "size": "xxl", "pay_token": "demo"}))
                .unwrap();
        assert_eq!(purchase.size, "XXL");
    }

    #[test]
    fn test_insufficient_inventory_reports_available() {
        let err = check(json!({"sku": "HOODIE-BLACK-001", "qty": 31, "size": "XXL", "pay_token": "demo"}))
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InsufficientInventory {
                available_quantity: 30
            }
        );
        assert_eq!(err.available_quantity(), Some(30));

        assert!(
            check(json!({"sku": "HOODIE-BLACK-001", "qty": 30, "size": "XXL", "pay_token": "demo"}))
                .is_ok()
        );
    }

    #[test]
    fn test_huge_quantity_is_an_inventory_failure() {
        for qty in [json!(5_000_000_000_u64), json!("5000000000"), json!(1e30), json!("99999999999999999999999")] {
            let err = check(json!({"sku": "HOODIE-NAVY-003", "qty": qty, "size": "XL", "pay_token": "demo"}))
                .unwrap_err();
            assert_eq!(
                err,
                OrderError::InsufficientInventory {
                    available_quantity: 15
                },
                "qty={qty}"
            );
        }
    }

    #[test]
    fn test_non_string_fields() {
        let purchase =
            check(json!({"sku": "SHOES-WHITE-002", "qty": 1, "size": 6, "pay_token": 12345})).unwrap();
        assert_eq!(purchase.size, "6");

        assert_eq!(
            check(json!({"sku": 123, "qty": 1, "pay_token": "demo"})).unwrap_err(),
            OrderError::ProductNotFound("123".to_string())
        );
        assert_eq!(
            check(json!({"sku": ["HAT-RED-002"], "qty": 1, "pay_token": "demo"})).unwrap_err(),
            OrderError::MissingSku
        );
        assert_eq!(
            check(json!({"sku": "HAT-RED-002", "qty": 1, "pay_token": {"id": "demo"}})).unwrap_err(),
            OrderError::MissingPaymentToken
        );
        assert!(matches!(
            check(json!({"sku": "HAT-RED-002", "qty": 1, "size": ["OS"], "pay_token": "demo"}))
                .unwrap_err(),
            OrderError::InvalidSize { .. }
        ));
    }

    #[test]
    fn test_email_is_echoed_unchecked() {
        let purchase = check(json!({
            "sku": "HAT-BLACK-001", "qty": 1, "pay_token": "demo", "email": " agent@example.com "
        }))
        .unwrap();
        assert_eq!(purchase.email.as_deref(), Some("agent@example.com"));

        let purchase = check(json!({
            "sku": "HAT-BLACK-001", "qty": 1, "pay_token": "demo", "email": "not-an-email"
        }))
        .unwrap();
        assert_eq!(purchase.email.as_deref(), Some("not-an-email"));

        assert!(
            check(json!({"sku": "HAT-BLACK-001", "qty": 1, "pay_token": "demo", "email": ""}))
                .unwrap()
                .email
                .is_none()
        );
    }

    #[test]
    fn test_pay_token_redacted_in_debug() {
        let req = request(json!({"sku": "HAT-BLACK-001", "qty": 1, "pay_token": "tok_live_secret"}));
        assert!(!format!("{req:?}").contains("tok_live_secret"));
    }

    #[test]
    fn test_confirm_at() {
        let purchase = check(json!({
            "sku": "HOODIE-BLACK-001", "qty": 2, "size": "M", "pay_token": "demo",
            "email": "buyer@example.com"
        }))
        .unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let order_id = OrderId::generate();

        let confirmation = OrderSynthesizer::new(5).confirm_at(&purchase, now, order_id.clone());

        assert_eq!(confirmation.order_id, order_id);
        assert_eq!(confirmation.status, OrderStatus::Confirmed);
        assert_eq!(confirmation.product_name, "Classic Black Hoodie");
        assert_eq!(confirmation.unit_price.dollars(), 45);
        assert_eq!(confirmation.total_price, 90);
        assert_eq!(confirmation.size, "M");
        assert_eq!(
            confirmation.delivery_date,
            NaiveDate::from_ymd_opt(2026, 10, 24).unwrap()
        );
        assert_eq!(
            confirmation.email_confirmation.as_deref(),
            Some("Order confirmation will be sent to buyer@example.com")
        );

        let json = serde_json::to_value(&confirmation).unwrap();
        assert_eq!(json["delivery_date"], "2026-10-24");
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["total_price"], 90);
        assert_eq!(json["currency"], "USD");
    }

    #[test]
    fn test_confirm_without_email_omits_field() {
        let purchase = check(json!({"sku": "HAT-BLACK-001", "qty": 1, "pay_token": "demo"})).unwrap();
        let json = serde_json::to_value(OrderSynthesizer::default().confirm(&purchase)).unwrap();
        assert!(json.get("email_confirmation").is_none());
        assert_eq!(json["size"], "OS");
    }

    #[test]
    fn test_sequential_orders_have_distinct_ids() {
        let purchase = check(json!({"sku": "HAT-BLACK-001", "qty": 1, "pay_token": "demo"})).unwrap();
        let synth = OrderSynthesizer::default();
        assert_ne!(synth.confirm(&purchase).order_id, synth.confirm(&purchase).order_id);
    }

    #[test]
    fn test_inventory_not_decremented() {
        let catalog = Catalog::builtin();
        let req = request(json!({"sku": "HOODIE-NAVY-003", "qty": 15, "size": "XL", "pay_token": "demo"}));
        for _ in 0..3 {
            let purchase = validate(&catalog, &req).unwrap();
            let _ = OrderSynthesizer::default().confirm(&purchase);
        }
        assert_eq!(catalog.find("HOODIE-NAVY-003").unwrap().stock("XL"), 15);
    }
}
