use serde::Serialize;
use sqlx::FromRow;

/// Prepended to a coffee price when a cafe is first recorded.
pub const CURRENCY_PREFIX: &str = "$";

/// Database cafe model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

/// The mutable fields of a cafe, as accepted from a validated form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeRecord {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

impl CafeRecord {
    /// Apply the currency prefix to the coffee price unless it already carries one.
    pub fn with_currency_prefix(mut self) -> Self {
        self.coffee_price = self.coffee_price.map(|price| {
            if price.starts_with(CURRENCY_PREFIX) {
                price
            } else {
                format!("{CURRENCY_PREFIX}{price}")
            }
        });
        self
    }
}
