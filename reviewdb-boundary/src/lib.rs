use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    Product,
    #[serde(alias = "rental")]
    Service,
    Team,
}

/// A review as submitted by a client.
///
/// Field names of earlier API revisions are accepted as aliases.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(alias = "productId", alias = "productID",
            alias = "serviceId", alias = "serviceID",
            alias = "rentalId",  alias = "rentalID",
            alias = "teamId",    alias = "teamID")]
    pub subject_id : i64,
    #[serde(alias = "accountId", alias = "accountID",
            alias = "userId",    alias = "userID")]
    pub author_id  : i64,
    #[serde(default)]
    pub comment    : String,
    pub rating     : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id         : i64,
    pub kind       : ReviewKind,
    pub subject_id : i64,
    pub author_id  : i64,
    pub comment    : String,
    pub rating     : u8,
    /// Unix timestamp in milliseconds
    pub created_at : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct AverageRating {
    pub subject_id: i64,
    pub average_rating: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub customer_email : String,
    #[serde(default)]
    pub customer_name  : String,
    #[serde(default, alias = "productID", skip_serializing_if = "Option::is_none")]
    pub product_id     : Option<i64>,
    #[serde(default, alias = "serviceID", alias = "rentalId", skip_serializing_if = "Option::is_none")]
    pub service_id     : Option<i64>,
    #[serde(alias = "accountID")]
    pub account_id     : i64,
    #[serde(default)]
    pub transaction_id : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequestConfirmation {
    pub message: String,
    pub review_url: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
