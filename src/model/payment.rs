use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaymentDto {
    pub id: String,
    pub order_id: String,
    pub amount: f64,
    /// Driver share as a fraction, e.g. `0.7`.
    pub driver_share: f64,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
}
