use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ShiftDto {
    pub id: String,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// `"active"` or `"ended"`.
    pub status: String,
    pub total_orders: u64,
    pub total_earnings: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct StartShiftDto {
    pub shift_id: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ShiftTotalsDto {
    pub shift_id: String,
    pub total_orders: u64,
    pub total_earnings: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct EndShiftDto {
    pub shift_id: String,
    pub total_orders: u64,
    pub total_earnings: f64,
    pub message: String,
}
