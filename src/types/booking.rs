//! Definitions for booking requests and the records issued for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::estimator::CostBreakdown;

/// How the farmer pays. Only wallet payments go through the ledger;
/// the others are settled by an external gateway.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum PaymentMethod {
    Wallet,
    Upi,
    Card,
    NetBanking,
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// Raw booking form input.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub wallet_id: String,
    pub chiller_id: String,
    pub tier: String,
    pub volume_litres: f64,
    pub duration_hours: f64,
    pub payment_method: PaymentMethod,
}

/// A booking issued by the
/// [`BookingService`](crate::services::booking::BookingService).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,

    /// Human readable code shown at the chiller, e.g. `CK-2024-001234`.
    pub code: String,

    pub wallet_id: String,
    pub chiller_id: String,
    pub tier: String,
    pub volume_litres: f64,
    pub duration_hours: f64,
    pub breakdown: CostBreakdown,
    pub payment_method: PaymentMethod,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
