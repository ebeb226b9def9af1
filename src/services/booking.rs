//! Issues bookings: prices the request, reserves chiller capacity and
//! charges the farmer's wallet.
//!
//! Capacity is reserved while holding the chiller's map entry, and the
//! wallet debit happens under that same lock, so a failed payment never
//! leaves capacity reserved and two bookings cannot both take the last
//! litres of a chiller. Locks are always taken chiller first, then
//! wallet.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Datelike, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::booking::{Booking, BookingRequest, BookingStatus, PaymentMethod};
use crate::chiller::{AsLocation, ChillerListing};
use crate::error::BookingError;
use crate::estimator::CostEstimator;
use crate::services::ledger::LedgerService;

pub struct BookingService {
    ledger: Arc<LedgerService>,
    estimator: CostEstimator,
    chillers: DashMap<String, ChillerListing>,
    bookings: DashMap<Uuid, Booking>,
    sequence: AtomicU64,
}

impl BookingService {
    pub fn new(
        ledger: Arc<LedgerService>,
        estimator: CostEstimator,
        chillers: Vec<ChillerListing>,
    ) -> BookingService {
        info!("Initializing booking service with {} chillers", chillers.len());
        BookingService {
            ledger,
            estimator,
            chillers: chillers
                .into_iter()
                .map(|chiller| (chiller.get_id(), chiller))
                .collect(),
            bookings: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    fn next_code(&self) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("CK-{}-{:06}", Utc::now().year(), seq)
    }

    /// Books a chiller.
    ///
    /// # Errors
    /// Rejects non-positive volume or duration, unknown chillers and
    /// tiers, and requests above the chiller's free capacity. Ledger
    /// errors from wallet payments are passed through; in every error
    /// case nothing is reserved or charged.
    pub fn book(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        info!(
            "Booking {}L for {}h at chiller {}",
            request.volume_litres, request.duration_hours, request.chiller_id
        );
        let volume = request.volume_litres;
        if !volume.is_finite() || volume <= 0.0 {
            return Err(BookingError::InvalidVolume(volume));
        }
        if !request.duration_hours.is_finite() || request.duration_hours <= 0.0 {
            return Err(BookingError::InvalidDuration(request.duration_hours));
        }
        let breakdown = self
            .estimator
            .estimate(volume, request.duration_hours, &request.tier)?;

        let mut chiller = self
            .chillers
            .get_mut(&request.chiller_id)
            .ok_or_else(|| BookingError::UnknownChiller(request.chiller_id.clone()))?;
        if !chiller.can_accept(volume) {
            warn!(
                "Chiller {} cannot take {}L ({}L available, {:?})",
                request.chiller_id, volume, chiller.available_litres, chiller.status
            );
            return Err(BookingError::InsufficientCapacity {
                chiller_id: request.chiller_id.clone(),
                available: chiller.available_litres,
                requested: volume,
            });
        }

        let id = Uuid::new_v4();
        if request.payment_method == PaymentMethod::Wallet && breakdown.total > 0.0 {
            self.ledger
                .debit(&request.wallet_id, breakdown.total, &format!("booking {}", id))?;
        }
        // codes are only handed out to bookings that went through
        let code = self.next_code();

        chiller.reserve(volume);
        drop(chiller);

        let booking = Booking {
            id,
            code,
            wallet_id: request.wallet_id,
            chiller_id: request.chiller_id,
            tier: request.tier,
            volume_litres: volume,
            duration_hours: request.duration_hours,
            breakdown,
            payment_method: request.payment_method,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };
        self.bookings.insert(booking.id, booking.clone());
        info!("Booking {} confirmed, total {}", booking.code, booking.breakdown.total);
        Ok(booking)
    }

    /// Cancels a booking, returning its capacity to the chiller and
    /// refunding wallet payments.
    pub fn cancel(&self, booking_id: Uuid) -> Result<Booking, BookingError> {
        let mut booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(BookingError::UnknownBooking(booking_id))?;
        if booking.status == BookingStatus::Cancelled {
            return Err(BookingError::AlreadyCancelled(booking_id));
        }

        if booking.payment_method == PaymentMethod::Wallet && booking.breakdown.total > 0.0 {
            self.ledger.credit(
                &booking.wallet_id,
                booking.breakdown.total,
                &format!("refund {}", booking.code),
            )?;
        }

        if let Some(mut chiller) = self.chillers.get_mut(&booking.chiller_id) {
            chiller.release(booking.volume_litres);
        }

        booking.status = BookingStatus::Cancelled;
        info!("Booking {} cancelled", booking.code);
        Ok(booking.clone())
    }

    pub fn get(&self, booking_id: Uuid) -> Option<Booking> {
        self.bookings.get(&booking_id).map(|booking| booking.value().clone())
    }

    /// Bookings paid from or made by a wallet, oldest first.
    pub fn bookings_for_wallet(&self, wallet_id: &str) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|booking| booking.wallet_id == wallet_id)
            .map(|booking| booking.value().clone())
            .collect();
        bookings.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.code.cmp(&b.code)));
        bookings
    }

    /// Current snapshot of a chiller listing.
    pub fn chiller(&self, chiller_id: &str) -> Option<ChillerListing> {
        self.chillers.get(chiller_id).map(|chiller| chiller.value().clone())
    }
}
