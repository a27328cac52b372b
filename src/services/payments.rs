//! # Payment Ledger
//!
//! Records payments against bookings and tracks payment status
//! independently of booking status. The ledger never gates booking
//! creation and never moves a booking's lifecycle: callers wanting
//! "fully paid implies confirmed" orchestrate that above this layer.
//!
//! Payment status carries no transition table — any status may move to
//! any other. That looseness is deliberate pending product
//! clarification; see DESIGN.md.

use tracing::info;

use super::ServiceError;
use crate::db::models::PaymentRecord;
use crate::db::{queries, Database};
use crate::models::requests::{CreatePaymentRequest, UpdatePaymentRequest};

/// Payment storage.
#[derive(Clone)]
pub struct PaymentLedger {
    db: Database,
}

impl PaymentLedger {
    /// Create a new PaymentLedger instance.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List payments.
    pub async fn list_payments(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PaymentRecord>, ServiceError> {
        Ok(queries::list_payments(self.db.pool(), limit, offset).await?)
    }

    /// Get a payment by id.
    pub async fn get_payment(&self, id: i32) -> Result<PaymentRecord, ServiceError> {
        queries::get_payment(self.db.pool(), id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("payment {}", id)))
    }

    /// Record a payment.
    ///
    /// The booking reference must resolve at creation time. The booking
    /// FK is the atomic authority: if the booking disappears between
    /// the pre-check and the insert, the constraint refuses and no
    /// payment row is written.
    ///
    /// ## Returns
    ///
    /// * `Err(ServiceError::NotFound)` - booking does not exist
    /// * `Err(ServiceError::InvalidInput)` - non-positive amount
    /// * `Err(ServiceError::Conflict)` - transaction_id already recorded
    pub async fn create_payment(
        &self,
        req: CreatePaymentRequest,
    ) -> Result<PaymentRecord, ServiceError> {
        if req.amount <= 0 {
            return Err(ServiceError::InvalidInput(
                "amount must be positive".to_string(),
            ));
        }

        queries::get_booking(self.db.pool(), req.booking_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("booking {}", req.booking_id)))?;

        let record = queries::create_payment(self.db.pool(), &req).await.map_err(|e| {
            if e.is_foreign_key_violation() {
                ServiceError::NotFound(format!("booking {}", req.booking_id))
            } else if e.is_unique_violation() {
                ServiceError::Conflict("transaction_id already recorded".to_string())
            } else {
                e.into()
            }
        })?;

        info!(
            "Payment {} recorded: booking {}, {} via {}",
            record.id,
            record.booking_id,
            crate::utils::format_price(record.amount),
            record.payment_method
        );
        Ok(record)
    }

    /// Apply a partial change set to a payment.
    ///
    /// Status moves freely between any two values.
    pub async fn update_payment(
        &self,
        id: i32,
        changes: UpdatePaymentRequest,
    ) -> Result<PaymentRecord, ServiceError> {
        queries::update_payment(self.db.pool(), id, &changes)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    ServiceError::Conflict("transaction_id already recorded".to_string())
                } else {
                    ServiceError::from(e)
                }
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("payment {}", id)))
    }

    /// Delete a payment.
    pub async fn delete_payment(&self, id: i32) -> Result<(), ServiceError> {
        if queries::delete_payment(self.db.pool(), id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("payment {}", id)))
        }
    }
}
