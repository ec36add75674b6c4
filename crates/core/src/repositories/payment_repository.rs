use chrono::Utc;
use diesel::prelude::*;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::entities::booking::Booking;
use travelapp_primitives::models::entities::enum_types::PaymentStatus;
use travelapp_primitives::models::entities::payment::{NewPayment, Payment};
use travelapp_primitives::schema::payments;
use uuid::Uuid;

pub struct PaymentRepository;

impl PaymentRepository {
    pub fn find_for_booking(
        conn: &mut PgConnection,
        booking: &Booking,
    ) -> Result<Option<Payment>, ApiError> {
        Payment::belonging_to(booking)
            .select(Payment::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Inserts the booking's payment unless one already exists and returns
    /// whichever row is stored.
    pub fn create_if_absent(
        conn: &mut PgConnection,
        new_payment: NewPayment,
    ) -> Result<Payment, ApiError> {
        let inserted = diesel::insert_into(payments::table)
            .values(&new_payment)
            .on_conflict(payments::booking_id)
            .do_nothing()
            .returning(Payment::as_returning())
            .get_result(conn)
            .optional()?;

        match inserted {
            Some(payment) => Ok(payment),
            None => payments::table
                .filter(payments::booking_id.eq(new_payment.booking_id))
                .select(Payment::as_select())
                .first(conn)
                .map_err(ApiError::from),
        }
    }

    pub fn set_chapa_tx_ref(
        conn: &mut PgConnection,
        payment_id: Uuid,
        tx_ref: &str,
    ) -> Result<Payment, ApiError> {
        diesel::update(payments::table.find(payment_id))
            .set((
                payments::chapa_tx_ref.eq(tx_ref),
                payments::updated_at.eq(Utc::now()),
            ))
            .returning(Payment::as_returning())
            .get_result(conn)
            .map_err(ApiError::from)
    }

    pub fn update_status(
        conn: &mut PgConnection,
        payment_id: Uuid,
        status: PaymentStatus,
    ) -> Result<Payment, ApiError> {
        diesel::update(payments::table.find(payment_id))
            .set((
                payments::status.eq(status),
                payments::updated_at.eq(Utc::now()),
            ))
            .returning(Payment::as_returning())
            .get_result(conn)
            .map_err(ApiError::from)
    }
}
