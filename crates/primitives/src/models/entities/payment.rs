use crate::models::entities::booking::Booking;
use crate::models::entities::enum_types::PaymentStatus;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

pub const DEFAULT_CURRENCY: &str = "ETB";

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(belongs_to(Booking))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payment {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount: Decimal,
    pub currency: String,
    pub transaction_reference: String,
    pub chapa_tx_ref: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment<'a> {
    pub booking_id: Uuid,
    pub amount: Decimal,
    pub currency: &'a str,
    pub transaction_reference: &'a str,
    pub status: PaymentStatus,
}
