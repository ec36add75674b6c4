use chrono::NaiveDate;
use diesel::prelude::*;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rust_decimal::Decimal;
use travelapp_primitives::models::entities::booking::{Booking, NewBooking};
use travelapp_primitives::models::entities::enum_types::{BookingStatus, PaymentStatus};
use travelapp_primitives::models::entities::listing::{Listing, NewListing};
use travelapp_primitives::models::entities::payment::{NewPayment, Payment, DEFAULT_CURRENCY};
use travelapp_primitives::models::entities::user::{NewUser, User};
use travelapp_primitives::schema::{bookings, listings, payments, users};
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "SecurePass123!";

pub fn insert_user(conn: &mut PgConnection) -> User {
    let tag = Uuid::new_v4().simple().to_string();
    let first: String = FirstName().fake();
    let last: String = LastName().fake();

    diesel::insert_into(users::table)
        .values(&NewUser {
            username: &format!("user_{}", tag),
            email: &format!("guest_{}@example.com", tag),
            first_name: Some(&first),
            last_name: Some(&last),
            password_hash: "not-a-real-hash",
        })
        .returning(User::as_returning())
        .get_result(conn)
        .expect("Failed to insert user")
}

pub fn insert_nameless_user(conn: &mut PgConnection) -> User {
    let tag = Uuid::new_v4().simple().to_string();

    diesel::insert_into(users::table)
        .values(&NewUser {
            username: &format!("anon_{}", tag),
            email: &format!("anon_{}@example.com", tag),
            first_name: None,
            last_name: None,
            password_hash: "not-a-real-hash",
        })
        .returning(User::as_returning())
        .get_result(conn)
        .expect("Failed to insert user")
}

pub fn insert_listing(conn: &mut PgConnection, host: &User, price: Decimal) -> Listing {
    diesel::insert_into(listings::table)
        .values(&NewListing {
            title: "Cozy Beach House",
            description: "A beautiful Cozy Beach House in Mombasa",
            price_per_night: price,
            location: "Mombasa",
            host_id: host.id,
        })
        .returning(Listing::as_returning())
        .get_result(conn)
        .expect("Failed to insert listing")
}

pub fn insert_booking(conn: &mut PgConnection, listing: &Listing, guest: &User) -> Booking {
    diesel::insert_into(bookings::table)
        .values(&NewBooking {
            listing_id: listing.id,
            user_id: guest.id,
            check_in: date(2026, 11, 1),
            check_out: date(2026, 11, 5),
            status: BookingStatus::Pending,
        })
        .returning(Booking::as_returning())
        .get_result(conn)
        .expect("Failed to insert booking")
}

pub fn insert_payment(
    conn: &mut PgConnection,
    booking: &Booking,
    amount: Decimal,
    status: PaymentStatus,
) -> Payment {
    let tx_ref = format!("CHAPA-{}", booking.id);

    diesel::insert_into(payments::table)
        .values(&NewPayment {
            booking_id: booking.id,
            amount,
            currency: DEFAULT_CURRENCY,
            transaction_reference: &tx_ref,
            status,
        })
        .returning(Payment::as_returning())
        .get_result(conn)
        .expect("Failed to insert payment")
}

pub fn payments_for(conn: &mut PgConnection, booking: &Booking) -> Vec<Payment> {
    payments::table
        .filter(payments::booking_id.eq(booking.id))
        .select(Payment::as_select())
        .load(conn)
        .expect("Failed to load payments")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
