use crate::app_state::AppState;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::payment_repository::PaymentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::booking_service::BookingService;
use tracing::info;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::payment_dto::{
    InitiatePaymentResponse, VerifyPaymentResponse,
};
use travelapp_primitives::models::entities::booking::Booking;
use travelapp_primitives::models::entities::enum_types::PaymentStatus;
use travelapp_primitives::models::entities::payment::{NewPayment, Payment, DEFAULT_CURRENCY};
use travelapp_primitives::models::entities::user::User;
use travelapp_primitives::models::providers::chapa::{
    ChapaCustomization, ChapaInitializeRequest,
};
use uuid::Uuid;

pub const PAYMENT_INITIALIZED: &str = "Payment initialized successfully.";
pub const PAYMENT_ALREADY_COMPLETED: &str = "Payment already completed.";
pub const NO_PAYMENT_FOR_BOOKING: &str = "No payment found for this booking.";

pub struct PaymentService;

impl PaymentService {
    /// Merchant reference sent to Chapa; one per booking.
    pub fn transaction_reference(booking_id: Uuid) -> String {
        format!("CHAPA-{}", booking_id)
    }

    pub fn ensure_payable(existing: Option<&Payment>) -> Result<(), ApiError> {
        match existing {
            Some(payment) if payment.status == PaymentStatus::Completed => {
                Err(ApiError::BadRequest(PAYMENT_ALREADY_COMPLETED.into()))
            }
            _ => Ok(()),
        }
    }

    pub fn build_initialize_request(
        app_url: &str,
        booking: &Booking,
        payer: &User,
        payment: &Payment,
    ) -> ChapaInitializeRequest {
        let app_url = app_url.trim_end_matches('/');

        ChapaInitializeRequest {
            amount: payment.amount.to_string(),
            currency: payment.currency.clone(),
            email: payer.email.clone(),
            first_name: payer
                .first_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Guest".into()),
            last_name: payer
                .last_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "User".into()),
            tx_ref: payment.transaction_reference.clone(),
            callback_url: format!("{}/api/verify-payment/{}/", app_url, booking.id),
            return_url: format!("{}/bookings/{}/success/", app_url, booking.id),
            customization: ChapaCustomization {
                title: "Booking Payment".into(),
                description: format!("Payment for booking {}", booking.id),
            },
        }
    }

    pub async fn initiate_payment(
        state: &AppState,
        booking_id: Uuid,
    ) -> Result<InitiatePaymentResponse, ApiError> {
        let (payment, payload) = {
            let mut conn = state.db.get()?;

            let (booking, listing) = BookingRepository::find_with_listing(&mut conn, booking_id)?
                .ok_or_else(BookingService::not_found)?;

            let existing = PaymentRepository::find_for_booking(&mut conn, &booking)?;
            Self::ensure_payable(existing.as_ref())?;

            let payment = match existing {
                Some(payment) => payment,
                None => {
                    let tx_ref = Self::transaction_reference(booking.id);
                    PaymentRepository::create_if_absent(
                        &mut conn,
                        NewPayment {
                            booking_id: booking.id,
                            amount: listing.price_per_night,
                            currency: DEFAULT_CURRENCY,
                            transaction_reference: &tx_ref,
                            status: PaymentStatus::Pending,
                        },
                    )?
                }
            };

            // a concurrent request may have stored and completed it first
            Self::ensure_payable(Some(&payment))?;

            let payer = UserRepository::find_by_id(&mut conn, booking.user_id)?
                .ok_or_else(|| ApiError::Internal("Booking user missing".into()))?;

            let payload = Self::build_initialize_request(
                &state.config.app_url,
                &booking,
                &payer,
                &payment,
            );

            (payment, payload)
        };

        let checkout_url = state.chapa.initialize(&payload).await?;

        let mut conn = state.db.get()?;
        PaymentRepository::set_chapa_tx_ref(&mut conn, payment.id, &payload.tx_ref)?;

        info!(
            booking_id = %booking_id,
            payment_id = %payment.id,
            tx_ref = %payload.tx_ref,
            "Payment initialized"
        );

        Ok(InitiatePaymentResponse {
            checkout_url,
            message: PAYMENT_INITIALIZED.into(),
        })
    }

    pub async fn verify_payment(
        state: &AppState,
        booking_id: Uuid,
    ) -> Result<VerifyPaymentResponse, ApiError> {
        let payment = {
            let mut conn = state.db.get()?;

            let booking = BookingRepository::find_by_id(&mut conn, booking_id)?
                .ok_or_else(BookingService::not_found)?;

            PaymentRepository::find_for_booking(&mut conn, &booking)?
                .ok_or_else(|| ApiError::NotFound(NO_PAYMENT_FOR_BOOKING.into()))?
        };

        let verification = state.chapa.verify(&payment.transaction_reference).await?;

        let status = verification
            .provider_status
            .as_deref()
            .map(PaymentStatus::from_provider)
            .unwrap_or(PaymentStatus::Pending);

        if status != payment.status {
            info!(
                payment_id = %payment.id,
                from = %payment.status,
                to = %status,
                "Payment status changed"
            );
        }

        let mut conn = state.db.get()?;
        let payment = PaymentRepository::update_status(&mut conn, payment.id, status)?;

        info!(
            booking_id = %booking_id,
            payment_id = %payment.id,
            status = %payment.status,
            "Payment verified"
        );

        Ok(VerifyPaymentResponse {
            booking_id,
            payment_status: payment.status,
            chapa_response: verification.raw,
        })
    }
}
