pub mod auth_service;
pub mod booking_service;
pub mod listing_service;
pub mod notification_service;
pub mod payment_service;
pub mod review_service;
