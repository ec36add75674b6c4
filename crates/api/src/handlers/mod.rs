pub mod bookings;
pub mod health;
pub mod initiate_payment;
pub mod listings;
pub mod login;
pub mod register;
pub mod reviews;
pub mod verify_payment;
pub mod welcome;
