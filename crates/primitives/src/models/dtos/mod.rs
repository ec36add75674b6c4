pub mod auth_dto;
pub mod booking_dto;
pub mod listing_dto;
pub mod payment_dto;
pub mod providers;
pub mod review_dto;
pub mod system_dto;

pub use auth_dto::*;
pub use booking_dto::*;
pub use listing_dto::*;
pub use payment_dto::*;
pub use providers::*;
pub use review_dto::*;
pub use system_dto::*;
