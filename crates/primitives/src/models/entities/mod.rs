pub mod booking;
pub mod enum_types;
pub mod listing;
pub mod payment;
pub mod review;
pub mod user;

pub use booking::*;
pub use enum_types::*;
pub use listing::*;
pub use payment::*;
pub use review::*;
pub use user::*;
