pub mod app_config;
pub mod chapa_details;
pub mod jwt_details;
pub mod mail_details;

pub use app_config::*;
pub use chapa_details::*;
pub use jwt_details::*;
pub use mail_details::*;
