pub mod login;
pub mod register;

pub use login::LoginService;
pub use register::RegisterService;
