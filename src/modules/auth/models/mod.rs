mod credentials;
mod user;

pub use credentials::{
    AdminLoginRequest, AdminLoginResponse, CustomerLoginRequest, CustomerLoginResponse,
};
pub use user::{NewUser, Role, User};
