// Authentication module: admin/staff login and customer login-by-mobile

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{NewUser, Role, User};
pub use repositories::{MySqlUserStore, UserStore};
pub use services::{AuthService, TokenIssuer};
