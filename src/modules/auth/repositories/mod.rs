pub mod user_store;

pub use user_store::{MySqlUserStore, UserStore};
