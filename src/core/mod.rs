pub mod error;
pub mod traits;

pub use error::{AppError, Result};
pub use traits::Repository;
