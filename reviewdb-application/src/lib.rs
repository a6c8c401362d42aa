#[macro_use]
extern crate log;

mod review_requests;
mod reviews;

pub mod prelude {
    pub use super::{review_requests::*, reviews::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use reviewdb_core::{entities::*, repositories::*, usecases};
