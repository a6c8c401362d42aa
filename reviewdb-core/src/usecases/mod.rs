mod add_review;
mod average_rating;
mod error;
mod load_reviews;
mod request_review;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_review::*, average_rating::*, error::Error, load_reviews::*, request_review::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
