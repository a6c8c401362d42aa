pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use reviewdb_entities::{email::*, id::*, rating::*, review::*, time::*};
}

pub use url::Url;
