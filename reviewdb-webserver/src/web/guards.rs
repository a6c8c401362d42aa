use core::ops::Deref;

use reviewdb_core::entities::ReviewKind;
use rocket::request::FromParam;
use thiserror::Error;

pub struct Version(pub &'static str);

/// The `<kind>` segment of review routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewKindParam(ReviewKind);

#[derive(Debug, Error)]
#[error("Unknown review kind '{0}'")]
pub struct UnknownReviewKind(pub String);

impl<'a> FromParam<'a> for ReviewKindParam {
    type Error = UnknownReviewKind;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param
            .parse()
            .map(Self)
            .map_err(|_| UnknownReviewKind(param.to_owned()))
    }
}

impl Deref for ReviewKindParam {
    type Target = ReviewKind;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ReviewKindParam> for ReviewKind {
    fn from(from: ReviewKindParam) -> Self {
        from.0
    }
}
