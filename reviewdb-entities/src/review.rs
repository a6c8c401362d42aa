use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{id::*, rating::*, time::*};

/// The kind of subject a review refers to.
///
/// Each kind is stored in a separate collection and
/// reviews of different kinds never affect each other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReviewKind {
    Product,
    // Services have been called rentals in the past.
    #[strum(to_string = "service", serialize = "rental")]
    Service,
    Team,
}

impl ReviewKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A review that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub kind       : ReviewKind,
    pub subject_id : SubjectId,
    pub author_id  : AccountId,
    pub comment    : String,
    pub rating     : RatingValue,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id         : ReviewId,
    pub kind       : ReviewKind,
    pub subject_id : SubjectId,
    pub author_id  : AccountId,
    pub comment    : String,
    pub rating     : RatingValue,
    pub created_at : Timestamp,
}

impl NewReview {
    pub fn into_review(self, id: ReviewId) -> Review {
        let Self {
            kind,
            subject_id,
            author_id,
            comment,
            rating,
            created_at,
        } = self;
        Review {
            id,
            kind,
            subject_id,
            author_id,
            comment,
            rating,
            created_at,
        }
    }
}
