use super::*;
use reviewdb_entities as e;

impl From<e::review::ReviewKind> for ReviewKind {
    fn from(from: e::review::ReviewKind) -> Self {
        use e::review::ReviewKind as E;
        match from {
            E::Product => Self::Product,
            E::Service => Self::Service,
            E::Team => Self::Team,
        }
    }
}

impl From<ReviewKind> for e::review::ReviewKind {
    fn from(from: ReviewKind) -> Self {
        use ReviewKind as B;
        match from {
            B::Product => Self::Product,
            B::Service => Self::Service,
            B::Team => Self::Team,
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            kind,
            subject_id,
            author_id,
            comment,
            rating,
            created_at,
        } = from;
        Self {
            id: id.into(),
            kind: kind.into(),
            subject_id: subject_id.into(),
            author_id: author_id.into(),
            comment,
            rating: rating.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<(e::id::SubjectId, e::rating::AvgRatingValue)> for AverageRating {
    fn from((subject_id, avg): (e::id::SubjectId, e::rating::AvgRatingValue)) -> Self {
        Self {
            subject_id: subject_id.into(),
            average_rating: avg.into(),
        }
    }
}
