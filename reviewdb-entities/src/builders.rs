pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::new_review_builder::*;

pub mod new_review_builder {

    use super::*;
    use crate::{id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct NewReviewBuild {
        review: NewReview,
    }

    impl NewReviewBuild {
        pub fn kind(mut self, kind: ReviewKind) -> Self {
            self.review.kind = kind;
            self
        }
        pub fn subject(mut self, id: i64) -> Self {
            self.review.subject_id = id.into();
            self
        }
        pub fn author(mut self, id: i64) -> Self {
            self.review.author_id = id.into();
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = comment.into();
            self
        }
        /// Panics if the rating is out of range.
        pub fn rating(mut self, rating: i64) -> Self {
            self.review.rating = RatingValue::try_new(rating).unwrap();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.review.created_at = created_at;
            self
        }
        pub fn finish(self) -> NewReview {
            self.review
        }
    }

    impl Builder for NewReview {
        type Build = NewReviewBuild;
        fn build() -> NewReviewBuild {
            NewReviewBuild {
                review: NewReview {
                    kind: ReviewKind::Product,
                    subject_id: SubjectId::default(),
                    author_id: AccountId::default(),
                    comment: "".into(),
                    rating: RatingValue::max(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
