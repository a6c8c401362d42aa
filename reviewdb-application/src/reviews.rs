use std::sync::Arc;

use super::*;

/// Validates reviews and delegates to the injected store.
#[derive(Clone)]
pub struct ReviewService {
    repo: Arc<dyn ReviewRepo + Send + Sync>,
}

impl ReviewService {
    pub fn new<R>(repo: R) -> Self
    where
        R: ReviewRepo + Send + Sync + 'static,
    {
        Self {
            repo: Arc::new(repo),
        }
    }

    pub fn add_review(&self, rate_subject: usecases::RateSubject) -> Result<Review> {
        let review = usecases::add_review(&*self.repo, rate_subject).inspect_err(|err| {
            warn!("Failed to add review: {err}");
        })?;
        Ok(review)
    }

    pub fn average_rating(&self, kind: ReviewKind, subject_id: SubjectId) -> Result<AvgRatingValue> {
        Ok(usecases::average_rating(&*self.repo, kind, subject_id)?)
    }

    pub fn reviews(&self, kind: ReviewKind) -> Result<Vec<Review>> {
        Ok(usecases::load_reviews(&*self.repo, kind)?)
    }

    pub fn reviews_of_subject(&self, kind: ReviewKind, subject_id: SubjectId) -> Result<Vec<Review>> {
        Ok(usecases::load_reviews_of_subject(
            &*self.repo,
            kind,
            subject_id,
        )?)
    }

    pub fn count_reviews(&self, kind: ReviewKind) -> Result<usize> {
        Ok(usecases::count_reviews(&*self.repo, kind)?)
    }
}
