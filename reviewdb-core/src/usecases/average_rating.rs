use super::prelude::*;
use crate::rating::avg_rating;

pub fn average_rating<R>(repo: &R, kind: ReviewKind, subject_id: SubjectId) -> Result<AvgRatingValue>
where
    R: ReviewRepo + ?Sized,
{
    let reviews = repo.load_reviews_of_subject(kind, subject_id)?;
    let avg = avg_rating(&reviews);
    log::debug!(
        "Average rating of {kind} {subject_id} over {} review(s): {}",
        reviews.len(),
        f64::from(avg)
    );
    Ok(avg)
}
