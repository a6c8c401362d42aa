use super::prelude::*;

#[derive(Debug, Clone)]
pub struct RateSubject {
    pub kind: ReviewKind,
    pub subject_id: SubjectId,
    pub author_id: AccountId,
    pub comment: String,
    // Unchecked value as received from the client
    pub rating: i64,
}

pub fn prepare_new_review(r: RateSubject) -> Result<NewReview> {
    let RateSubject {
        kind,
        subject_id,
        author_id,
        comment,
        rating,
    } = r;
    let rating = RatingValue::try_new(rating)?;
    Ok(NewReview {
        kind,
        subject_id,
        author_id,
        comment,
        rating,
        created_at: Timestamp::now(),
    })
}

pub fn store_new_review<R>(repo: &R, new_review: NewReview) -> Result<Review>
where
    R: ReviewRepo + ?Sized,
{
    let review = repo.create_review(new_review)?;
    log::debug!(
        "Created {} review {} for subject {}",
        review.kind,
        review.id,
        review.subject_id
    );
    Ok(review)
}

pub fn add_review<R>(repo: &R, r: RateSubject) -> Result<Review>
where
    R: ReviewRepo + ?Sized,
{
    let new_review = prepare_new_review(r)?;
    store_new_review(repo, new_review)
}
