use super::*;

#[post("/review/<kind>", format = "application/json", data = "<review>")]
pub fn post_review(
    service: &State<ReviewService>,
    kind: KindResult,
    review: JsonResult<json::NewReview>,
) -> Result<json::Review> {
    let kind = ReviewKind::from(kind?);
    let json::NewReview {
        subject_id,
        author_id,
        comment,
        rating,
    } = review?.into_inner();
    let rate_subject = usecases::RateSubject {
        kind,
        subject_id: subject_id.into(),
        author_id: author_id.into(),
        comment,
        rating,
    };
    let review = service.add_review(rate_subject)?;
    Ok(Json(review.into()))
}

#[get("/review/<kind>")]
pub fn get_reviews(service: &State<ReviewService>, kind: KindResult) -> Result<Vec<json::Review>> {
    let reviews = service.reviews(kind?.into())?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

#[get("/review/<kind>/<subject_id>")]
pub fn get_reviews_of_subject(
    service: &State<ReviewService>,
    kind: KindResult,
    subject_id: i64,
) -> Result<Vec<json::Review>> {
    let reviews = service.reviews_of_subject(kind?.into(), subject_id.into())?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

#[get("/review/<kind>/<subject_id>/average")]
pub fn get_average_rating(
    service: &State<ReviewService>,
    kind: KindResult,
    subject_id: i64,
) -> Result<json::AverageRating> {
    let subject_id = SubjectId::from(subject_id);
    let avg = service.average_rating(kind?.into(), subject_id)?;
    Ok(Json((subject_id, avg).into()))
}
