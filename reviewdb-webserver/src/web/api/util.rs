use super::*;

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

#[get("/count/reviews/<kind>")]
pub fn get_count_reviews(service: &State<ReviewService>, kind: KindResult) -> Result<usize> {
    Ok(Json(service.count_reviews(kind?.into())?))
}
