use reviewdb_entities::{rating::*, review::*};

pub fn avg_rating<'a, I>(reviews: I) -> AvgRatingValue
where
    I: IntoIterator<Item = &'a Review>,
{
    reviews
        .into_iter()
        .fold(AvgRatingValueBuilder::default(), |mut acc, r| {
            acc += r.rating;
            acc
        })
        .build()
}
