// All review tables share the same column layout,
// so a single row type covers them all.

#[derive(Queryable)]
pub struct ReviewRow {
    pub id: i64,
    pub subject_id: i64,
    pub author_id: i64,
    pub comment: String,
    pub rating: i16,
    pub created_at: i64,
}

pub struct NewReviewRow<'a> {
    pub subject_id: i64,
    pub author_id: i64,
    pub comment: &'a str,
    pub rating: i16,
    pub created_at: i64,
}
