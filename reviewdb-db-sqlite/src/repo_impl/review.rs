use super::*;

impl ReviewRepo for Connections {
    fn create_review(&self, review: NewReview) -> Result<Review> {
        self.exclusive()?
            .transaction(|conn| conn.create_review(review))
    }
    fn all_reviews(&self, kind: ReviewKind) -> Result<Vec<Review>> {
        load_reviews(&mut self.shared()?.sqlite_conn(), kind, None)
    }
    fn load_reviews_of_subject(&self, kind: ReviewKind, subject_id: SubjectId) -> Result<Vec<Review>> {
        load_reviews(&mut self.shared()?.sqlite_conn(), kind, Some(subject_id))
    }
    fn count_reviews(&self, kind: ReviewKind) -> Result<usize> {
        count_reviews(&mut self.shared()?.sqlite_conn(), kind)
    }
}

impl<'a> ReviewRepo for DbConnection<'a> {
    fn create_review(&self, review: NewReview) -> Result<Review> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn all_reviews(&self, kind: ReviewKind) -> Result<Vec<Review>> {
        load_reviews(&mut self.conn.borrow_mut(), kind, None)
    }
    fn load_reviews_of_subject(&self, kind: ReviewKind, subject_id: SubjectId) -> Result<Vec<Review>> {
        load_reviews(&mut self.conn.borrow_mut(), kind, Some(subject_id))
    }
    fn count_reviews(&self, kind: ReviewKind) -> Result<usize> {
        count_reviews(&mut self.conn.borrow_mut(), kind)
    }
}

// The review tables only differ by name.
macro_rules! insert_review_row {
    ($conn:expr, $table:ident, $row:expr) => {{
        use schema::$table::dsl;
        let row = $row;
        diesel::insert_into(schema::$table::table)
            .values((
                dsl::subject_id.eq(row.subject_id),
                dsl::author_id.eq(row.author_id),
                dsl::comment.eq(row.comment),
                dsl::rating.eq(row.rating),
                dsl::created_at.eq(row.created_at),
            ))
            .execute($conn)
    }};
}

macro_rules! load_review_rows {
    ($conn:expr, $table:ident, $subject_id:expr) => {{
        use schema::$table::dsl;
        let mut query = schema::$table::table
            .order_by(dsl::id)
            .into_boxed();
        if let Some(subject_id) = $subject_id {
            query = query.filter(dsl::subject_id.eq(subject_id));
        }
        query.load::<models::ReviewRow>($conn)
    }};
}

macro_rules! count_review_rows {
    ($conn:expr, $table:ident) => {{
        schema::$table::table.count().get_result::<i64>($conn)
    }};
}

fn create_review(conn: &mut SqliteConnection, review: NewReview) -> Result<Review> {
    let row = models::NewReviewRow {
        subject_id: review.subject_id.into(),
        author_id: review.author_id.into(),
        comment: &review.comment,
        rating: review.rating.into(),
        created_at: review.created_at.as_millis(),
    };
    let _count = match review.kind {
        ReviewKind::Product => insert_review_row!(conn, product_review, row),
        ReviewKind::Service => insert_review_row!(conn, service_review, row),
        ReviewKind::Team => insert_review_row!(conn, team_review, row),
    }
    .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    let id = last_insert_rowid(conn)?;
    log::debug!("Inserted {} review with id {id}", review.kind);
    Ok(review.into_review(id.into()))
}

fn load_reviews(
    conn: &mut SqliteConnection,
    kind: ReviewKind,
    subject_id: Option<SubjectId>,
) -> Result<Vec<Review>> {
    let subject_id = subject_id.map(i64::from);
    let rows = match kind {
        ReviewKind::Product => load_review_rows!(conn, product_review, subject_id),
        ReviewKind::Service => load_review_rows!(conn, service_review, subject_id),
        ReviewKind::Team => load_review_rows!(conn, team_review, subject_id),
    }
    .map_err(from_diesel_err)?;
    rows.into_iter().map(|row| load_review(kind, row)).collect()
}

fn count_reviews(conn: &mut SqliteConnection, kind: ReviewKind) -> Result<usize> {
    let count = match kind {
        ReviewKind::Product => count_review_rows!(conn, product_review),
        ReviewKind::Service => count_review_rows!(conn, service_review),
        ReviewKind::Team => count_review_rows!(conn, team_review),
    }
    .map_err(from_diesel_err)?;
    debug_assert!(count >= 0);
    Ok(count as usize)
}
