// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::Error as DieselError,
    sql_types::BigInt,
};

use reviewdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod review;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

// The rowid of the most recent successful insert on this connection.
fn last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(diesel::dsl::sql::<BigInt>("last_insert_rowid()"))
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_rating_value(value: i16) -> Result<RatingValue> {
    RatingValue::try_from(value).map_err(|err| anyhow!("Invalid stored rating: {err}").into())
}

fn load_review(kind: ReviewKind, row: models::ReviewRow) -> Result<Review> {
    let models::ReviewRow {
        id,
        subject_id,
        author_id,
        comment,
        rating,
        created_at,
    } = row;
    Ok(Review {
        id: id.into(),
        kind,
        subject_id: subject_id.into(),
        author_id: author_id.into(),
        comment,
        rating: load_rating_value(rating)?,
        created_at: Timestamp::from_millis(created_at),
    })
}
