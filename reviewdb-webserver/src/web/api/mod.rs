use std::{fmt::Display, result};

use reviewdb_boundary::{self as json, Error as JsonErrorResponse};
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use reviewdb_application::prelude::{ReviewRequestSender, ReviewService};
use reviewdb_core::{entities::*, usecases};

mod error;
mod review_requests;
mod reviews;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type KindResult = result::Result<ReviewKindParam, UnknownReviewKind>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   reviews   --- //
        reviews::post_review,
        reviews::get_reviews,
        reviews::get_reviews_of_subject,
        reviews::get_average_rating,
        // ---   review requests   --- //
        review_requests::post_review_request,
        // ---   util   --- //
        util::get_version,
        util::get_count_reviews,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
