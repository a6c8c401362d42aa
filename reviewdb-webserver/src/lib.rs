#![allow(proc_macro_derive_resolution_fallback)]

#[macro_use]
extern crate log;

use reviewdb_application::prelude::{ReviewRequestSender, ReviewService};

mod web;

pub async fn run(
    reviews: ReviewService,
    review_requests: ReviewRequestSender,
    enable_cors: bool,
    version: &'static str,
) -> anyhow::Result<()> {
    web::run(reviews, review_requests, enable_cors, version).await
}
