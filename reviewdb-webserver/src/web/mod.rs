use reviewdb_application::prelude::{ReviewRequestSender, ReviewService};
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;


pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) struct Services {
    reviews: ReviewService,
    review_requests: ReviewRequestSender,
}

pub(crate) fn rocket_instance(options: InstanceOptions, services: Services) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;
    let Services {
        reviews,
        review_requests,
    } = services;

    info!(
        "Review request links point to {}",
        review_requests.base_url()
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(reviews)
        .manage(review_requests)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    reviews: ReviewService,
    review_requests: ReviewRequestSender,
    enable_cors: bool,
    version: &'static str,
) -> anyhow::Result<()> {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        version,
    };
    let services = Services {
        reviews,
        review_requests,
    };

    let instance = rocket_instance(options, services);
    let server_task = if enable_cors {
        info!("CORS is enabled for all origins");
        let cors = rocket_cors::CorsOptions::default().to_cors()?;
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
        return Err(err.into());
    }
    Ok(())
}
