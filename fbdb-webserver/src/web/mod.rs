use anyhow::anyhow;
use fbdb_core::repositories::FeedbackRepo;
use rocket::{config::Config as RocketCfg, http::Method, Rocket, Route};
use rocket_cors::{AllowedHeaders, AllowedOrigins, Cors, CorsOptions};

pub mod api;
mod guards;

#[cfg(test)]
pub mod tests;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    store: Box<dyn FeedbackRepo + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let store = guards::Store(store);
    let version = guards::Version(version);

    let mut instance = r.manage(store).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

/// Any origin may read, submit and delete feedback.
pub(crate) fn cors() -> anyhow::Result<Cors> {
    let options = CorsOptions {
        allowed_origins: AllowedOrigins::all(),
        allowed_methods: vec![Method::Get, Method::Post, Method::Delete]
            .into_iter()
            .map(From::from)
            .collect(),
        allowed_headers: AllowedHeaders::some(&["Content-Type"]),
        send_wildcard: true,
        ..Default::default()
    };
    options
        .to_cors()
        .map_err(|err| anyhow!("Invalid CORS configuration: {err}"))
}

pub async fn run(
    store: Box<dyn FeedbackRepo + Send + Sync>,
    enable_cors: bool,
    version: &'static str,
) -> anyhow::Result<()> {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        version,
    };
    let instance = rocket_instance(options, store);
    let server_task = if enable_cors {
        info!("CORS enabled for all origins");
        instance.attach(cors()?).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
        return Err(anyhow!("Unable to run web server: {err}"));
    }
    info!("Web server stopped");
    Ok(())
}
