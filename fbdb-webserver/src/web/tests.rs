use std::time::Duration;

use anyhow::anyhow;
use fbdb_core::{entities::*, repositories::*};
use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use self::prelude::*;

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{rocket_test_setup, rocket_test_setup_with_store, UnavailableStore};
}

type RepoResult<T> = std::result::Result<T, Error>;

/// A store that fails on every access.
pub struct UnavailableStore;

impl FeedbackRepo for UnavailableStore {
    fn create_feedback(&self, _: NewFeedbackEntry) -> RepoResult<FeedbackEntry> {
        Err(anyhow!("unable to open database file").into())
    }
    fn all_feedback_by_timestamp_desc(&self) -> RepoResult<Vec<FeedbackEntry>> {
        Err(anyhow!("unable to open database file").into())
    }
    fn delete_feedback(&self, _: FeedbackId) -> RepoResult<bool> {
        Err(anyhow!("unable to open database file").into())
    }
}

fn rocket_test_instance(
    mounts: Vec<(&'static str, Vec<Route>)>,
    store: Box<dyn FeedbackRepo + Send + Sync>,
) -> rocket::Rocket<rocket::Build> {
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        version: DUMMY_VERSION,
    };
    super::rocket_instance(options, store)
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, fbdb_db_sqlite::Connections) {
    let connections =
        fbdb_db_sqlite::Connections::init(":memory:", 1, Duration::from_secs(1)).unwrap();
    fbdb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let client = rocket_test_setup_with_store(mounts, Box::new(connections.clone()));
    (client, connections)
}

pub fn rocket_test_setup_with_store(
    mounts: Vec<(&'static str, Vec<Route>)>,
    store: Box<dyn FeedbackRepo + Send + Sync>,
) -> Client {
    let rocket = rocket_test_instance(mounts, store);
    Client::tracked(rocket).unwrap()
}

#[test]
fn mount_api_routes() {
    let (client, _) = rocket_test_setup(super::mounts());
    let res = client.get("/api/feedback").dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!("[]", res.into_string().unwrap());
    let res = client.get("/feedback").dispatch();
    assert_eq!(Status::NotFound, res.status());
}

#[test]
fn get_version() {
    let (client, _) = rocket_test_setup(super::mounts());
    let res = client.get("/api/server/version").dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(DUMMY_VERSION, res.into_string().unwrap());
}

#[test]
fn allow_any_origin_with_cors() {
    let store = Box::new(UnavailableStore);
    let rocket = rocket_test_instance(super::mounts(), store).attach(super::cors().unwrap());
    let client = Client::tracked(rocket).unwrap();
    let res = client
        .get("/api/server/version")
        .header(Header::new("Origin", "https://example.com"))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(
        Some("*"),
        res.headers().get_one("Access-Control-Allow-Origin")
    );
}

#[test]
fn no_cors_headers_if_disabled() {
    let client = rocket_test_setup_with_store(super::mounts(), Box::new(UnavailableStore));
    let res = client
        .get("/api/server/version")
        .header(Header::new("Origin", "https://example.com"))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    assert!(res
        .headers()
        .get_one("Access-Control-Allow-Origin")
        .is_none());
}
