use core::ops::Deref;

use fbdb_core::repositories::FeedbackRepo;
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

/// The feedback store managed by Rocket.
pub struct Store(pub Box<dyn FeedbackRepo + Send + Sync>);

impl Deref for Store {
    type Target = dyn FeedbackRepo + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

// Borrowed access to the managed store
pub struct Db<'r>(&'r Store);

impl Deref for Db<'_> {
    type Target = dyn FeedbackRepo + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &**self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Db<'r> {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let store = try_outcome!(request.guard::<&State<Store>>().await);
        Outcome::Success(Db(store.inner()))
    }
}

pub struct Version(pub &'static str);
