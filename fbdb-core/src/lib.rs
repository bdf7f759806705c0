pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use fbdb_entities::{feedback::*, id::*, rating::*, time::*};
}

pub use repositories::Error as RepoError;
