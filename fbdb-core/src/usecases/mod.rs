mod create_feedback;
mod delete_feedback;
mod error;
mod list_feedback;
mod summarize_feedback;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_feedback::*, delete_feedback::*, error::Error, list_feedback::*, summarize_feedback::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
