use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Store-assigned, numeric identifier of a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackId(i64);

impl FeedbackId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl From<i64> for FeedbackId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<FeedbackId> for i64 {
    fn from(from: FeedbackId) -> Self {
        from.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid feedback id: {0}")]
pub struct FeedbackIdParseError(#[from] ParseIntError);

impl FromStr for FeedbackId {
    type Err = FeedbackIdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
