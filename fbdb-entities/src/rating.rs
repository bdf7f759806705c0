use thiserror::Error;

/// Star rating of a single feedback entry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

#[derive(Debug, Error)]
#[error("Rating value {0} is out of range")]
pub struct RatingValueError(pub i64);

impl TryFrom<i64> for RatingValue {
    type Error = RatingValueError;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        u8::try_from(from)
            .ok()
            .map(Self)
            .filter(|val| val.is_valid())
            .ok_or(RatingValueError(from))
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for i16 {
    fn from(from: RatingValue) -> Self {
        i16::from(from.0)
    }
}

/// Arithmetic mean of multiple ratings.
///
/// The average of no ratings at all is `0.0`, i.e. below [`AvgRatingValue::min`].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(1.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: u64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += u64::from(val.0);
        self.cnt += 1;
    }

    pub fn build(self) -> AvgRatingValue {
        if self.cnt > 0 {
            AvgRatingValue::from(self.acc as f64 / self.cnt as f64).clamp()
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}
