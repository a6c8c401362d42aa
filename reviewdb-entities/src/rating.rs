use thiserror::Error;

/// A star rating between [`RatingValue::min`] and [`RatingValue::max`].
///
/// Values outside of this range cannot be constructed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Rating must be between {} and {}", RatingValue::min().0, RatingValue::max().0)]
pub struct RatingValueOutOfRange(pub i64);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn try_new(val: i64) -> Result<Self, RatingValueOutOfRange> {
        if val < i64::from(Self::min().0) || val > i64::from(Self::max().0) {
            return Err(RatingValueOutOfRange(val));
        }
        Ok(Self(val as u8))
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = RatingValueOutOfRange;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        Self::try_new(from)
    }
}

impl TryFrom<i16> for RatingValue {
    type Error = RatingValueOutOfRange;
    fn try_from(from: i16) -> Result<Self, Self::Error> {
        Self::try_new(from.into())
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for i16 {
    fn from(from: RatingValue) -> Self {
        from.0.into()
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// The arithmetic mean of multiple ratings.
///
/// The default value `0.0` denotes "not rated yet" and
/// is therefore outside of the range of a single rating.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub fn min() -> Self {
        RatingValue::min().into()
    }

    pub fn max() -> Self {
        RatingValue::max().into()
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_unrated(self) -> bool {
        self == Self::default()
    }

    /// Rounds half away from zero to the given number of decimal places.
    pub fn round_to(self, decimals: i32) -> Self {
        let factor = 10f64.powi(decimals);
        Self((self.0 * factor).round() / factor)
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

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: u64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    pub fn add(&mut self, val: RatingValue) {
        self.acc += u64::from(val.0);
        self.cnt += 1;
    }

    pub const fn count(&self) -> usize {
        self.cnt
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
