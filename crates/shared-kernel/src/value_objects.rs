// crates/shared-kernel/src/value_objects.rs
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Count of files whose capture date was (or would be) rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdatedCount(usize);

impl UpdatedCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for UpdatedCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for UpdatedCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for UpdatedCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl From<usize> for UpdatedCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

/// Count of files left untouched (dates matched or operator refused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnchangedCount(usize);

impl UnchangedCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for UnchangedCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for UnchangedCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for UnchangedCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl From<usize> for UnchangedCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

/// The calendar year two-digit filename years are disambiguated against.
///
/// Captured once at program start so the rest of the run never consults
/// the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceYear(i32);

impl ReferenceYear {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for ReferenceYear {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}
