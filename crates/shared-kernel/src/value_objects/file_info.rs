// crates/shared-kernel/src/value_objects/file_info.rs
use std::{fmt, iter::Sum, time::SystemTime};

use chrono::{DateTime, Local};

/// UTF-8 file name of a directory entry; non UTF-8 names are dropped while listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for FileName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[must_use]
#[repr(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl Sum for FileSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Self::saturating_add)
    }
}

impl FileSize {
    /// Returns a base-2 human readable representation (B, KiB, MiB, ... EiB).
    #[must_use]
    pub fn to_human(self) -> String {
        const KIB: f64 = 1024.0;
        const UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

        let bytes = self.bytes();
        if bytes < 1024 {
            return format!("{bytes} B");
        }

        #[allow(clippy::cast_precision_loss)]
        let mut value = bytes as f64 / KIB;
        let mut unit = UNITS[0];
        for next in &UNITS[1..] {
            if value < KIB {
                break;
            }
            value /= KIB;
            unit = next;
        }
        format!("{value:.1} {unit}")
    }
}

/// Local-time modification timestamp captured when a directory is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
#[repr(transparent)]
pub struct ModificationTime(DateTime<Local>);

impl ModificationTime {
    pub const DISPLAY_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }
}

impl From<DateTime<Local>> for ModificationTime {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl From<SystemTime> for ModificationTime {
    fn from(time: SystemTime) -> Self {
        Self::new(DateTime::<Local>::from(time))
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::DISPLAY_FORMAT))
    }
}
