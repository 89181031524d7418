use crate::record::FileRecord;
use std::cmp::Ordering;

/// How many of the oldest matches to select.
///
/// Built from the signed `--number` value:
/// `0` selects everything, `n > 0` the `n` oldest, and `n < 0` everything
/// except the `-n` newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPolicy {
    All,
    KeepFirst(usize),
    DropLast(usize),
}

impl From<i64> for CountPolicy {
    fn from(n: i64) -> Self {
        match n.cmp(&0) {
            Ordering::Equal => Self::All,
            Ordering::Greater => Self::KeepFirst(usize::try_from(n).unwrap_or(usize::MAX)),
            Ordering::Less => {
                Self::DropLast(usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX))
            }
        }
    }
}

/// Result of applying a [`CountPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Selected(Vec<FileRecord>),
    /// Every match is spared by a negative count.
    AllKept,
}

impl CountPolicy {
    /// Apply the policy to matches ordered oldest first.
    #[must_use]
    pub fn apply(self, mut matches: Vec<FileRecord>) -> Selection {
        match self {
            Self::All => Selection::Selected(matches),
            Self::KeepFirst(n) => {
                matches.truncate(n);
                Selection::Selected(matches)
            }
            Self::DropLast(n) => {
                if matches.len() > n {
                    let keep = matches.len() - n;
                    matches.truncate(keep);
                    Selection::Selected(matches)
                } else {
                    Selection::AllKept
                }
            }
        }
    }
}
