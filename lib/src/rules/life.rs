//! Totalistic Life-like rules, counting the cell itself.

use crate::{
    error::Error,
    grid::{Age, BORN, DEAD},
};
use ca_rules::ParseLife;
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest possible neighbor count.
///
/// The neighborhood is the 3×3 block centered on the cell,
/// and a living cell counts itself, so a count can reach 9.
pub const MAX_COUNT: u8 = 9;

/// A set of neighbor counts, stored as a bit set.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct Counts(u16);

impl Counts {
    /// Constructs a set from a list of counts.
    ///
    /// Panics if a count exceeds [`MAX_COUNT`]; meant for constants.
    /// Use [`Counts::from_counts`] for untrusted input.
    pub const fn new(counts: &[u8]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < counts.len() {
            assert!(counts[i] <= MAX_COUNT, "neighbor count out of range");
            bits |= 1 << counts[i];
            i += 1;
        }
        Counts(bits)
    }

    /// The empty set.
    pub const fn empty() -> Self {
        Counts(0)
    }

    /// Constructs a set from a list of counts, rejecting counts above
    /// [`MAX_COUNT`].
    pub fn from_counts<I: IntoIterator<Item = u8>>(counts: I) -> Result<Self, Error> {
        let mut set = Counts::empty();
        for count in counts {
            set.insert(count)?;
        }
        Ok(set)
    }

    /// Whether the set contains the count.
    pub fn contains(self, count: u8) -> bool {
        count <= MAX_COUNT && self.0 & 1 << count != 0
    }

    /// Adds a count. Returns whether it was newly added.
    pub fn insert(&mut self, count: u8) -> Result<bool, Error> {
        if count > MAX_COUNT {
            return Err(Error::CountOutOfRange(count));
        }
        let added = !self.contains(count);
        self.0 |= 1 << count;
        Ok(added)
    }

    /// Adds the count if it is absent, removes it otherwise.
    ///
    /// Returns whether the set contains the count afterwards.
    pub fn toggle(&mut self, count: u8) -> Result<bool, Error> {
        if count > MAX_COUNT {
            return Err(Error::CountOutOfRange(count));
        }
        self.0 ^= 1 << count;
        Ok(self.contains(count))
    }

    /// Iterates over the counts in increasing order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=MAX_COUNT).filter(move |&count| self.contains(count))
    }

    /// Number of counts in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Counts above [`MAX_COUNT`] are ignored.
impl FromIterator<u8> for Counts {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Counts::empty();
        for count in iter.into_iter().filter(|&count| count <= MAX_COUNT) {
            set.0 |= 1 << count;
        }
        set
    }
}

impl TryFrom<Vec<u8>> for Counts {
    type Error = Error;

    fn try_from(counts: Vec<u8>) -> Result<Self, Self::Error> {
        Counts::from_counts(counts)
    }
}

impl From<Counts> for Vec<u8> {
    fn from(counts: Counts) -> Self {
        counts.iter().collect()
    }
}

impl Debug for Counts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Digits in increasing order, as in rule strings.
impl Display for Counts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for count in self.iter() {
            write!(f, "{}", count)?;
        }
        Ok(())
    }
}

/// A Life-like rule: a birth set and a survival set.
///
/// Unlike the textbook definition, the neighbor count includes
/// the cell itself when it is alive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Life {
    /// Neighbor counts that bring a dead cell to life.
    pub birth: Counts,
    /// Neighbor counts that keep a living cell alive.
    pub survive: Counts,
}

impl Life {
    /// Constructs a new rule from the birth and survival sets.
    pub const fn new(birth: Counts, survive: Counts) -> Self {
        Life { birth, survive }
    }

    /// Whether the rule contains `B0`.
    ///
    /// In other words, whether a dead cell with no living neighbors
    /// is born in the next generation.
    pub fn has_b0(&self) -> bool {
        self.birth.contains(0)
    }

    /// The age of a cell in the next generation.
    ///
    /// A dead cell consults the birth set with `birth_count`,
    /// a living one the survival set with `survive_count`.
    #[inline]
    pub(crate) fn next_age(
        &self,
        age: Age,
        birth_count: u8,
        survive_count: u8,
        age_limit: Age,
    ) -> Age {
        if age > DEAD {
            if self.survive.contains(survive_count) {
                age.saturating_add(1).min(age_limit)
            } else {
                DEAD
            }
        } else if self.birth.contains(birth_count) {
            BORN
        } else {
            DEAD
        }
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b.into_iter().collect(), s.into_iter().collect())
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Life = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        Ok(rule)
    }
}

/// Displays the rule string in `B/S` notation.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survive)
    }
}
