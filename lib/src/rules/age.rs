//! Age-weighted rules.
//!
//! A neighbor only counts toward birth (or survival) when its age
//! is in the birth-age (or survive-age) set.

use super::life::Life;
use crate::{error::Error, grid::Age};
use from_variants::FromVariants;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A set of ages, all positive.
///
/// Stored as a bitset: bit `age % 64` of word `age / 64`. There are no
/// trailing zero words, so equal sets have equal representations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Age>", into = "Vec<Age>")
)]
pub struct AgeSet(Vec<u64>);

impl AgeSet {
    /// All ages from `1` to `age_limit`.
    pub fn full(age_limit: Age) -> Self {
        let mut words = vec![u64::MAX; age_limit as usize / 64 + 1];
        words[0] &= !1;
        if let Some(last) = words.last_mut() {
            *last &= u64::MAX >> (63 - age_limit % 64);
        }
        let mut ages = AgeSet(words);
        ages.trim();
        ages
    }

    /// Constructs a set from a list of ages, rejecting `0`.
    pub fn from_ages<I: IntoIterator<Item = Age>>(ages: I) -> Result<Self, Error> {
        let mut set = AgeSet::default();
        for age in ages {
            if age == 0 {
                return Err(Error::AgeOutOfRange(age));
            }
            set.insert(age);
        }
        Ok(set)
    }

    pub fn contains(&self, age: Age) -> bool {
        self.0
            .get(age as usize / 64)
            .map_or(false, |word| (word >> (age % 64)) & 1 == 1)
    }

    fn insert(&mut self, age: Age) {
        let index = age as usize / 64;
        if self.0.len() <= index {
            self.0.resize(index + 1, 0);
        }
        self.0[index] |= 1 << (age % 64);
    }

    fn remove(&mut self, age: Age) {
        if let Some(word) = self.0.get_mut(age as usize / 64) {
            *word &= !(1 << (age % 64));
        }
        self.trim();
    }

    fn trim(&mut self) {
        while self.0.last() == Some(&0) {
            self.0.pop();
        }
    }

    /// Adds the age if it is absent, removes it otherwise.
    ///
    /// Returns whether the set contains the age afterwards.
    pub fn toggle(&mut self, age: Age) -> Result<bool, Error> {
        if age == 0 {
            return Err(Error::AgeOutOfRange(age));
        }
        if self.contains(age) {
            self.remove(age);
            Ok(false)
        } else {
            self.insert(age);
            Ok(true)
        }
    }

    /// Iterates over the ages in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = Age> + '_ {
        self.0.iter().enumerate().flat_map(|(index, &word)| {
            (0..64)
                .filter(move |bit| (word >> bit) & 1 == 1)
                .map(move |bit| index as Age * 64 + bit)
        })
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Age `0` is ignored.
impl FromIterator<Age> for AgeSet {
    fn from_iter<I: IntoIterator<Item = Age>>(iter: I) -> Self {
        let mut set = AgeSet::default();
        for age in iter.into_iter().filter(|&age| age > 0) {
            set.insert(age);
        }
        set
    }
}

impl TryFrom<Vec<Age>> for AgeSet {
    type Error = Error;

    fn try_from(ages: Vec<Age>) -> Result<Self, Self::Error> {
        AgeSet::from_ages(ages)
    }
}

impl From<AgeSet> for Vec<Age> {
    fn from(ages: AgeSet) -> Self {
        ages.iter().collect()
    }
}

/// Runs of consecutive ages are shortened, as in `1-4,7,9-15`.
impl Display for AgeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut ages = self.iter().peekable();
        let mut first = true;
        while let Some(start) = ages.next() {
            let mut end = start;
            while ages.peek() == Some(&(end + 1)) {
                end += 1;
                ages.next();
            }
            if !first {
                f.write_str(",")?;
            }
            first = false;
            if end > start {
                write!(f, "{}-{}", start, end)?;
            } else {
                write!(f, "{}", start)?;
            }
        }
        Ok(())
    }
}

/// A Life-like rule whose neighbor counts are filtered by age.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgeLife {
    /// Birth and survival sets, as in a plain rule.
    pub life: Life,
    /// Ages of the neighbors that count toward birth.
    pub birth_age: AgeSet,
    /// Ages of the neighbors that count toward survival.
    pub survive_age: AgeSet,
}

impl AgeLife {
    pub fn new(life: Life, birth_age: AgeSet, survive_age: AgeSet) -> Self {
        AgeLife {
            life,
            birth_age,
            survive_age,
        }
    }

    /// An age-weighted rule where every age counts.
    ///
    /// It behaves exactly like the plain `life`.
    pub fn unrestricted(life: Life, age_limit: Age) -> Self {
        AgeLife::new(life, AgeSet::full(age_limit), AgeSet::full(age_limit))
    }
}

impl Display for AgeLife {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (birth ages {}; survive ages {})",
            self.life, self.birth_age, self.survive_age
        )
    }
}

/// The active rule, plain or age-weighted.
#[derive(Clone, Debug, PartialEq, Eq, FromVariants)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RuleSet {
    /// Every living cell in the neighborhood counts.
    Plain(Life),
    /// Living cells count only when their ages are in the age sets.
    AgeWeighted(AgeLife),
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::Plain(Life::default())
    }
}

impl RuleSet {
    /// The birth and survival sets.
    pub fn life(&self) -> &Life {
        match self {
            RuleSet::Plain(life) => life,
            RuleSet::AgeWeighted(rule) => &rule.life,
        }
    }

    fn life_mut(&mut self) -> &mut Life {
        match self {
            RuleSet::Plain(life) => life,
            RuleSet::AgeWeighted(rule) => &mut rule.life,
        }
    }

    pub fn is_age_weighted(&self) -> bool {
        matches!(self, RuleSet::AgeWeighted(_))
    }

    /// Whether the rule contains `B0`.
    pub fn has_b0(&self) -> bool {
        self.life().has_b0()
    }

    /// Switches between plain and age-weighted mode.
    ///
    /// Entering age-weighted mode starts with every age from `1` to
    /// `age_limit` counting; leaving it drops the age sets.
    pub fn with_age_weighting(self, age_weighted: bool, age_limit: Age) -> Self {
        match (self, age_weighted) {
            (RuleSet::Plain(life), true) => AgeLife::unrestricted(life, age_limit).into(),
            (RuleSet::AgeWeighted(rule), false) => rule.life.into(),
            (rule, _) => rule,
        }
    }

    /// Toggles a birth count. Returns whether it is now in the birth set.
    pub fn toggle_birth(&mut self, count: u8) -> Result<bool, Error> {
        self.life_mut().birth.toggle(count)
    }

    /// Toggles a survival count. Returns whether it is now in the survival set.
    pub fn toggle_survive(&mut self, count: u8) -> Result<bool, Error> {
        self.life_mut().survive.toggle(count)
    }

    /// Toggles a birth age. Only valid for age-weighted rules.
    pub fn toggle_birth_age(&mut self, age: Age) -> Result<bool, Error> {
        match self {
            RuleSet::AgeWeighted(rule) => rule.birth_age.toggle(age),
            RuleSet::Plain(_) => Err(Error::NotAgeWeighted),
        }
    }

    /// Toggles a survival age. Only valid for age-weighted rules.
    pub fn toggle_survive_age(&mut self, age: Age) -> Result<bool, Error> {
        match self {
            RuleSet::AgeWeighted(rule) => rule.survive_age.toggle(age),
            RuleSet::Plain(_) => Err(Error::NotAgeWeighted),
        }
    }
}

impl Display for RuleSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RuleSet::Plain(life) => Display::fmt(life, f),
            RuleSet::AgeWeighted(rule) => Display::fmt(rule, f),
        }
    }
}
