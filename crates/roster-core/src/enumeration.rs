//! Immutable closed-set enumerations
//!
//! An [`Enum`] owns an ordered list of members and a value→position map
//! derived from it once, at construction. Nothing mutates either afterwards,
//! so the two can never disagree.
//!
//! Duplicate values are allowed. Every lookup resolves them the same way:
//! the first member in insertion order wins.

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::slice;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::member::{Equaler, MemberLike};
use crate::name::short_type_name;
use crate::rng::SplitMix64;

/// Ordered, immutable collection of members
pub struct Enum<M: MemberLike> {
    members: Vec<M>,
    positions: HashMap<M::Value, usize>,
}

impl<M> Enum<M>
where
    M: MemberLike,
    M::Value: Eq + Hash + Clone,
{
    /// Build an enum from members in declaration order
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = M>,
    {
        let members: Vec<M> = members.into_iter().collect();
        let mut positions = HashMap::with_capacity(members.len());
        let mut duplicates = 0usize;

        for (i, member) in members.iter().enumerate() {
            match positions.entry(member.value().clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(_) => duplicates += 1,
            }
        }

        debug!(
            members = members.len(),
            duplicates,
            value_type = %short_type_name::<M::Value>(),
            "enum constructed"
        );

        Enum { members, positions }
    }

    /// Convert a raw value into the member wrapping it.
    ///
    /// Accepts any borrowed form of the value, like [`HashMap::get`].
    /// Compares values structurally; use [`crate::parse()`] for the
    /// value type's own [`Equaler`] rule.
    pub fn parse<Q>(&self, value: &Q) -> Option<&M>
    where
        M::Value: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.positions.get(value).map(|&i| &self.members[i])
    }
}

impl<M: MemberLike> Enum<M> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Unqualified name of the wrapped value type
    pub fn type_name(&self) -> String {
        short_type_name::<M::Value>()
    }

    /// Does any member carry a value equal to the given member's value?
    pub fn contains(&self, member: &M) -> bool {
        self.position(member).is_some()
    }

    /// Wrapped value of the given member. Does not check membership.
    #[inline]
    pub fn value<'m>(&self, member: &'m M) -> &'m M::Value {
        member.value()
    }

    /// Position of the first member whose value equals the given member's
    pub fn position(&self, member: &M) -> Option<usize> {
        let value = member.value();
        self.members.iter().position(|m| m.value().equal(value))
    }

    /// Position of the given member.
    ///
    /// # Panics
    ///
    /// Panics if no member has an equal value. Use [`Enum::contains`] or
    /// [`Enum::try_index`] when membership isn't known.
    pub fn index(&self, member: &M) -> usize {
        match self.try_index(member) {
            Ok(i) => i,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_index(&self, member: &M) -> RosterResult<usize> {
        self.position(member).ok_or_else(|| RosterError::NotAMember {
            type_name: short_type_name::<M::Value>(),
        })
    }

    /// Members in declaration order
    #[inline]
    pub fn members(&self) -> &[M] {
        &self.members
    }

    /// Member values, parallel to [`Enum::members`]
    pub fn values(&self) -> Vec<&M::Value> {
        self.members.iter().map(|m| m.value()).collect()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&M> {
        self.members.get(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, M> {
        self.members.iter()
    }

    /// Deterministically pick a member from a seed.
    ///
    /// The seed drives one step of [`SplitMix64`]; the 64-bit output `x`
    /// maps to `(x * len) >> 64` computed in 128 bits. Both steps are
    /// fixed, so a seed picks the same member on every run and platform.
    /// Returns `None` for an empty enum.
    pub fn random(&self, seed: u64) -> Option<&M> {
        let mut rng = SplitMix64::seed_from_u64(seed);
        scale(rng.next_u64(), self.members.len()).map(|i| &self.members[i])
    }

    /// Pick a member using a caller-supplied generator
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&M> {
        self.members.choose(rng)
    }
}

/// Map a uniform 64-bit sample onto `0..len`
#[inline]
fn scale(sample: u64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(((sample as u128 * len as u128) >> 64) as usize)
}

impl<M> Clone for Enum<M>
where
    M: MemberLike + Clone,
    M::Value: Clone,
{
    fn clone(&self) -> Self {
        Enum {
            members: self.members.clone(),
            positions: self.positions.clone(),
        }
    }
}

impl<M> Default for Enum<M>
where
    M: MemberLike,
{
    fn default() -> Self {
        Enum {
            members: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<M> FromIterator<M> for Enum<M>
where
    M: MemberLike,
    M::Value: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Enum::new(iter)
    }
}

impl<'a, M: MemberLike> IntoIterator for &'a Enum<M> {
    type Item = &'a M;
    type IntoIter = slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<M> fmt::Display for Enum<M>
where
    M: MemberLike,
    M::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", member.value())?;
        }
        Ok(())
    }
}

impl<M> fmt::Debug for Enum<M>
where
    M: MemberLike + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Enum::new(")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", member)?;
        }
        f.write_str(")")
    }
}
