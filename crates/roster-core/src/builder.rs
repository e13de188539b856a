//! Incremental enum construction
//!
//! A builder hands each member back as it is added, so a single statement
//! both names a member and records it:
//!
//! ```
//! use roster_core::{Builder, Member};
//!
//! let mut b = Builder::new();
//! let nl = b.add(Member("Netherlands"));
//! let fr = b.add(Member("France"));
//! let countries = b.build();
//!
//! assert_eq!(countries.index(&fr), 1);
//! assert!(countries.contains(&nl));
//! ```
//!
//! `build` consumes the builder, so nothing can be appended to an enum
//! after it has been handed out.

use std::hash::Hash;

use tracing::trace;

use crate::enumeration::Enum;
use crate::member::MemberLike;

/// Mutable staging area for an [`Enum`]
#[derive(Clone, Debug)]
pub struct Builder<M> {
    members: Vec<M>,
}

impl<M> Builder<M> {
    pub fn new() -> Self {
        Builder {
            members: Vec::new(),
        }
    }

    /// Record a member and return it unchanged
    pub fn add(&mut self, member: M) -> M
    where
        M: Clone,
    {
        self.members.push(member.clone());
        member
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<M> Builder<M>
where
    M: MemberLike,
    M::Value: Eq + Hash + Clone,
{
    /// Freeze the added members, in add order, into an enum
    pub fn build(self) -> Enum<M> {
        trace!(members = self.members.len(), "builder finalized");
        Enum::new(self.members)
    }
}

impl<M> Default for Builder<M> {
    fn default() -> Self {
        Builder::new()
    }
}
