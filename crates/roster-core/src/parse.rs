//! Lookup under the value type's own equality
//!
//! [`Enum::parse`] hashes values structurally, which can't honor a custom
//! [`Equaler`]. [`parse`] scans members in order instead, so it is O(n).

use crate::enumeration::Enum;
use crate::member::{Equaler, MemberLike};

/// First member whose value [`Equaler::equal`]s `candidate`
pub fn parse<'e, M>(enumeration: &'e Enum<M>, candidate: &M::Value) -> Option<&'e M>
where
    M: MemberLike,
{
    enumeration
        .iter()
        .find(|member| member.value().equal(candidate))
}
