//! Enumeration members
//!
//! A member is a value bound to a name. Any type can act as a member by
//! implementing [`MemberLike`]; [`Member`] is the ready-made wrapper for
//! callers who don't need their own newtype.

use std::fmt;

use crate::name::short_type_name;

/// Equality used when comparing member values.
///
/// The provided method is plain structural equality. Override it to
/// compare by a subset of fields or with a looser rule (e.g. ignoring
/// ASCII case):
///
/// ```
/// use roster_core::Equaler;
///
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// struct Book {
///     title: String,
///     isbn: String,
/// }
///
/// impl Equaler for Book {
///     fn equal(&self, other: &Self) -> bool {
///         self.isbn == other.isbn
///     }
/// }
/// ```
pub trait Equaler: PartialEq {
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! structural_equaler {
    ($($ty:ty),* $(,)?) => {
        $(impl Equaler for $ty {})*
    };
}

structural_equaler!(
    (), bool, char, f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
    String, str,
);

macro_rules! tuple_equaler {
    ($(($($name:ident $idx:tt),+))*) => {
        $(impl<$($name: Equaler),+> Equaler for ($($name,)+) {
            fn equal(&self, other: &Self) -> bool {
                $(self.$idx.equal(&other.$idx))&&+
            }
        })*
    };
}

tuple_equaler! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
}

// Containers compare element-wise, so an element's custom rule still applies

impl<'a, T: Equaler + ?Sized> Equaler for &'a T {
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(*other)
    }
}

impl<T: Equaler + ?Sized> Equaler for Box<T> {
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(other)
    }
}

impl<T: Equaler> Equaler for Option<T> {
    fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.equal(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Equaler> Equaler for [T] {
    fn equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equal(b))
    }
}

impl<T: Equaler, const N: usize> Equaler for [T; N] {
    fn equal(&self, other: &Self) -> bool {
        self[..].equal(&other[..])
    }
}

impl<T: Equaler> Equaler for Vec<T> {
    fn equal(&self, other: &Self) -> bool {
        self[..].equal(&other[..])
    }
}

/// Capability every member type provides: access to its wrapped value.
pub trait MemberLike {
    type Value: Equaler;

    fn value(&self) -> &Self::Value;

    /// Unqualified name of the wrapped value type
    fn type_name() -> String
    where
        Self: Sized,
    {
        short_type_name::<Self::Value>()
    }

    /// Compare two members through their values' [`Equaler`]
    #[inline]
    fn same_value(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.value().equal(other.value())
    }
}

/// Generic member wrapping a single value
#[derive(Clone, Copy, Default)]
pub struct Member<T>(pub T);

impl<T> Member<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Member(value)
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Equaler> MemberLike for Member<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Member<T> {
    fn from(value: T) -> Self {
        Member(value)
    }
}

impl<T: Equaler> PartialEq for Member<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.equal(&other.0)
    }
}

impl<T: Equaler + Eq> Eq for Member<T> {}

impl<T: fmt::Display> fmt::Display for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member::<{}>({:?})", short_type_name::<T>(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Folded(String);

    impl Equaler for Folded {
        fn equal(&self, other: &Self) -> bool {
            self.0.eq_ignore_ascii_case(&other.0)
        }
    }

    #[test]
    fn test_member_value() {
        assert_eq!(*Member::new("blue").value(), "blue");
        assert_eq!(*Member(14).value(), 14);
        assert_eq!(Member::from(7u8).into_inner(), 7);
    }

    #[test]
    fn test_member_display_is_value_display() {
        assert_eq!(Member("red").to_string(), "red");
        assert_eq!(Member(42).to_string(), "42");
    }

    #[test]
    fn test_member_debug_is_constructor_literal() {
        assert_eq!(format!("{:?}", Member("red")), "Member::<&str>(\"red\")");
        assert_eq!(
            format!("{:?}", Member(String::from("red"))),
            "Member::<String>(\"red\")"
        );
        assert_eq!(format!("{:?}", Member(3u16)), "Member::<u16>(3)");
    }

    #[test]
    fn test_member_type_name_without_instance() {
        assert_eq!(<Member<String> as MemberLike>::type_name(), "String");
        assert_eq!(<Member<i64> as MemberLike>::type_name(), "i64");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Member("red"), Member("red"));
        assert_ne!(Member("red"), Member("Red"));
    }

    #[test]
    fn test_containers_use_element_equaler() {
        let folded = |s: &str| Folded(s.to_string());
        assert!((1u8, folded("a")).equal(&(1, folded("A"))));
        assert!(!(1u8, folded("a")).equal(&(2, folded("a"))));
        assert!(Some(folded("x")).equal(&Some(folded("X"))));
        assert!(!Some(folded("x")).equal(&None));
        assert!(vec![folded("a"), folded("b")].equal(&vec![folded("A"), folded("B")]));
        assert!(!vec![folded("a")].equal(&vec![folded("a"), folded("b")]));
        assert!([folded("q"), folded("q")].equal(&[folded("Q"), folded("q")]));
        assert!(Box::new(folded("z")).equal(&Box::new(folded("Z"))));
        assert!(<&Folded as Equaler>::equal(&&folded("r"), &&folded("R")));
    }

    #[test]
    fn test_equaler_overrides_member_equality() {
        let lower = Member(Folded("red".into()));
        let upper = Member(Folded("RED".into()));
        assert_eq!(lower, upper);
        assert!(lower.same_value(&upper));
        assert_ne!(lower, Member(Folded("green".into())));
    }
}
