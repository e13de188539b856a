//! Roster Core - Closed-set enumerations
//!
//! This crate defines the building blocks for declaring a fixed set of
//! named values over an ordinary value type:
//! - Members (`Member<T>` and the `MemberLike` capability)
//! - Custom equality (`Equaler`)
//! - Immutable enumerations (`Enum`) with O(1) parse by value
//! - Incremental construction (`Builder`)
//! - Deterministic seeded selection (`SplitMix64`)
//!
//! ```
//! use roster_core::{Enum, MemberLike};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct Color(&'static str);
//!
//! impl MemberLike for Color {
//!     type Value = &'static str;
//!
//!     fn value(&self) -> &&'static str {
//!         &self.0
//!     }
//! }
//!
//! const RED: Color = Color("red");
//! const GREEN: Color = Color("green");
//! const BLUE: Color = Color("blue");
//!
//! let colors = Enum::new([RED, GREEN, BLUE]);
//!
//! assert_eq!(colors.to_string(), "red, green, blue");
//! assert_eq!(colors.parse(&"green"), Some(&GREEN));
//! assert_eq!(colors.parse(&"purple"), None);
//! assert_eq!(colors.index(&BLUE), 2);
//! assert_eq!(colors.random(42), Some(&BLUE));
//! ```

pub mod member;
pub mod enumeration;
pub mod builder;
pub mod parse;
pub mod rng;
pub mod name;
pub mod error;

pub use member::*;
pub use enumeration::*;
pub use builder::*;
pub use parse::*;
pub use rng::*;
pub use name::*;
pub use error::*;
