//! Labels for states and alphabet symbols.
//!
//! Both are thin newtypes over their canonical string form. Anything that can
//! be turned into a string once (`&str`, `String`, `char`, integers) can be used
//! as a label, and the same raw value always canonicalizes to the same label.
//! Keeping the two as distinct types prevents passing a symbol where a state is
//! expected (and vice versa).

use std::borrow::Borrow;
use std::fmt;

/// A state label.
///
/// States carry no attributes beyond their label. Membership in the accepting
/// set and the reject role are recorded by the owning [`Dfa`][crate::dfa::Dfa].
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct State(String);

/// An alphabet symbol, stored in its canonical string form.
///
/// Strings, `char`s, `bool`s and every integer type convert through their
/// `Display` form. Floats have no `From` impl: their string form is not a
/// stable identity (`1.0` prints as `1`), so pass them as strings instead.
///
/// # Examples
///
/// ```
/// use dfa_rs::types::Symbol;
///
/// assert_eq!(Symbol::from(1), Symbol::from("1"));
/// assert_eq!(Symbol::from('a'), Symbol::from("a"));
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(String);

macro_rules! label_impls {
    ($name:ident) => {
        impl $name {
            /// Creates a label from anything with a string form.
            pub fn new(label: impl Into<String>) -> Self {
                $name(label.into())
            }

            /// Returns the canonical string form.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                $name(label.to_string())
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                $name(label)
            }
        }

        impl From<&String> for $name {
            fn from(label: &String) -> Self {
                $name(label.clone())
            }
        }

        impl From<&$name> for $name {
            fn from(label: &$name) -> Self {
                label.clone()
            }
        }

        impl From<char> for $name {
            fn from(label: char) -> Self {
                $name(label.to_string())
            }
        }

        impl From<$name> for String {
            fn from(label: $name) -> Self {
                label.0
            }
        }
    };
}

label_impls!(State);
label_impls!(Symbol);

macro_rules! from_primitive {
    ($name:ident: $($t:ty),*) => {
        $(
            impl From<$t> for $name {
                fn from(label: $t) -> Self {
                    $name(label.to_string())
                }
            }
        )*
    };
}

from_primitive!(State: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool);
from_primitive!(Symbol: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool);
