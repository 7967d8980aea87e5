//! Provides a ternary search trie implementation for storing keys composed
//! of a [`std::vec::Vec`] of atoms. A key may have an associated
//! value.
//!
//! Keys must support the [`crate::tst::TstAtom`] trait for each atom.
//! Atom values must support the [`crate::tst::TstValue`] trait.
//!
//! In a ternary search trie every node carries one atom and three links:
//! `left` and `right` order sibling atoms at the same key position like a
//! binary search tree, while `mid` advances to the next position. That
//! ordering is what makes the structure a completion index: the keys below
//! any prefix come back in ascending lexical order, optionally capped at a
//! limit. Construction via [`crate::tst::Tst::balanced`] inserts keys in a
//! uniformly random order, which keeps expected lookup depth logarithmic
//! even when the input arrives sorted.
//!
//! The interface relies on iterators to insert, remove, check for existence
//! of keys. Because the trie is based on the concept of atoms, then it
//! is up to the user to decide what kind of atoms to use to make most sense
//! of the keys we are storing. This flexibility can be really useful when
//! string processing: (atoms can be `Vec<char>` or `Vec<&str>` or ...?) or
//! when working with numeric tries.
//!
//! Since the most common use of the trie is to store the chars of a String,
//! a convenience type, [`crate::tst::TstString`] is provided. If that
//! doesn't suffice, then you must use the [`crate::tst::Tst`] type
//! directly.
//!
//! Examples:
//! * tst : [`crate::tst`]
//! * iterator : [`crate::iterator`]
//!
//! Typical usages for this data structure:
//!  - Autocompletion / prefix search
//!  - Sorted key storage with significant amounts of
//!    sub-key duplication
//!  - Interning
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod iterator;

pub mod tst;
