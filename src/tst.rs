//! Provides a ternary search trie implementation for storing keys composed
//! of sequences of atoms. A key may have an associated (optional) value.
//!
//! Atoms must support the TstAtom trait. Atom values must support the
//! TstValue trait.
//!
//! Each node holds a single atom and three links: `left` and `right` lead
//! to sibling atoms which sort below and above it at the same key position,
//! `mid` leads to the next key position. Lookups binary-search among
//! siblings and only spend a `mid` step per matched atom, which keeps the
//! node count far below a one-child-per-atom trie while preserving ordered
//! traversal.
//!
//! The interface relies on iterators to insert, remove, check for existence
//! of keys. Because the trie is based on the concept of atoms, then it
//! is up to the user to decide what kind of atoms to use to make most sense
//! of the keys we are storing.
//!
//! Example 1
//! ```
//! use terning::tst::Tst;
//!
//! let mut tst = Tst::new();
//! let input = "abcdef".chars();
//! tst.insert_with_value(input.clone(), Some("abcdef".len()));
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our trie
//! assert!(tst.contains(input.clone())); // Clone the original iterator
//! assert!(tst.contains("abcdef".chars())); // Create a new iterator
//! assert!(tst.contains(['a', 'b', 'c', 'd', 'e', 'f'])); // Build an array, etc...
//! assert_eq!(tst.get(['a', 'b', 'c', 'd', 'e', 'f']), Some(&"abcdef".len())); // Get our value back
//! assert_eq!(tst.remove(input.clone()), Some("abcdef".len()));
//! assert!(!tst.contains(input));
//! ```
//!
//! Example 2
//!
//! Sibling order makes the trie a completion index: collecting the subtree
//! below a prefix yields every stored key starting with it, in ascending
//! lexical order.
//! ```
//! use terning::tst::TstString;
//!
//! let tst: TstString<usize> =
//!     TstString::balanced(["a", "aa", "aaab", "abc", "def"].iter().map(|s| s.chars()));
//!
//! let all: Vec<String> = tst.completions("a".chars());
//! assert_eq!(all, ["a", "aa", "aaab", "abc"]);
//!
//! let capped: Vec<String> = tst.completions_capped("a".chars(), 2);
//! assert_eq!(capped, ["a", "aa"]);
//!
//! let none: Vec<String> = tst.completions("z".chars());
//! assert!(none.is_empty());
//! ```
//!
//! Example 3
//! ```
//! use terning::tst::Tst;
//!
//! let mut tst = Tst::new();
//! let input = "the quick brown fox".split_whitespace();
//! tst.insert_with_value(input.clone(), Some(4));
//!
//! // Anything which implements IntoIterator<Item=&str> can now be used
//! // to interact with our trie
//! assert!(tst.contains(input.clone()));
//! assert!(tst.contains_prefix("the quick brown".split_whitespace()));
//! assert_eq!(tst.remove(input.clone()), Some(4));
//! assert!(!tst.contains(input));
//! ```
//!
//! Keys must contain at least one atom: inserting an empty key is a no-op
//! and the empty prefix has no completions.
//!
//! Typical usages for this data structure:
//!  - Autocompletion / prefix search
//!  - Sorted key storage with significant amounts of
//!    sub-key duplication
//!  - Interning
//!  - ...

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::iterator::KeyValueRef;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a Tst must implement
/// TstAtom.
pub trait TstAtom: Copy + Default + PartialEq + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TstAtom for A
where
    A: Copy + Default + PartialEq + Ord,
{
    // Nothing to implement, since A already supports the other traits.
    // It has the functions it needs already
}

/// Values which we wish to store in a Tst must implement
/// TstValue.
pub trait TstValue: Default {}

// Blanket implementation which satisfies the compiler
impl<V> TstValue for V
where
    V: Default,
{
    // Nothing to implement, since V already supports the other traits.
    // It has the functions it needs already
}

/// Convenience type for tries keyed by `char` atoms.
pub type TstString<V> = Tst<char, V>;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct AtomValue<A, V> {
    pub(crate) atom: A,
    pub(crate) value: Option<V>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node<A, V> {
    pub(crate) pair: AtomValue<A, V>,
    pub(crate) terminated: bool,
    pub(crate) left: Option<Box<Node<A, V>>>,
    pub(crate) mid: Option<Box<Node<A, V>>>,
    pub(crate) right: Option<Box<Node<A, V>>>,
}

/// Stores keys of atoms as a ternary search trie.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Tst<A, V> {
    pub(crate) root: Option<Box<Node<A, V>>>,
    count: usize,
}

impl<A: TstAtom, V: TstValue> Node<A, V> {
    fn new(atom: A) -> Self {
        Self {
            pair: AtomValue { atom, value: None },
            ..Default::default()
        }
    }
}

impl<A: TstAtom, V: TstValue> Tst<A, V> {
    /// Create a new Tst.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a Tst from a collection of keys, inserting them in uniformly
    /// random order.
    ///
    /// Sibling links obey binary search tree ordering, so inserting keys in
    /// an order correlated with their sort order (a sorted word list, say)
    /// degenerates sibling chains into linked lists. Shuffling first keeps
    /// the expected node depth logarithmic in the number of distinct atoms
    /// per position, without any rebalancing machinery.
    ///
    /// Duplicate keys collapse to a single entry.
    pub fn balanced<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: IntoIterator<Item = A>,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.shuffle(&mut thread_rng());
        let mut tst = Self::new();
        for key in keys {
            tst.insert(key);
        }
        tst
    }

    /// Clear the Tst.
    pub fn clear(&mut self) {
        self.root = None;
        self.count = 0;
    }

    /// Does the Tst contain the supplied key?
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.find_node(key).map_or(false, |node| node.terminated)
    }

    /// Does the Tst contain the supplied prefix?
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.find_node(prefix).is_some()
    }

    /// How many keys does the Tst contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Get a reference to a key's associated value.
    pub fn get<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&V> {
        self.find_node(key).and_then(|node| node.pair.value.as_ref())
    }

    /// Insert the key (with a value of None) into the Tst. If the key is
    /// already present the value is updated to None. Returns the previously
    /// associated value.
    ///
    /// Inserting an empty key is a no-op and returns None.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<V> {
        self.insert_with_value(key, None)
    }

    /// Insert the key and value into the Tst. If the key is already present
    /// the value is updated to the new value. Returns the previously
    /// associated value.
    ///
    /// Inserting an empty key is a no-op and returns None.
    pub fn insert_with_value<K: IntoIterator<Item = A>>(
        &mut self,
        key: K,
        value: Option<V>,
    ) -> Option<V> {
        let mut atoms = key.into_iter();
        let mut atom = match atoms.next() {
            Some(atom) => atom,
            None => return None,
        };
        let mut link = &mut self.root;

        loop {
            let node = link.get_or_insert_with(|| Box::new(Node::new(atom)));
            match atom.cmp(&node.pair.atom) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => match atoms.next() {
                    Some(next) => {
                        atom = next;
                        link = &mut node.mid;
                    }
                    None => {
                        if !node.terminated {
                            self.count += 1;
                        }
                        node.terminated = true;
                        let previous = node.pair.value.take();
                        node.pair.value = value;
                        return previous;
                    }
                },
            }
        }
    }

    /// Is the Tst empty?
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Create an iterator over the Tst.
    ///
    /// Keys are yielded in ascending lexical order.
    pub fn iter(&self) -> impl Iterator<Item = KeyValueRef<'_, A, V>> {
        self.into_iter()
    }

    /// Collect every stored key which starts with the supplied prefix, in
    /// ascending lexical order.
    ///
    /// The prefix is included when it is itself a stored key. An empty
    /// prefix has no completions.
    pub fn completions<P, K>(&self, prefix: P) -> Vec<K>
    where
        P: IntoIterator<Item = A>,
        K: FromIterator<A>,
    {
        self.completions_internal(prefix, usize::MAX)
    }

    /// Collect at most `limit` completions of the supplied prefix, in
    /// ascending lexical order.
    ///
    /// The result is always a leading slice of what [`Tst::completions`]
    /// returns; the collection stops as soon as the cap is reached.
    pub fn completions_capped<P, K>(&self, prefix: P, limit: usize) -> Vec<K>
    where
        P: IntoIterator<Item = A>,
        K: FromIterator<A>,
    {
        self.completions_internal(prefix, limit)
    }

    /// Remove the key from the Tst. If the key has an associated value, this
    /// is returned. If the key is not present or has an associated value of
    /// None, None is returned.
    ///
    /// Removal is logical: the terminal node is unmarked but no nodes are
    /// pruned, since its mid chain may spell out other stored keys.
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<V> {
        let node = match self.find_node_mut(key) {
            Some(node) => node,
            None => return None,
        };
        let present = node.terminated;
        node.terminated = false;
        let value = node.pair.value.take();
        if present {
            self.count -= 1;
        }
        value
    }

    fn find_node<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&Node<A, V>> {
        let mut atoms = key.into_iter();
        let mut atom = atoms.next()?;
        let mut cursor = self.root.as_deref();

        while let Some(node) = cursor {
            match atom.cmp(&node.pair.atom) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => match atoms.next() {
                    Some(next) => {
                        atom = next;
                        cursor = node.mid.as_deref();
                    }
                    None => return Some(node),
                },
            }
        }
        None
    }

    fn find_node_mut<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<&mut Node<A, V>> {
        let mut atoms = key.into_iter();
        let mut atom = atoms.next()?;
        let mut cursor = self.root.as_deref_mut();

        while let Some(node) = cursor {
            match atom.cmp(&node.pair.atom) {
                Ordering::Less => cursor = node.left.as_deref_mut(),
                Ordering::Greater => cursor = node.right.as_deref_mut(),
                Ordering::Equal => match atoms.next() {
                    Some(next) => {
                        atom = next;
                        cursor = node.mid.as_deref_mut();
                    }
                    None => return Some(node),
                },
            }
        }
        None
    }

    fn completions_internal<P, K>(&self, prefix: P, limit: usize) -> Vec<K>
    where
        P: IntoIterator<Item = A>,
        K: FromIterator<A>,
    {
        let mut results = vec![];
        if limit == 0 {
            return results;
        }
        let mut path: Vec<A> = prefix.into_iter().collect();
        if path.is_empty() {
            return results;
        }
        let node = match self.find_node(path.iter().copied()) {
            Some(node) => node,
            None => return results,
        };
        // A shorter key sorts before every key it prefixes, so the prefix
        // itself always comes first.
        if node.terminated {
            results.push(path.iter().copied().collect());
        }
        if let Some(mid) = node.mid.as_deref() {
            Self::collect(mid, &mut path, &mut results, limit);
        }
        results
    }

    // In-order walk. Everything reachable via left sorts below this node's
    // path and everything via right above it; this node's own key (if
    // terminated) is a strict prefix of its mid subtree.
    fn collect<K>(node: &Node<A, V>, path: &mut Vec<A>, results: &mut Vec<K>, limit: usize)
    where
        K: FromIterator<A>,
    {
        if results.len() >= limit {
            return;
        }
        if let Some(left) = node.left.as_deref() {
            Self::collect(left, path, results, limit);
        }
        if results.len() >= limit {
            return;
        }
        path.push(node.pair.atom);
        if node.terminated {
            results.push(path.iter().copied().collect());
        }
        if let Some(mid) = node.mid.as_deref() {
            Self::collect(mid, path, results, limit);
        }
        path.pop();
        if let Some(right) = node.right.as_deref() {
            Self::collect(right, path, results, limit);
        }
    }
}
