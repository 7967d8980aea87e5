//! Provides Tst iterators.
//!
use crate::tst::{Node, Tst, TstAtom, TstValue};

/// Iterator Item
#[derive(Debug)]
pub struct KeyValue<A, V> {
    pub key: Vec<A>,
    pub value: Option<V>,
}

/// Iterator Item
#[derive(Debug)]
pub struct KeyValueRef<'a, A, V> {
    pub key: Vec<A>,
    pub value: Option<&'a V>,
}

// An in-order walk over the three-way links. Descend expands a subtree.
// Visit appends the node's atom to the running path and yields when the
// node terminates a key; the matching Ascend drops that atom once the mid
// subtree is exhausted. Left and right siblings do not share the node's
// atom, so they sit outside the Visit/Ascend window.
#[derive(Debug)]
enum Step<A, V> {
    Descend(Box<Node<A, V>>),
    Visit(Box<Node<A, V>>),
    Ascend,
}

#[derive(Debug)]
enum StepRef<'a, A, V> {
    Descend(&'a Node<A, V>),
    Visit(&'a Node<A, V>),
    Ascend,
}

/// Iterator over a Tst.
///
/// Keys are yielded in ascending lexical order.
#[derive(Debug)]
pub struct TstIntoIterator<A, V> {
    stack: Vec<Step<A, V>>,
    path: Vec<A>,
}

impl<A: TstAtom, V: TstValue> IntoIterator for Tst<A, V> {
    type Item = KeyValue<A, V>;
    type IntoIter = TstIntoIterator<A, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut stack = vec![];
        if let Some(root) = self.root {
            stack.push(Step::Descend(root));
        }
        TstIntoIterator { stack, path: vec![] }
    }
}

impl<A: TstAtom, V: TstValue> Iterator for TstIntoIterator<A, V> {
    type Item = KeyValue<A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Descend(mut node) => {
                    // Pushed in reverse visiting order.
                    if let Some(right) = node.right.take() {
                        self.stack.push(Step::Descend(right));
                    }
                    self.stack.push(Step::Ascend);
                    if let Some(mid) = node.mid.take() {
                        self.stack.push(Step::Descend(mid));
                    }
                    let left = node.left.take();
                    self.stack.push(Step::Visit(node));
                    if let Some(left) = left {
                        self.stack.push(Step::Descend(left));
                    }
                }
                Step::Visit(mut node) => {
                    self.path.push(node.pair.atom);
                    if node.terminated {
                        return Some(KeyValue {
                            key: self.path.clone(),
                            value: node.pair.value.take(),
                        });
                    }
                }
                Step::Ascend => {
                    self.path.pop();
                }
            }
        }
        None
    }
}

/// Iterator over a Tst.
///
/// Keys are yielded in ascending lexical order.
#[derive(Debug)]
pub struct TstRefIntoIterator<'a, A, V> {
    stack: Vec<StepRef<'a, A, V>>,
    path: Vec<A>,
}

impl<'a, A: TstAtom, V: TstValue> IntoIterator for &'a Tst<A, V> {
    type Item = KeyValueRef<'a, A, V>;
    type IntoIter = TstRefIntoIterator<'a, A, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut stack = vec![];
        if let Some(root) = self.root.as_deref() {
            stack.push(StepRef::Descend(root));
        }
        TstRefIntoIterator { stack, path: vec![] }
    }
}

impl<'a, A: TstAtom, V: TstValue> Iterator for TstRefIntoIterator<'a, A, V> {
    type Item = KeyValueRef<'a, A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                StepRef::Descend(node) => {
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push(StepRef::Descend(right));
                    }
                    self.stack.push(StepRef::Ascend);
                    if let Some(mid) = node.mid.as_deref() {
                        self.stack.push(StepRef::Descend(mid));
                    }
                    self.stack.push(StepRef::Visit(node));
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push(StepRef::Descend(left));
                    }
                }
                StepRef::Visit(node) => {
                    self.path.push(node.pair.atom);
                    if node.terminated {
                        return Some(KeyValueRef {
                            key: self.path.clone(),
                            value: node.pair.value.as_ref(),
                        });
                    }
                }
                StepRef::Ascend => {
                    self.path.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{distributions::Alphanumeric, thread_rng, Rng};
    use std::iter::FromIterator;

    #[test]
    fn it_iterates_over_empty_tst() {
        let tst: Tst<char, usize> = Tst::new();
        for kv_pair in tst.into_iter() {
            println!("kv_pair: {:?}", kv_pair);
        }
    }

    #[test]
    fn it_iterates_and_re_assembles_tst() {
        let mut tst = Tst::new();
        let input = "the quick brown fox".split_whitespace();
        tst.insert_with_value(input.clone(), Some(4));

        for kv_pair in tst.into_iter() {
            println!("kv_pair: {:?}", kv_pair);
            assert_eq!(
                "the quick brown fox",
                Itertools::intersperse(kv_pair.key.into_iter(), " ").collect::<String>()
            );
        }
    }

    #[test]
    fn it_iterates_in_lexical_order() {
        let mut tst: Tst<char, usize> = Tst::new();
        for entry in ["abcdef", "abcdefg", "abd", "ez", "z", "ze", "abdd"] {
            tst.insert(entry.chars());
        }
        let expected = ["abcdef", "abcdefg", "abd", "abdd", "ez", "z", "ze"];
        let keys: Vec<String> = tst.iter().map(|pair| String::from_iter(pair.key)).collect();
        assert_eq!(keys, expected);
        // Consuming iteration yields the same sequence
        let keys: Vec<String> = tst
            .into_iter()
            .map(|pair| String::from_iter(pair.key))
            .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn it_yields_values_with_keys() {
        let mut tst: Tst<char, usize> = Tst::new();
        tst.insert_with_value("ab".chars(), Some(2));
        tst.insert_with_value("a".chars(), Some(1));
        tst.insert("b".chars());

        let pairs: Vec<(String, Option<usize>)> = tst
            .iter()
            .map(|pair| (String::from_iter(pair.key), pair.value.copied()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("a".to_string(), Some(1)),
                ("ab".to_string(), Some(2)),
                ("b".to_string(), None)
            ]
        );
    }

    #[test]
    fn it_matches_iteration_with_completions() {
        let mut tst: Tst<char, usize> = Tst::new();
        for entry in ["cab", "cabbage", "dab", "cabs", "cobble", "dot"] {
            tst.insert(entry.chars());
        }
        let iterated: Vec<String> = tst.iter().map(|pair| String::from_iter(pair.key)).collect();
        let mut completed: Vec<String> = tst.completions("c".chars());
        completed.extend(tst.completions::<_, String>("d".chars()));
        assert_eq!(iterated, completed);
    }

    #[test]
    fn it_finds_in_owned_populated_tst() {
        static POPULATION_SIZE: usize = 1000;
        static SIZE: usize = 64;
        let mut tst: Tst<char, usize> = Tst::new();
        let mut searches: Vec<Vec<char>> = vec![];
        for _i in 0..POPULATION_SIZE {
            let entry: Vec<char> = thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..=SIZE))
                .map(char::from)
                .collect();
            searches.push(entry.clone());
            let len = entry.len();
            tst.insert_with_value(entry, Some(len));
        }
        for entry in &searches {
            let mut iterator = tst.clone().into_iter();
            assert_eq!(
                Some(entry.clone()),
                iterator.find(|x| x.key == *entry).map(|x| x.key)
            );
        }
    }

    #[test]
    fn it_finds_in_populated_tst() {
        static POPULATION_SIZE: usize = 1000;
        static SIZE: usize = 64;
        let mut tst: Tst<char, usize> = Tst::new();
        let mut searches: Vec<Vec<char>> = vec![];
        for _i in 0..POPULATION_SIZE {
            let entry: Vec<char> = thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..=SIZE))
                .map(char::from)
                .collect();
            searches.push(entry.clone());
            let len = entry.len();
            tst.insert_with_value(entry, Some(len));
        }
        for entry in &searches {
            let mut iterator = tst.iter();
            assert_eq!(
                Some(entry.clone()),
                iterator.find(|x| x.key == *entry).map(|x| x.key)
            );
        }
    }
}
