//! Slice utilities - dedup, chunking, flattening, set operations, grouping
//! and sampling.
//!
//! Every function borrows its input and returns a new `Vec`; nothing is
//! mutated in place. Out-of-range indices and zero sizes produce the safe
//! default documented on each function instead of panicking.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;

/// Sort direction for [`sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// An arbitrarily nested list, the input of [`flatten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Item(value)
    }
}

/// Bounds-checked access. A negative or out-of-range index yields `default`.
///
/// ```
/// use utilkit::array::get;
/// assert_eq!(get(&[1, 2, 3], 1, 0), 2);
/// assert_eq!(get(&[1, 2, 3], -1, 0), 0);
/// ```
pub fn get<T: Clone>(items: &[T], index: isize, default: T) -> T {
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .cloned()
        .unwrap_or(default)
}

pub fn first<T: Clone>(items: &[T]) -> Option<T> {
    items.first().cloned()
}

pub fn last<T: Clone>(items: &[T]) -> Option<T> {
    items.last().cloned()
}

/// Removes duplicates, keeping the first occurrence of each value.
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Removes elements whose derived key was already seen.
pub fn unique_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect()
}

/// Splits into consecutive groups of `size`; the last group may be shorter.
/// A `size` of zero yields an empty result.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Flattens nested lists up to `depth` levels. `depth == 0` returns a
/// shallow copy.
///
/// ```
/// use utilkit::array::{flatten, Nested::{Item, List}};
/// let nested = vec![Item(1), List(vec![Item(2), List(vec![Item(3)])])];
/// assert_eq!(flatten(&nested, 1), vec![Item(1), Item(2), List(vec![Item(3)])]);
/// ```
pub fn flatten<T: Clone>(items: &[Nested<T>], depth: usize) -> Vec<Nested<T>> {
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, depth, &mut out);
    out
}

fn flatten_into<T: Clone>(items: &[Nested<T>], depth: usize, out: &mut Vec<Nested<T>>) {
    for item in items {
        match item {
            Nested::List(inner) if depth > 0 => flatten_into(inner, depth - 1, out),
            other => out.push(other.clone()),
        }
    }
}

/// Fully flattens nested lists into their leaf values.
pub fn flatten_deep<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    fn walk<T: Clone>(items: &[Nested<T>], out: &mut Vec<T>) {
        for item in items {
            match item {
                Nested::Item(value) => out.push(value.clone()),
                Nested::List(inner) => walk(inner, out),
            }
        }
    }
    let mut out = Vec::new();
    walk(items, &mut out);
    out
}

/// Elements of `a` that also appear in `b`. Duplicates in `a` are kept.
pub fn intersection<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|x| b.contains(x)).cloned().collect()
}

/// Elements of `a` that do not appear in `b`. Duplicates in `a` are kept.
pub fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|x| !b.contains(x)).cloned().collect()
}

/// Distinct elements of `a` followed by the new ones from `b`.
pub fn union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let joined: Vec<T> = a.iter().chain(b).cloned().collect();
    unique(&joined)
}

/// Stable sort by a derived key.
///
/// Elements whose key is `None` sort last in ascending order and first in
/// descending order. The input is left untouched.
pub fn sort_by<T, K, F>(items: &[T], key: F, order: SortOrder) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> Option<K>,
{
    let mut keyed: Vec<(Option<K>, &T)> = items.iter().map(|item| (key(item), item)).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        // `None < Some` for Option, so missing keys need flipping in Asc
        let ord = match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some(_), None) => std::cmp::Ordering::Less,
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Groups elements by the string form of a derived key, skipping `None`.
///
/// Groups are returned in the order their key was first seen.
pub fn group_by<T, K, F>(items: &[T], key: F) -> Vec<(String, Vec<T>)>
where
    T: Clone,
    K: ToString,
    F: Fn(&T) -> Option<K>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for item in items {
        let Some(k) = key(item) else { continue };
        let k = k.to_string();
        match index.get(&k) {
            Some(&slot) => groups[slot].1.push(item.clone()),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item.clone()]));
            }
        }
    }
    groups
}

/// Group sizes, in first-seen key order.
pub fn count_by<T, K, F>(items: &[T], key: F) -> Vec<(String, usize)>
where
    T: Clone,
    K: ToString,
    F: Fn(&T) -> Option<K>,
{
    group_by(items, key)
        .into_iter()
        .map(|(k, group)| (k, group.len()))
        .collect()
}

/// Up to `count` distinct elements chosen at random without replacement.
pub fn sample<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    sample_with(items, count, &mut rand::thread_rng())
}

/// [`sample`] with an injected RNG.
pub fn sample_with<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    items.choose_multiple(rng, count).cloned().collect()
}

/// A randomly permuted copy.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Moves the element at `from` to position `to`.
///
/// Returns an unchanged copy if either index is out of range.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from >= out.len() || to >= out.len() {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Sums a derived numeric field. `None` and non-finite values count as zero.
pub fn sum_by<T, F>(items: &[T], key: F) -> f64
where
    F: Fn(&T) -> Option<f64>,
{
    items
        .iter()
        .filter_map(&key)
        .filter(|n| n.is_finite())
        .sum()
}

/// Drops the `None` entries.
pub fn compact<T: Clone>(items: &[Option<T>]) -> Vec<T> {
    items.iter().flatten().cloned().collect()
}

/// Integers from `start` (inclusive) to `end` (exclusive) by `step`.
///
/// A negative `step` counts down. A zero step, or one pointing away from
/// `end`, yields an empty vec. Stops early rather than overflow `i64`.
pub fn range(start: i64, end: i64, step: i64) -> Vec<i64> {
    let mut out = Vec::new();
    if step == 0 {
        return out;
    }
    let in_bounds = |n: i64| if step > 0 { n < end } else { n > end };
    let mut current = start;
    while in_bounds(current) {
        out.push(current);
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    out
}
