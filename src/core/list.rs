//! Singly-linked student sequence with a stable merge sort
//!
//! The collection is an owned chain of `Box` nodes, insertion order =
//! file order at load time. Sorting relinks the existing nodes; payloads
//! are never copied. The recursive split keeps the stack at O(log n) and
//! the merge takes the lesser-or-equal front element, ties resolving to
//! the left half, which is what makes the sort stable.

use crate::types::StudentRecord;
use std::cmp::Ordering;

type Link = Option<Box<Node>>;

struct Node {
    record: StudentRecord,
    next: Link,
}

/// Ordered sequence of student records
///
/// Built once by the parse stage, re-ordered in place by [`sort_by`],
/// consumed once by the writer.
///
/// [`sort_by`]: StudentList::sort_by
#[derive(Default)]
pub struct StudentList {
    head: Link,
    len: usize,
}

impl StudentList {
    /// Create an empty list.
    pub fn new() -> Self {
        StudentList { head: None, len: 0 }
    }

    /// Number of records in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a record at the end of the list.
    ///
    /// Walks the chain to the tail, so building a large list this way is
    /// quadratic; bulk construction goes through `FromIterator` instead.
    pub fn push_back(&mut self, record: StudentRecord) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(Node { record, next: None }));
        self.len += 1;
    }

    /// Iterate the records in list order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Stable merge sort under the given comparator.
    ///
    /// O(n log n) comparisons, O(log n) recursion depth, relinks the
    /// existing nodes without copying records. Records that compare equal
    /// retain their relative input order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: Fn(&StudentRecord, &StudentRecord) -> Ordering,
    {
        let head = self.head.take();
        self.head = sort_links(head, &compare);
    }
}

impl Drop for StudentList {
    /// Iterative teardown; the default recursive drop would deepen the
    /// stack by one frame per node.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl FromIterator<StudentRecord> for StudentList {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        let mut list = StudentList::new();
        let mut tail = &mut list.head;
        for record in iter {
            tail = &mut tail.insert(Box::new(Node { record, next: None })).next;
            list.len += 1;
        }
        list
    }
}

impl<'a> IntoIterator for &'a StudentList {
    type Item = &'a StudentRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`StudentList`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a StudentRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}

/// Sort an owned chain of nodes; length 0 or 1 is already sorted.
fn sort_links<F>(mut head: Link, compare: &F) -> Link
where
    F: Fn(&StudentRecord, &StudentRecord) -> Ordering,
{
    if head.as_ref().map_or(true, |node| node.next.is_none()) {
        return head;
    }
    let mid = midpoint(&head);
    let back = split_off(&mut head, mid);
    merge(sort_links(head, compare), sort_links(back, compare), compare)
}

/// Locate the split point with a fast cursor that advances two nodes per
/// counted step, the ownership-safe rendering of the slow/fast-pointer
/// midpoint walk. For a chain of length >= 2 the result is >= 1.
fn midpoint(link: &Link) -> usize {
    let mut mid = 0;
    let mut fast = link.as_deref();
    while let Some(first) = fast {
        match first.next.as_deref() {
            Some(second) => {
                mid += 1;
                fast = second.next.as_deref();
            }
            None => break,
        }
    }
    mid
}

/// Detach and return the chain starting at index `at`.
fn split_off(link: &mut Link, at: usize) -> Link {
    let mut cur = link;
    for _ in 0..at {
        match cur {
            Some(node) => cur = &mut node.next,
            None => return None,
        }
    }
    cur.take()
}

/// Merge two sorted chains into one sorted chain.
///
/// Repeatedly takes the lesser-or-equal front element; a tie takes the
/// left chain's node so equal records keep their original order.
fn merge<F>(mut a: Link, mut b: Link, compare: &F) -> Link
where
    F: Fn(&StudentRecord, &StudentRecord) -> Ordering,
{
    let mut merged: Link = None;
    let mut tail = &mut merged;

    loop {
        let take_left = match (a.as_deref(), b.as_deref()) {
            (Some(x), Some(y)) => compare(&x.record, &y.record) != Ordering::Greater,
            _ => break,
        };
        let src = if take_left { &mut a } else { &mut b };
        if let Some(mut node) = src.take() {
            *src = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }

    // one side is exhausted; splice the sorted remainder of the other
    *tail = a.take().or_else(|| b.take());
    merged
}
