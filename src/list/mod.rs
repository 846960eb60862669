use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use thiserror::Error;

use crate::list::node::Node;
use crate::{IntoIter, Iter, IterMut};

pub mod iterator;
pub mod node;

#[doc(inline)]
pub use node::NodeRef;

/// The `List` is a doubly-linked list with owned nodes, tracking its head,
/// tail and length. It allows inserting and removing elements at both ends,
/// and deleting or repositioning any node named by a [`NodeRef`] handle, all
/// in constant time. Finding the maximum element takes *O*(*n*) time.
///
/// # Naming Conventions
///
/// - `front` / `back`: the head / tail end of the list;
/// - handle-consuming methods are `unsafe` and trust the caller that the
///   handle names a live node of *this* list (see [`NodeRef`]).
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    /// the number of nodes reachable from `head`
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// The error returned by [`List::max`] when the list has no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot take the maximum of an empty list")]
pub struct EmptyListError;

// private methods
impl<T> List<T> {
    /// Unlink the head node and return it as a box.
    ///
    /// It is unsafe because `head` must be the current head of the list;
    /// in particular, the list must be non-empty.
    unsafe fn detach_front(&mut self, head: NonNull<Node<T>>) -> Box<Node<T>> {
        debug_assert_eq!(Some(head), self.head);
        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.head = head.as_ref().next;
            Node::unlink(head);
            // `unlink` only rewires the orphan's neighbors; the new head must
            // not keep a back-link into the detached node.
            if let Some(mut new_head) = self.head {
                new_head.as_mut().prev = None;
            }
        }
        self.len -= 1;
        Box::from_raw(head.as_ptr())
    }

    /// Unlink the tail node and return it as a box.
    ///
    /// It is unsafe because `tail` must be the current tail of the list;
    /// in particular, the list must be non-empty.
    unsafe fn detach_back(&mut self, tail: NonNull<Node<T>>) -> Box<Node<T>> {
        debug_assert_eq!(Some(tail), self.tail);
        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.tail = tail.as_ref().prev;
            Node::unlink(tail);
            if let Some(mut new_tail) = self.tail {
                new_tail.as_mut().next = None;
            }
        }
        self.len -= 1;
        Box::from_raw(tail.as_ptr())
    }

    /// Unlink `node` and return it as a box, dispatching on whether it is the
    /// head, the tail, or an interior node. The length is decremented exactly
    /// once regardless of the branch taken.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list. If it does not, this function call will make both lists
    /// ill-formed.
    unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        if Some(node) == self.head {
            self.detach_front(node)
        } else if Some(node) == self.tail {
            self.detach_back(node)
        } else {
            Node::unlink(node);
            self.len -= 1;
            Box::from_raw(node.as_ptr())
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use handle_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a one-node `List` seeded with `value`.
    ///
    /// # Examples
    /// ```
    /// use handle_list::List;
    ///
    /// let list = List::with_value(5);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.front(), list.back());
    /// ```
    pub fn with_value(value: T) -> Self {
        let node = Node::new_detached(value);
        Self {
            head: Some(node),
            tail: Some(node),
            len: 1,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.pop_front();
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a live node while the list is borrowed.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node while the list is borrowed.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Adds an element first in the list, and returns a handle to the new
    /// node. The handle may be ignored.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, value: T) -> NodeRef<T> {
        let node = match self.head {
            // SAFETY: `head` is a live node of this list.
            Some(head) => unsafe { Node::insert_before(head, value) },
            None => {
                let node = Node::new_detached(value);
                self.tail = Some(node);
                node
            }
        };
        self.head = Some(node);
        self.len += 1;
        NodeRef::new(node)
    }

    /// Appends an element to the back of the list, and returns a handle to
    /// the new node. The handle may be ignored.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, value: T) -> NodeRef<T> {
        let node = match self.tail {
            // SAFETY: `tail` is a live node of this list.
            Some(tail) => unsafe { Node::insert_after(tail, value) },
            None => {
                let node = Node::new_detached(value);
                self.head = Some(node);
                node
            }
        };
        self.tail = Some(node);
        self.len += 1;
        NodeRef::new(node)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. Handles naming the removed node become dangling.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is the current head and the list is non-empty.
        Some(unsafe { self.detach_front(head) }.value)
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty. Handles naming the removed node become dangling.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: `tail` is the current tail and the list is non-empty.
        Some(unsafe { self.detach_back(tail) }.value)
    }

    /// Returns a handle to the head node, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.head_node().is_none());
    ///
    /// let first = list.push_front(1);
    /// assert_eq!(list.head_node(), Some(first));
    /// ```
    #[inline]
    pub fn head_node(&self) -> Option<NodeRef<T>> {
        self.head.map(NodeRef::new)
    }

    /// Returns a handle to the tail node, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// let last = list.push_back(2);
    /// assert_eq!(list.tail_node(), Some(last));
    /// ```
    #[inline]
    pub fn tail_node(&self) -> Option<NodeRef<T>> {
        self.tail.map(NodeRef::new)
    }

    /// Returns a reference to the value in the node named by `node`.
    ///
    /// # Safety
    ///
    /// `node` must name a live node of this list: one obtained from this
    /// list's methods and not removed since.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// let two = list.push_back(2);
    /// assert_eq!(unsafe { list.get(two) }, &2);
    /// ```
    pub unsafe fn get(&self, node: NodeRef<T>) -> &T {
        &(*node.node.as_ptr()).value
    }

    /// Returns a mutable reference to the value in the node named by `node`.
    ///
    /// # Safety
    ///
    /// `node` must name a live node of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// let two = list.push_back(2);
    /// unsafe { *list.get_mut(two) = 5 };
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    pub unsafe fn get_mut(&mut self, node: NodeRef<T>) -> &mut T {
        &mut (*node.node.as_ptr()).value
    }

    /// Returns a handle to the successor of `node`, or `None` if `node` is
    /// the tail.
    ///
    /// # Safety
    ///
    /// `node` must name a live node of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// let one = list.push_back(1);
    /// let two = list.push_back(2);
    ///
    /// unsafe {
    ///     assert_eq!(list.next_of(one), Some(two));
    ///     assert_eq!(list.next_of(two), None);
    /// }
    /// ```
    pub unsafe fn next_of(&self, node: NodeRef<T>) -> Option<NodeRef<T>> {
        node.node.as_ref().next.map(NodeRef::new)
    }

    /// Returns a handle to the predecessor of `node`, or `None` if `node` is
    /// the head.
    ///
    /// # Safety
    ///
    /// `node` must name a live node of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    /// let one = list.push_back(1);
    /// let two = list.push_back(2);
    ///
    /// unsafe {
    ///     assert_eq!(list.prev_of(two), Some(one));
    ///     assert_eq!(list.prev_of(one), None);
    /// }
    /// ```
    pub unsafe fn prev_of(&self, node: NodeRef<T>) -> Option<NodeRef<T>> {
        node.node.as_ref().prev.map(NodeRef::new)
    }

    /// Removes the node named by `node` from the list. The length decreases
    /// by one; `node` and any copies of it become dangling.
    ///
    /// Head and tail nodes go through the same paths as [`List::pop_front`]
    /// and [`List::pop_back`]; interior nodes are unlinked in place.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Safety
    ///
    /// `node` must name a live node of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// let two = list.push_back(2);
    /// list.push_back(3);
    ///
    /// unsafe { list.delete(two) };
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3]);
    /// ```
    pub unsafe fn delete(&mut self, node: NodeRef<T>) {
        drop(self.detach_node(node.node));
    }

    /// Moves the value held by `node` to the front of the list.
    ///
    /// This is a no-op when `node` is already the head. Otherwise it is a
    /// *value move*: the node is deleted from its position and its value is
    /// re-inserted at the front as a brand-new node, so `node` and any copies
    /// of it become dangling. The returned handle names the new head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time (two structural edits).
    ///
    /// # Safety
    ///
    /// `node` must name a live node of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// let three = list.push_back(3);
    ///
    /// unsafe { list.move_to_front(three) };
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(Vec::from_iter(list), vec![3, 1, 2]);
    /// ```
    pub unsafe fn move_to_front(&mut self, node: NodeRef<T>) -> NodeRef<T> {
        if Some(node.node) == self.head {
            return node;
        }
        let value = self.detach_node(node.node).value;
        self.push_front(value)
    }

    /// Moves the value held by `node` to the back of the list.
    ///
    /// This is a no-op when `node` is already the tail. Otherwise it is a
    /// *value move* with the same handle-invalidation contract as
    /// [`List::move_to_front`]. The returned handle names the new tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time (two structural edits).
    ///
    /// # Safety
    ///
    /// `node` must name a live node of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::new();
    /// let one = list.push_back(1);
    /// list.push_back(2);
    /// list.push_back(3);
    ///
    /// unsafe { list.move_to_back(one) };
    /// assert_eq!(Vec::from_iter(list), vec![2, 3, 1]);
    /// ```
    pub unsafe fn move_to_back(&mut self, node: NodeRef<T>) -> NodeRef<T> {
        if Some(node.node) == self.tail {
            return node;
        }
        let value = self.detach_node(node.node).value;
        self.push_back(value)
    }

    /// Returns a reference to the largest element, or [`EmptyListError`] if
    /// the list is empty.
    ///
    /// The scan is a single forward pass using a strictly-greater comparison,
    /// so among equal maxima the first in traversal order is returned.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::{EmptyListError, List};
    /// use std::iter::FromIterator;
    ///
    /// let list: List<i32> = List::new();
    /// assert_eq!(list.max(), Err(EmptyListError));
    ///
    /// let list = List::from_iter([3, 1, 4, 1, 5, 9, 2, 6]);
    /// assert_eq!(list.max(), Ok(&9));
    /// ```
    pub fn max(&self) -> Result<&T, EmptyListError>
    where
        T: Ord,
    {
        let head = self.head.ok_or(EmptyListError)?;
        // SAFETY: every node reachable from `head` is live while the list
        // is borrowed.
        unsafe {
            let mut best = &(*head.as_ptr()).value;
            let mut current = head.as_ref().next;
            while let Some(node) = current {
                let node = &*node.as_ptr();
                if node.value > *best {
                    best = &node.value;
                }
                current = node.next;
            }
            Ok(best)
        }
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use handle_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list.front(), Some(&10));
    /// assert_eq!(list.back(), Some(&11));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only artifacts are covariant in their type
// parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'a>(x: NodeRef<&'static str>) -> NodeRef<&'a str> {
        x
    }
    fn c<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn d<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{EmptyListError, List, NodeRef};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::iter::FromIterator;

    /// Walk the chain through the public handle API, both directions, and
    /// check that the reachable node counts agree with `len()`.
    fn assert_well_formed<T>(list: &List<T>) {
        let mut forward = 0;
        let mut node = list.head_node();
        while let Some(current) = node {
            forward += 1;
            node = unsafe { list.next_of(current) };
        }
        assert_eq!(forward, list.len());

        let mut backward = 0;
        let mut node = list.tail_node();
        while let Some(current) = node {
            backward += 1;
            node = unsafe { list.prev_of(current) };
        }
        assert_eq!(backward, list.len());

        assert_eq!(list.head_node().is_none(), list.is_empty());
        assert_eq!(list.tail_node().is_none(), list.is_empty());
        if list.len() == 1 {
            assert_eq!(list.head_node(), list.tail_node());
        }
    }

    /// Handle to the node at position `at`, walking from the head.
    fn node_at<T>(list: &List<T>, at: usize) -> NodeRef<T> {
        let mut node = list.head_node().unwrap();
        for _ in 0..at {
            node = unsafe { list.next_of(node) }.unwrap();
        }
        node
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_with_value() {
        let list = List::with_value(5);
        assert_eq!(list.len(), 1);
        assert_eq!(list.head_node(), list.tail_node());
        assert_eq!(list.front(), Some(&5));
        assert_eq!(list.max(), Ok(&5));
        assert_well_formed(&list);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_well_formed(&list);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn pop_front_after_tail_inserts() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 2);
        assert_eq!(list.front(), Some(&2));
        assert_well_formed(&list);
    }

    #[test]
    fn push_then_pop_round_trip() {
        let mut list = List::from_iter([2, 3]);
        let before = list.len();
        list.push_front(1);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), before);
        assert_well_formed(&list);
    }

    #[test]
    fn delete_interior_node() {
        let mut list = List::from_iter([1, 2, 3]);
        let second = node_at(&list, 1);

        unsafe { list.delete(second) };
        assert_eq!(list.len(), 2);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 3]);

        let first = list.head_node().unwrap();
        let third = list.tail_node().unwrap();
        unsafe {
            assert_eq!(list.next_of(first), Some(third));
            assert_eq!(list.prev_of(third), Some(first));
        }
        assert_well_formed(&list);
    }

    #[test]
    fn delete_at_ends() {
        let mut list = List::from_iter([1, 2, 3]);

        let head = list.head_node().unwrap();
        unsafe { list.delete(head) };
        assert_eq!(list.len(), 2);
        assert_eq!(list.front(), Some(&2));

        let tail = list.tail_node().unwrap();
        unsafe { list.delete(tail) };
        assert_eq!(list.len(), 1);
        assert_eq!(list.back(), Some(&2));

        let only = list.head_node().unwrap();
        unsafe { list.delete(only) };
        assert!(list.is_empty());
        assert_well_formed(&list);
    }

    #[test]
    fn move_to_back_rotates() {
        let mut list = List::from_iter([1, 2, 3]);
        let first = list.head_node().unwrap();

        unsafe { list.move_to_back(first) };
        assert_eq!(list.len(), 3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 3, 1]);
        assert_well_formed(&list);
    }

    #[test]
    fn move_to_front_from_interior() {
        let mut list = List::from_iter([1, 2, 3]);
        let second = node_at(&list, 1);

        let moved = unsafe { list.move_to_front(second) };
        assert_eq!(list.head_node(), Some(moved));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 1, 3]);
        assert_well_formed(&list);
    }

    #[test]
    fn move_is_idempotent_at_ends() {
        let mut list = List::from_iter([1, 2, 3]);

        let head = list.head_node().unwrap();
        let returned = unsafe { list.move_to_front(head) };
        // No-op: same node, same order, same length.
        assert_eq!(returned, head);
        assert_eq!(list.head_node(), Some(head));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);

        let tail = list.tail_node().unwrap();
        let returned = unsafe { list.move_to_back(tail) };
        assert_eq!(returned, tail);
        assert_eq!(list.tail_node(), Some(tail));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn removal_order_is_symmetric() {
        let values = [3, 1, 4, 1, 5];
        let forward = Vec::from_iter(List::from_iter(values).iter().copied());
        assert_eq!(forward, values);

        let mut list = List::from_iter(values);
        let mut drained = Vec::new();
        while let Some(value) = list.pop_front() {
            drained.push(value);
        }
        assert_eq!(drained, values);

        let mut list = List::from_iter(values);
        let mut drained = Vec::new();
        while let Some(value) = list.pop_back() {
            drained.push(value);
        }
        drained.reverse();
        assert_eq!(drained, values);
    }

    #[test]
    fn max_follows_edits() {
        let mut list = List::new();
        assert_eq!(list.max(), Err(EmptyListError));

        list.push_back(3);
        list.push_back(9);
        list.push_back(6);
        assert_eq!(list.max(), Ok(&9));

        let nine = node_at(&list, 1);
        unsafe { list.delete(nine) };
        assert_eq!(list.max(), Ok(&6));

        list.push_front(6);
        // Equal maxima: the scan keeps the first one it sees.
        let max = list.max().unwrap();
        assert!(std::ptr::eq(max, list.front().unwrap()));

        list.clear();
        assert_eq!(list.max(), Err(EmptyListError));
    }

    #[test]
    fn empty_list_error_display() {
        assert_eq!(
            EmptyListError.to_string(),
            "cannot take the maximum of an empty list"
        );
    }

    #[test]
    fn handles_compare_by_identity() {
        let mut list = List::new();
        let a = list.push_back(1);
        let b = list.push_back(1);
        assert_ne!(a, b);
        assert_eq!(a, list.head_node().unwrap());
        assert_eq!(unsafe { list.get(a) }, unsafe { list.get(b) });
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn random_edits_match_deque_model() {
        use rand::Rng;

        let mut rng = rand::rng();
        let mut list = List::new();
        let mut model = VecDeque::new();

        for round in 0..2000 {
            match rng.random_range(0..7) {
                0 => {
                    list.push_front(round);
                    model.push_front(round);
                }
                1 => {
                    list.push_back(round);
                    model.push_back(round);
                }
                2 => assert_eq!(list.pop_front(), model.pop_front()),
                3 => assert_eq!(list.pop_back(), model.pop_back()),
                4 if !model.is_empty() => {
                    let at = rng.random_range(0..model.len());
                    unsafe { list.delete(node_at(&list, at)) };
                    model.remove(at);
                }
                5 if !model.is_empty() => {
                    let at = rng.random_range(0..model.len());
                    unsafe { list.move_to_front(node_at(&list, at)) };
                    let value = model.remove(at).unwrap();
                    model.push_front(value);
                }
                6 if !model.is_empty() => {
                    let at = rng.random_range(0..model.len());
                    unsafe { list.move_to_back(node_at(&list, at)) };
                    let value = model.remove(at).unwrap();
                    model.push_back(value);
                }
                _ => {}
            }

            assert_eq!(list.len(), model.len());
            assert_eq!(list.max().ok(), model.iter().max());
            if round % 97 == 0 {
                assert_well_formed(&list);
                assert!(list.iter().eq(model.iter()));
            }
        }
        assert_well_formed(&list);
        assert!(list.iter().eq(model.iter()));
    }
}
