use std::fmt;
use std::ptr::NonNull;

/// A single cell of the list, holding one value and optional links to its
/// immediate neighbors.
///
/// The link invariant maintained by every structural edit: if
/// `a.next == Some(b)`, then `b.prev == Some(a)`, and symmetrically.
pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Allocate a detached node with no neighbors, and leak it into a raw
    /// pointer. The caller becomes responsible for reclaiming it with
    /// `Box::from_raw`.
    pub(crate) fn new_detached(value: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            value,
        })))
    }

    /// Splice a fresh node holding `value` between `node` and its current
    /// successor, and return the new node.
    ///
    /// When `node` has a successor, the successor's `prev` is rewired to the
    /// new node; otherwise the new node becomes a trailing fragment. Container
    /// bookkeeping (head, tail, length) is the caller's responsibility.
    ///
    /// It is unsafe because `node` must point to a live node.
    pub(crate) unsafe fn insert_after(mut node: NonNull<Self>, value: T) -> NonNull<Self> {
        let mut new = Self::new_detached(value);
        let old_next = node.as_ref().next;
        new.as_mut().prev = Some(node);
        new.as_mut().next = old_next;
        node.as_mut().next = Some(new);
        if let Some(mut next) = old_next {
            next.as_mut().prev = Some(new);
        }
        new
    }

    /// Splice a fresh node holding `value` between `node` and its current
    /// predecessor, and return the new node.
    ///
    /// It is unsafe because `node` must point to a live node.
    pub(crate) unsafe fn insert_before(mut node: NonNull<Self>, value: T) -> NonNull<Self> {
        let mut new = Self::new_detached(value);
        let old_prev = node.as_ref().prev;
        new.as_mut().next = Some(node);
        new.as_mut().prev = old_prev;
        node.as_mut().prev = Some(new);
        if let Some(mut prev) = old_prev {
            prev.as_mut().next = Some(new);
        }
        new
    }

    /// Rewire the neighbors of `node` past it, making it unreachable from the
    /// rest of the chain.
    ///
    /// The node's own `prev` and `next` are left stale; after unlinking, the
    /// node is an orphaned fragment and the caller owns reclaiming it. Length
    /// bookkeeping is not touched.
    ///
    /// It is unsafe because `node` and its neighbors must point to live nodes.
    pub(crate) unsafe fn unlink(node: NonNull<Self>) {
        let prev = node.as_ref().prev;
        let next = node.as_ref().next;
        if let Some(mut prev) = prev {
            prev.as_mut().next = next;
        }
        if let Some(mut next) = next {
            next.as_mut().prev = prev;
        }
    }
}

/// A handle naming one node of a [`List`].
///
/// A `NodeRef` is obtained from the insertion methods ([`List::push_front`],
/// [`List::push_back`]) or from the traversal accessors ([`List::head_node`],
/// [`List::next_of`], ...). It is `Copy` and compares by node identity, not by
/// value.
///
/// A `NodeRef` is a *handle*, not a borrow: it does not keep the node alive.
/// Once the node it names has been removed from its list (by
/// [`List::delete`], [`List::pop_front`], [`List::pop_back`],
/// [`List::move_to_front`] or [`List::move_to_back`]), the handle dangles and
/// must be discarded. Every list method that consumes a `NodeRef` is `unsafe`
/// for this reason; see the `# Safety` section on each.
///
/// [`List`]: crate::List
/// [`List::push_front`]: crate::List::push_front
/// [`List::push_back`]: crate::List::push_back
/// [`List::head_node`]: crate::List::head_node
/// [`List::next_of`]: crate::List::next_of
/// [`List::delete`]: crate::List::delete
/// [`List::pop_front`]: crate::List::pop_front
/// [`List::pop_back`]: crate::List::pop_back
/// [`List::move_to_front`]: crate::List::move_to_front
/// [`List::move_to_back`]: crate::List::move_to_back
pub struct NodeRef<T> {
    pub(crate) node: NonNull<Node<T>>,
}

impl<T> NodeRef<T> {
    pub(crate) fn new(node: NonNull<Node<T>>) -> Self {
        Self { node }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

/// Handles compare by node identity: two handles are equal exactly when they
/// name the same node.
impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T> fmt::Debug for NodeRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.node).finish()
    }
}
