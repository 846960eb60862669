//! This crate provides a doubly-linked list with owned nodes, tracked head
//! and tail, and stable node handles.
//!
//! The [`List`] allows inserting and removing elements at both ends in
//! constant time, and — given a [`NodeRef`] handle — deleting or
//! repositioning any node in constant time. Retrieving the maximum element
//! takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use handle_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::new();
//! list.push_back(1);
//! list.push_back(2);
//! let three = list.push_back(3); // keep a handle to the new node
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.pop_front(), Some(1)); // becomes [2, 3]
//!
//! // SAFETY: `three` was returned by this list and has not been removed.
//! unsafe { list.move_to_front(three) }; // becomes [3, 2]
//!
//! assert_eq!(list.max(), Ok(&3));
//! assert_eq!(Vec::from_iter(list), vec![3, 2]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//! ╔═══════════╗     ╔═══════════╗               ╔═══════════╗
//! ║   head    ║ ──→ ║   next    ║ ──→ ┄┄ ──···→ ║   next    ║ ──→ ∅
//! ╟───────────╢  ┌─ ╟───────────╢               ╟───────────╢
//! ║   tail    ║ ─┼→ ║   prev    ║ ←── ┄┄ ←──··· ║   prev    ║
//! ╟───────────╢  │  ╟───────────╢    Node 1..   ╟───────────╢
//! ║   (len)   ║  └──╢···········║ (tail is the  ║ payload T ║
//! ╚═══════════╝     ║ payload T ║   last node)  ╚═══════════╝
//!     List          ╚═══════════╝
//!                       Node 0
//! ```
//! The `List` contains:
//! - `head` and `tail` pointers, both absent exactly when the list is empty;
//! - a length field `len` counting the nodes reachable from `head`.
//!
//! Each node of the list `List<T>` is allocated on the heap, and contains:
//! - the `next` pointer that points to the next node (absent in the tail);
//! - the `prev` pointer that points to the previous node (absent in the
//!   head);
//! - the actual payload `T` that depends on the element type of the list.
//!
//! # Node Handles
//!
//! Every insertion returns a [`NodeRef`] naming the new node. Handles are
//! `Copy`, compare by node identity, and stay valid until the node they name
//! is removed — at which point they dangle and must be discarded. The methods
//! that consume handles ([`delete`], [`move_to_front`], [`move_to_back`],
//! [`get`], [`next_of`], ...) are therefore `unsafe`, with the membership
//! contract spelled out in their `# Safety` sections.
//!
//! Note that [`move_to_front`] and [`move_to_back`] are *value moves*: the
//! named node is deleted and its value re-inserted at the target end in a
//! brand-new node, so the handle passed in never survives the call.
//!
//! ```
//! use handle_list::List;
//!
//! let mut list = List::new();
//! let a = list.push_back("a");
//! let b = list.push_back("b");
//!
//! // SAFETY: both handles still name live nodes of `list`.
//! unsafe {
//!     assert_eq!(list.next_of(a), Some(b));
//!     list.delete(a); // `a` must not be used from here on
//! }
//! assert_eq!(list.front(), Some(&"b"));
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators, and
//! by the owning [`IntoIter`]. All of them run from head to tail and are
//! fused; reverse iteration is deliberately not provided.
//!
//! ## Examples
//!
//! ```
//! use handle_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Concurrency
//!
//! The list is a single-threaded structure with no interior locking; callers
//! that share one across threads must serialize access externally. `List<T>`
//! is `Send`/`Sync` whenever `T` is, like other owning containers.
//!
//! [`List`]: crate::List
//! [`NodeRef`]: crate::NodeRef
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`IntoIter`]: crate::IntoIter
//! [`delete`]: crate::List::delete
//! [`move_to_front`]: crate::List::move_to_front
//! [`move_to_back`]: crate::List::move_to_back
//! [`get`]: crate::List::get
//! [`next_of`]: crate::List::next_of

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{EmptyListError, List, NodeRef};

pub mod list;
