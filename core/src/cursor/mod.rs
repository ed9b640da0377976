pub mod accumulate;
pub mod chain;
pub mod concat;
pub mod counter;
pub mod either;
pub mod enumerate;
pub mod filter;
pub mod flat_map;
pub mod fuse;
pub mod map;
pub mod range;
pub mod round_robin;
pub mod take_while;

use crate::step::Step;

/// A single-owner, pull-based production of elements.
///
/// Every call to [`pull`](Cursor::pull) irreversibly advances production. A
/// cursor that has reported [`Step::Done`] is exhausted; operators never pull
/// it again.
#[must_use = "cursors do nothing unless pulled"]
pub trait Cursor {
    type Item;

    fn pull(&mut self) -> Step<Self::Item>;

    /// Pulls until an element is produced or the cursor is exhausted.
    #[inline]
    fn next_ready(&mut self) -> Option<Self::Item> {
        loop {
            match self.pull() {
                Step::NotYet => continue,
                Step::Ready(item) => return Some(item),
                Step::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn pull(&mut self) -> Step<Self::Item> {
        C::pull(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        C::size_hint(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn pull(&mut self) -> Step<Self::Item> {
        C::pull(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        C::size_hint(self)
    }
}

/// A type-erased cursor.
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// Conversion into a [`Cursor`].
///
/// Every [`IntoIterator`] converts, so arrays, vectors, ranges, string
/// iterators and [`Seq`](crate::Seq) wrappers are all valid sources.
pub trait IntoCursor {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn into_cursor(self) -> Self::Cursor;
}

impl<I: IntoIterator> IntoCursor for I {
    type Item = I::Item;
    type Cursor = IteratorCursor<I::IntoIter>;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        self.into_iter().into()
    }
}

/// A cursor over an [`Iterator`], yielding its elements in order.
#[derive(Debug, Clone)]
pub struct IteratorCursor<I> {
    iterator: I,
}

impl<I: Iterator> From<I> for IteratorCursor<I> {
    fn from(value: I) -> Self {
        Self { iterator: value }
    }
}

impl<I: Iterator> Cursor for IteratorCursor<I> {
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Step<Self::Item> {
        self.iterator.next().into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}
