use core::{
    any::{type_name, Any},
    pin::Pin,
    task::{Context, Poll},
};
use std::vec;

use crate::{
    consumer::{
        collect::Collect,
        drive,
        fold::{Fold, Reduce},
        for_each::ForEach,
        join::Join,
    },
    cursor::{
        accumulate::{AccumulateWhile, GroupLen},
        chain::Chain,
        concat::Concat,
        counter::Counter,
        either::Either,
        enumerate::Enumerate,
        filter::{Filter, IndexBelow, IndexFrom, IndexMultipleOf},
        flat_map::FlatMap,
        map::Map,
        range::{Range, RangeArgs},
        round_robin::RoundRobin,
        take_while::TakeWhile,
        BoxCursor, Cursor, IntoCursor, IteratorCursor,
    },
    error::{Result, SeqError},
    step::Step,
};

pub type ItemOf<W> = <<W as Wrapper>::Cursor as Cursor>::Item;

/// A value holding exactly one cursor, with the full operator set.
///
/// Every chaining operator consumes the wrapper, moves its cursor into a new
/// operator state machine, and wraps the result with
/// [`rewrap`](Wrapper::rewrap). A type implementing `Wrapper` therefore stays
/// the same wrapper type through any chain of operators.
///
/// Terminal operators take `&mut self` and drain the cursor: a second
/// terminal call on the same wrapper sees whatever the first one left, which
/// is nothing.
pub trait Wrapper: Sized {
    type Cursor: Cursor;

    /// The same wrapper type around a different cursor.
    type Rewrap<D: Cursor>: Wrapper<Cursor = D>;

    fn rewrap<D: Cursor>(cursor: D) -> Self::Rewrap<D>;

    fn into_inner(self) -> Self::Cursor;

    fn cursor_mut(&mut self) -> &mut Self::Cursor;

    fn next_step(&mut self) -> Step<ItemOf<Self>> {
        self.cursor_mut().pull()
    }

    /// Pulls until an element is produced or the cursor is exhausted.
    fn next(&mut self) -> Option<ItemOf<Self>> {
        self.cursor_mut().next_ready()
    }

    /// Hands the raw cursor to `g` and wraps whatever it returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_fusion::prelude::*;
    ///
    /// let doubled = Seq::range(5)
    ///     .unwrap()
    ///     .pipe(|cursor| Seq::from_cursor(cursor).map(|x, _| x * 2))
    ///     .to_vec();
    /// assert_eq!(doubled, [0, 2, 4, 6, 8]);
    /// ```
    fn pipe<D, G>(self, g: G) -> Self::Rewrap<D::Cursor>
    where
        G: FnOnce(Self::Cursor) -> D,
        D: IntoCursor,
    {
        Self::rewrap(g(self.into_inner()).into_cursor())
    }

    fn map<T, F>(self, f: F) -> Self::Rewrap<Map<Self::Cursor, F>>
    where
        F: FnMut(ItemOf<Self>, usize) -> T,
    {
        Self::rewrap(Map::new(self.into_inner(), f))
    }

    /// Keeps the elements for which `predicate(&item, index)` holds. The
    /// index counts every upstream element, kept or not.
    fn filter<P>(self, predicate: P) -> Self::Rewrap<Filter<Self::Cursor, P>>
    where
        P: FnMut(&ItemOf<Self>, usize) -> bool,
    {
        Self::rewrap(Filter::new(self.into_inner(), predicate))
    }

    /// Yields elements while `predicate(&item, index)` holds and stops for
    /// good at the first element that fails it.
    fn take_while<P>(self, predicate: P) -> Self::Rewrap<TakeWhile<Self::Cursor, P>>
    where
        P: FnMut(&ItemOf<Self>, usize) -> bool,
    {
        Self::rewrap(TakeWhile::new(self.into_inner(), predicate))
    }

    /// Stopping consumes the element after the last one taken.
    fn take(self, count: usize) -> Self::Rewrap<TakeWhile<Self::Cursor, IndexBelow>> {
        Self::rewrap(TakeWhile::new(self.into_inner(), IndexBelow(count)))
    }

    fn skip(self, count: usize) -> Self::Rewrap<Filter<Self::Cursor, IndexFrom>> {
        Self::rewrap(Filter::new(self.into_inner(), IndexFrom(count)))
    }

    /// The elements at indices `0, n, 2n, ...`. Yields nothing for `n == 0`.
    fn every_nth(self, n: usize) -> Self::Rewrap<Filter<Self::Cursor, IndexMultipleOf>> {
        Self::rewrap(Filter::new(self.into_inner(), IndexMultipleOf(n)))
    }

    fn even(self) -> Self::Rewrap<Filter<Self::Cursor, IndexMultipleOf>> {
        self.every_nth(2)
    }

    fn odd(self) -> Self::Rewrap<Filter<Filter<Self::Cursor, IndexFrom>, IndexMultipleOf>> {
        let skipped = Filter::new(self.into_inner(), IndexFrom(1));
        Self::rewrap(Filter::new(skipped, IndexMultipleOf(2)))
    }

    fn enumerate(self) -> Self::Rewrap<Enumerate<Self::Cursor>> {
        Self::rewrap(Enumerate::new(self.into_inner()))
    }

    fn concat<I>(
        self,
        others: I,
    ) -> Self::Rewrap<Chain<Self::Cursor, Concat<<I::Item as IntoCursor>::Cursor>>>
    where
        I: IntoIterator,
        I::Item: IntoCursor<Item = ItemOf<Self>>,
    {
        let others = Concat::new(others.into_iter().map(IntoCursor::into_cursor));
        Self::rewrap(Chain::new(self.into_inner(), others))
    }

    fn concat_left<I>(
        self,
        others: I,
    ) -> Self::Rewrap<Chain<Concat<<I::Item as IntoCursor>::Cursor>, Self::Cursor>>
    where
        I: IntoIterator,
        I::Item: IntoCursor<Item = ItemOf<Self>>,
    {
        let others = Concat::new(others.into_iter().map(IntoCursor::into_cursor));
        Self::rewrap(Chain::new(others, self.into_inner()))
    }

    /// Round-robin interleaving with this wrapper first.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_fusion::prelude::*;
    ///
    /// let merged = Seq::from_array(vec![0, 1]).merge([vec![10, 11, 12]]).to_vec();
    /// assert_eq!(merged, [0, 10, 1, 11, 12]);
    /// ```
    #[allow(clippy::type_complexity)]
    fn merge<I>(
        self,
        others: I,
    ) -> Self::Rewrap<RoundRobin<Either<Self::Cursor, <I::Item as IntoCursor>::Cursor>>>
    where
        I: IntoIterator,
        I::Item: IntoCursor<Item = ItemOf<Self>>,
    {
        let sources = Some(Either::Left(self.into_inner()))
            .into_iter()
            .chain(others.into_iter().map(|other| Either::Right(other.into_cursor())));
        Self::rewrap(RoundRobin::new(sources))
    }

    #[allow(clippy::type_complexity)]
    fn merge_left<I>(
        self,
        others: I,
    ) -> Self::Rewrap<RoundRobin<Either<Self::Cursor, <I::Item as IntoCursor>::Cursor>>>
    where
        I: IntoIterator,
        I::Item: IntoCursor<Item = ItemOf<Self>>,
    {
        let mut sources: Vec<_> = others
            .into_iter()
            .map(|other| Either::Right(other.into_cursor()))
            .collect();
        sources.push(Either::Left(self.into_inner()));
        Self::rewrap(RoundRobin::new(sources))
    }

    /// Groups elements into vectors, completing a group whenever
    /// `flush(&group, &last, index)` holds after appending `last`.
    ///
    /// A trailing incomplete group is yielded only if `yield_rest` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_fusion::prelude::*;
    ///
    /// let lines = Seq::from_array("ab\ncd\n".chars().collect())
    ///     .accumulate_while(|_, last, _| *last == '\n', false)
    ///     .map(|line, _| line.into_iter().collect::<String>())
    ///     .to_vec();
    /// assert_eq!(lines, ["ab\n", "cd\n"]);
    /// ```
    fn accumulate_while<F>(
        self,
        flush: F,
        yield_rest: bool,
    ) -> Self::Rewrap<AccumulateWhile<Self::Cursor, F>>
    where
        F: FnMut(&[ItemOf<Self>], &ItemOf<Self>, usize) -> bool,
    {
        Self::rewrap(AccumulateWhile::new(self.into_inner(), flush, yield_rest))
    }

    fn accumulate_n(
        self,
        n: usize,
        yield_rest: bool,
    ) -> Self::Rewrap<AccumulateWhile<Self::Cursor, GroupLen>> {
        Self::rewrap(AccumulateWhile::new(self.into_inner(), GroupLen(n), yield_rest))
    }

    fn sub_split<U, F>(self, f: F) -> Self::Rewrap<FlatMap<Self::Cursor, U, F>>
    where
        U: IntoCursor,
        F: FnMut(ItemOf<Self>) -> U,
    {
        Self::rewrap(FlatMap::new(self.into_inner(), f))
    }

    /// Drains the cursor into a vector. Never returns on an unbounded cursor.
    fn to_vec(&mut self) -> Vec<ItemOf<Self>> {
        self.collect()
    }

    fn collect<B>(&mut self) -> B
    where
        B: Default + Extend<ItemOf<Self>>,
    {
        drive(Collect::new(self.cursor_mut()))
    }

    fn for_each<F>(&mut self, f: F)
    where
        F: FnMut(ItemOf<Self>, usize),
    {
        drive(ForEach::new(self.cursor_mut(), f))
    }

    /// Folds with the first element as the seed.
    ///
    /// The seed occupies index 0, so the first element passed to `f` has
    /// index 1. Fails with [`SeqError::EmptyReduce`] on an empty cursor.
    fn reduce<F>(&mut self, f: F) -> Result<ItemOf<Self>>
    where
        F: FnMut(ItemOf<Self>, ItemOf<Self>, usize) -> ItemOf<Self>,
    {
        drive(Reduce::new(self.cursor_mut(), f))
    }

    /// Folds into `init`; the first element passed to `f` has index 0.
    fn fold<T, F>(&mut self, init: T, f: F) -> T
    where
        F: FnMut(T, ItemOf<Self>, usize) -> T,
    {
        drive(Fold::new(self.cursor_mut(), init, f))
    }

    fn join(&mut self, delimiter: &str) -> String
    where
        ItemOf<Self>: core::fmt::Display,
    {
        drive(Join::new(self.cursor_mut(), delimiter))
    }
}

/// The default [`Wrapper`].
#[must_use = "sequences do nothing unless consumed"]
pub struct Seq<C> {
    cursor: C,
}

impl<C: Cursor> Wrapper for Seq<C> {
    type Cursor = C;
    type Rewrap<D: Cursor> = Seq<D>;

    #[inline]
    fn rewrap<D: Cursor>(cursor: D) -> Seq<D> {
        Seq { cursor }
    }

    #[inline]
    fn into_inner(self) -> C {
        self.cursor
    }

    #[inline]
    fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: Cursor> Seq<C> {
    pub fn from_cursor(cursor: C) -> Self {
        Seq { cursor }
    }

    /// A type-erased copy of this wrapper.
    pub fn boxed<'a>(self) -> Seq<BoxCursor<'a, C::Item>>
    where
        C: 'a,
    {
        let cursor: BoxCursor<'a, C::Item> = Box::new(self.cursor);
        Seq::from_cursor(cursor)
    }
}

impl Seq<()> {
    /// Wraps anything that converts into a cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_fusion::prelude::*;
    ///
    /// assert_eq!(Seq::new([0, 1, 2]).to_vec(), [0, 1, 2]);
    /// assert_eq!(Seq::new("ab".chars()).join("-"), "a-b");
    /// ```
    pub fn new<S: IntoCursor>(source: S) -> Seq<S::Cursor> {
        Seq::from_cursor(source.into_cursor())
    }

    pub fn from_array<T>(items: Vec<T>) -> Seq<IteratorCursor<vec::IntoIter<T>>> {
        Seq::new(items)
    }

    /// Wraps a type-erased source: a `Vec<T>`, a `Box<dyn Iterator<Item = T>>`
    /// or a [`BoxCursor<T>`].
    ///
    /// Anything else fails with [`SeqError::InvalidInput`].
    pub fn from_dyn<T: 'static>(value: Box<dyn Any>) -> Result<Seq<BoxCursor<'static, T>>> {
        let value = match value.downcast::<Vec<T>>() {
            Ok(items) => return Ok(Seq::new(*items).boxed()),
            Err(value) => value,
        };
        let value = match value.downcast::<Box<dyn Iterator<Item = T>>>() {
            Ok(iterator) => return Ok(Seq::new(*iterator).boxed()),
            Err(value) => value,
        };
        match value.downcast::<BoxCursor<'static, T>>() {
            Ok(cursor) => Ok(Seq::from_cursor(*cursor)),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(expected = type_name::<T>(), "rejected non-iterable input");
                Err(SeqError::InvalidInput {
                    expected: type_name::<T>(),
                })
            }
        }
    }

    pub fn from_multiple<I>(sources: I) -> Seq<RoundRobin<<I::Item as IntoCursor>::Cursor>>
    where
        I: IntoIterator,
        I::Item: IntoCursor,
    {
        Seq::from_cursor(RoundRobin::new(sources.into_iter().map(IntoCursor::into_cursor)))
    }

    /// An inclusive integer range; see [`RangeArgs`] for the accepted forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_fusion::prelude::*;
    ///
    /// assert_eq!(Seq::range(()).unwrap().to_vec(), (0..10).collect::<Vec<_>>());
    /// assert_eq!(Seq::range((10, 0, 3)).unwrap().to_vec(), [10, 7, 4, 1]);
    /// assert!(Seq::range((0, 10, 0)).is_err());
    /// ```
    pub fn range(args: impl Into<RangeArgs>) -> Result<Seq<Range>> {
        Range::new(args.into()).map(Seq::from_cursor)
    }

    /// Counts from zero by `step` without end. Bound it with
    /// [`take`](Wrapper::take) or [`take_while`](Wrapper::take_while) before
    /// draining.
    pub fn counter(step: i64) -> Seq<Counter> {
        Seq::from_cursor(Counter::new(step))
    }
}

impl<C: Cursor> IntoIterator for Seq<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    fn into_iter(self) -> Iter<C> {
        Iter {
            cursor: self.cursor,
        }
    }
}

impl<'a, C: Cursor> IntoIterator for &'a mut Seq<C> {
    type Item = C::Item;
    type IntoIter = Iter<&'a mut C>;

    fn into_iter(self) -> Iter<&'a mut C> {
        Iter {
            cursor: &mut self.cursor,
        }
    }
}

/// External iteration over a cursor, one element per `next`.
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.cursor.next_ready()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<C: Cursor + Unpin> futures_core::Stream for Seq<C> {
    type Item = C::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.get_mut().cursor.pull() {
            Step::NotYet => {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
            Step::Ready(item) => Poll::Ready(Some(item)),
            Step::Done => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}
