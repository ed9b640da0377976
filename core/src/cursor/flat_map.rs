use super::{fuse::Fuse, Cursor, IntoCursor};
use crate::step::Step;

/// Pulls at most one upstream element per pull; an element that expands to
/// nothing surfaces as [`Step::NotYet`].
#[must_use = "cursors do nothing unless pulled"]
pub struct FlatMap<C, U: IntoCursor, F> {
    pub(crate) cursor: Fuse<C>,
    pub(crate) f: F,
    pub(crate) inner: Option<U::Cursor>,
}

impl<C, U: IntoCursor, F> FlatMap<C, U, F> {
    pub(crate) fn new(cursor: C, f: F) -> Self {
        Self {
            cursor: Fuse::new(cursor),
            f,
            inner: None,
        }
    }
}

impl<C, U, F> Cursor for FlatMap<C, U, F>
where
    C: Cursor,
    U: IntoCursor,
    F: FnMut(C::Item) -> U,
{
    type Item = U::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        if let Some(inner) = self.inner.as_mut() {
            match inner.pull() {
                Step::Done => self.inner = None,
                next => return next,
            }
        }

        match self.cursor.pull() {
            Step::NotYet => Step::NotYet,
            Step::Ready(item) => {
                let mut inner = (self.f)(item).into_cursor();
                match inner.pull() {
                    // an empty expansion still used up this pull
                    Step::Done => Step::NotYet,
                    next => {
                        self.inner = Some(inner);
                        next
                    }
                }
            }
            Step::Done => Step::Done,
        }
    }
}
