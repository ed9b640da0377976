use super::Cursor;
use crate::step::Step;

#[derive(Debug, Clone)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Cursor for Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    #[inline]
    fn pull(&mut self) -> Step<Self::Item> {
        match self {
            Either::Left(left) => left.pull(),
            Either::Right(right) => right.pull(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Either::Left(left) => left.size_hint(),
            Either::Right(right) => right.size_hint(),
        }
    }
}
