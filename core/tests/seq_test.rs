use std::cell::Cell;

use seq_fusion::{cursor::IteratorCursor, prelude::*, BoxCursor};

const LEAR: &str = "
To thee and thine hereditary ever
Remain this ample third of our fair kingdom;
No less in space, validity, and pleasure,
Than that conferr'd on Goneril. Now, our joy,
";

#[test]
fn constructs_from_iterator() {
    let mut count = 0;
    for item in Seq::new(0..5) {
        assert_eq!(item, count);
        count += 1;
    }
    assert_eq!(count, 5);
}

#[test]
fn constructs_from_array() {
    assert_eq!(Seq::new([0, 1, 2]).to_vec(), [0, 1, 2]);
    assert_eq!(Seq::from_array(vec![1, 2, 3]).to_vec(), [1, 2, 3]);
    assert_eq!(Seq::new(Seq::new(0..2)).to_vec(), [0, 1]);
}

#[test]
fn identity_round_trip() {
    let items = vec!["x".to_string(), "y".to_string(), "z".to_string()];
    assert_eq!(Seq::from_array(items.clone()).to_vec(), items);
}

#[test]
fn draining_twice_is_empty() {
    let mut seq = Seq::new(0..3);
    assert_eq!(seq.to_vec(), [0, 1, 2]);
    assert!(seq.to_vec().is_empty());
    assert_eq!(seq.next(), None);
}

#[test]
fn partial_consumption_resumes() {
    let mut seq = Seq::new(0..5);
    let head: Vec<_> = (&mut seq).into_iter().take(2).collect();
    assert_eq!(head, [0, 1]);
    assert_eq!(seq.to_vec(), [2, 3, 4]);
}

#[test]
fn nothing_is_pulled_before_consumption() {
    let pulled = Cell::new(0);
    let mut seq = Seq::new((0..).inspect(|_| pulled.set(pulled.get() + 1)))
        .map(|x, _| x * 2)
        .filter(|x, _| x % 4 == 0);
    assert_eq!(pulled.get(), 0);
    assert_eq!(seq.next(), Some(0));
    assert_eq!(pulled.get(), 1);
    assert_eq!(seq.next(), Some(4));
    assert_eq!(pulled.get(), 3);
}

#[test]
fn one_upstream_element_per_pull() {
    let pulled = Cell::new(0);
    let mut seq = Seq::new((0..10).inspect(|_| pulled.set(pulled.get() + 1))).skip(3);
    assert_eq!(seq.next_step(), Step::NotYet);
    assert_eq!(seq.next_step(), Step::NotYet);
    assert_eq!(seq.next_step(), Step::NotYet);
    assert_eq!(pulled.get(), 3);
    assert_eq!(seq.next_step(), Step::Ready(3));
}

#[test]
fn pipe() {
    let out = Seq::new(0..5)
        .pipe(|cursor| Seq::from_cursor(cursor).map(|x, _| x * 2))
        .to_vec();
    assert_eq!(out, [0, 2, 4, 6, 8]);
}

#[test]
fn map() {
    assert_eq!(Seq::new(0..5).map(|x, _| x * 2).to_vec(), [0, 2, 4, 6, 8]);
    assert_eq!(Seq::new(['a', 'b']).map(|c, i| (i, c)).to_vec(), [(0, 'a'), (1, 'b')]);
}

#[test]
fn map_preserves_length() {
    let items: Vec<u32> = (0..37).collect();
    assert_eq!(Seq::from_array(items.clone()).map(|x, _| x.to_string()).to_vec().len(), items.len());
}

#[test]
fn for_each() {
    let mut out = Vec::new();
    let mut seq = Seq::new(0..5);
    seq.for_each(|x, i| out.push((x, i)));
    assert_eq!(out, [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    assert_eq!(seq.next(), None);
}

#[test]
fn filter() {
    assert_eq!(Seq::new(0..5).filter(|x, _| x % 2 == 0).to_vec(), [0, 2, 4]);
}

#[test]
fn filter_matches_index_in_source() {
    let items = vec![5, 8, 1, 9, 4, 4, 7];
    let p = |x: &i32, i: usize| (*x as usize + i) % 3 == 0;
    let expected: Vec<_> = items
        .iter()
        .enumerate()
        .filter(|(i, x)| p(x, *i))
        .map(|(_, x)| *x)
        .collect();
    assert_eq!(Seq::from_array(items).filter(p).to_vec(), expected);
}

#[test]
fn reduce() {
    assert_eq!(Seq::new(0..5).reduce(|c, x, _| c + x), Ok(10));
}

#[test]
fn reduce_index_contract() {
    let mut collected = Vec::new();
    let out = Seq::new([10, 20, 30]).reduce(|carry, x, i| {
        collected.push(i);
        carry + x
    });
    assert_eq!(out, Ok(60));
    assert_eq!(collected, [1, 2]);

    let mut collected = Vec::new();
    let out = Seq::new([10, 20, 30]).fold(0, |carry, x, i| {
        collected.push(i);
        carry + x
    });
    assert_eq!(out, 60);
    assert_eq!(collected, [0, 1, 2]);
}

#[test]
fn reduce_of_empty_fails() {
    let err = Seq::new(Vec::<i32>::new()).reduce(|c, x, _| c + x).unwrap_err();
    assert_eq!(err, SeqError::EmptyReduce);
    assert_eq!(err.to_string(), "reduce of empty sequence with no initial value");
}

#[test]
fn enumerate() {
    assert_eq!(
        Seq::new(2..7).enumerate().to_vec(),
        [(0, 2), (1, 3), (2, 4), (3, 5), (4, 6)]
    );
}

#[test]
fn take() {
    assert_eq!(Seq::new(0..5).take(2).to_vec(), [0, 1]);
    assert_eq!(Seq::counter(1).take(2).to_vec(), [0, 1]);
    assert!(Seq::new(0..5).take(0).to_vec().is_empty());
    assert_eq!(Seq::new(0..2).take(5).to_vec(), [0, 1]);
}

#[test]
fn skip() {
    assert_eq!(Seq::new(0..5).skip(2).to_vec(), [2, 3, 4]);
    assert!(Seq::new(0..5).skip(9).to_vec().is_empty());
}

#[test]
fn take_while() {
    assert_eq!(Seq::new(0..5).take_while(|x, _| *x < 3).to_vec(), [0, 1, 2]);
    assert_eq!(
        Seq::new([1, 2, 9, 1, 2]).take_while(|x, _| *x < 3).to_vec(),
        [1, 2]
    );
}

#[test]
fn every_nth() {
    assert_eq!(Seq::new(0..5).every_nth(2).to_vec(), [0, 2, 4]);
    assert_eq!(Seq::new(0..10).every_nth(3).to_vec(), [0, 3, 6, 9]);
    assert!(Seq::new(0..10).every_nth(0).to_vec().is_empty());
}

#[test]
fn odd_and_even() {
    assert_eq!(Seq::new(0..5).odd().to_vec(), [1, 3]);
    assert_eq!(Seq::new(0..5).even().to_vec(), [0, 2, 4]);
    assert_eq!(Seq::new(10..16).odd().to_vec(), [11, 13, 15]);
}

#[test]
fn concat() {
    let out = Seq::new(["0", "1", "2"]).concat([vec!["a", "b", "c"]]).to_vec();
    assert_eq!(out, ["0", "1", "2", "a", "b", "c"]);

    let out = Seq::new(0..1).concat([1..3, 3..3, 3..4]).to_vec();
    assert_eq!(out, [0, 1, 2, 3]);
}

#[test]
fn concat_left() {
    let out = Seq::new(["0", "1", "2"]).concat_left([vec!["a", "b", "c"]]).to_vec();
    assert_eq!(out, ["a", "b", "c", "0", "1", "2"]);

    let out = Seq::new(9..10).concat_left([vec![1], vec![2, 3]]).to_vec();
    assert_eq!(out, [1, 2, 3, 9]);
}

#[test]
fn merge() {
    let out = Seq::new(["0", "1", "2"]).merge([vec!["a", "b", "c"]]).to_vec();
    assert_eq!(out, ["0", "a", "1", "b", "2", "c"]);
}

#[test]
fn merge_left() {
    let out = Seq::new(["0", "1", "2"]).merge_left([vec!["a", "b", "c"]]).to_vec();
    assert_eq!(out, ["a", "0", "b", "1", "c", "2"]);
}

#[test]
fn merge_of_boxed_sources() {
    let others: Vec<Seq<BoxCursor<'static, i64>>> = vec![
        Seq::counter(-1).skip(1).take(2).boxed(),
        Seq::range((100, 102)).unwrap().boxed(),
    ];
    let out = Seq::new([7_i64, 8, 9]).merge(others).to_vec();
    assert_eq!(out, [7, -1, 100, 8, -2, 101, 9, 102]);
}

#[test]
fn from_multiple() {
    let out = Seq::from_multiple([vec!["0", "1", "2"], vec!["a", "b", "c"]]).to_vec();
    assert_eq!(out, ["0", "a", "1", "b", "2", "c"]);

    let out = Seq::from_multiple([vec!["0", "1"], vec!["a", "b", "c"]]).to_vec();
    assert_eq!(out, ["0", "a", "1", "b", "c"]);

    let out = Seq::from_multiple(Vec::<Vec<u8>>::new()).to_vec();
    assert!(out.is_empty());
}

#[test]
fn from_multiple_with_filtered_source() {
    let evens = Seq::new(0..6).filter(|x, _| x % 2 == 0);
    let odds = Seq::new(0..6).filter(|x, _| x % 2 == 1);
    let out = Seq::new(evens).merge([odds]).to_vec();
    assert_eq!(out, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn accumulate_n() {
    assert_eq!(Seq::new(0..5).accumulate_n(2, false).to_vec(), [vec![0, 1], vec![2, 3]]);
    assert_eq!(
        Seq::new(0..5).accumulate_n(2, true).to_vec(),
        [vec![0, 1], vec![2, 3], vec![4]]
    );
    assert_eq!(Seq::new(0..4).accumulate_n(2, true).to_vec(), [vec![0, 1], vec![2, 3]]);
    assert!(Seq::new(0..0).accumulate_n(2, true).to_vec().is_empty());
}

#[test]
fn accumulate_while() {
    let out = Seq::new(["a", "b", "c", "a", "b", "c"])
        .accumulate_while(|_, x, _| *x == "c", false)
        .to_vec();
    assert_eq!(out, [vec!["a", "b", "c"], vec!["a", "b", "c"]]);
}

#[test]
fn accumulate_while_index_counts_every_element() {
    let out = Seq::new('a'..='g')
        .accumulate_while(|_, _, i| i % 3 == 2, true)
        .to_vec();
    assert_eq!(out, [vec!['a', 'b', 'c'], vec!['d', 'e', 'f'], vec!['g']]);
}

#[test]
fn sub_split() {
    let out = Seq::new(["ab", "cd"]).sub_split(str::chars).to_vec();
    assert_eq!(out, ['a', 'b', 'c', 'd']);

    let opening = Seq::new(LEAR.split('\n'))
        .sub_split(str::chars)
        .take(7)
        .join("");
    assert_eq!(opening, "To thee");
}

#[test]
fn sub_split_pulls_one_outer_element_per_step() {
    let pulled = Cell::new(0);
    let mut seq = Seq::new(["", "", "", "x"].into_iter().inspect(|_| pulled.set(pulled.get() + 1)))
        .sub_split(str::chars);
    assert_eq!(seq.next_step(), Step::NotYet);
    assert_eq!(pulled.get(), 1);
    assert_eq!(seq.next(), Some('x'));
    assert_eq!(pulled.get(), 4);
    assert_eq!(seq.next_step(), Step::Done);
}

#[test]
fn sub_split_on_unbounded_source() {
    let out = Seq::counter(1)
        .sub_split(|n| std::iter::repeat(n).take(n as usize))
        .take(6)
        .to_vec();
    assert_eq!(out, [1, 2, 2, 3, 3, 3]);
}

#[test]
fn join() {
    assert_eq!(Seq::new(["a", "b", "c"]).join(""), "abc");
    assert_eq!(Seq::new([1, 2, 3]).join(","), "1,2,3");
    assert_eq!(Seq::new(Vec::<u8>::new()).join(","), "");
}

#[test]
fn range() {
    let collect = |args: RangeArgs| Seq::range(args).unwrap().to_vec();
    assert_eq!(collect(().into()), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(collect(5.into()), [0, 1, 2, 3, 4]);
    assert_eq!(collect((2, 7).into()), [2, 3, 4, 5, 6, 7]);
    assert_eq!(collect((7, 2).into()), [7, 6, 5, 4, 3, 2]);
    assert_eq!(collect((0, 6, 2).into()), [0, 2, 4, 6]);
    assert_eq!(collect((2, 11, 3).into()), [2, 5, 8, 11]);
    assert_eq!(collect((2, 12, 3).into()), [2, 5, 8, 11]);
    assert_eq!(collect((10, 0, 3).into()), [10, 7, 4, 1]);
    assert_eq!(collect((10, -10, 3).into()), [10, 7, 4, 1, -2, -5, -8]);
}

#[test]
fn range_rejects_non_positive_step() {
    for step in [0, -1, -5] {
        let err = Seq::range((0, 10, step)).err();
        assert_eq!(err, Some(SeqError::InvalidStep { step }));
        let err = Seq::range((10, 0, step)).err();
        assert_eq!(err, Some(SeqError::InvalidStep { step }));
    }
}

#[test]
fn counter() {
    assert_eq!(Seq::counter(1).take(5).to_vec(), [0, 1, 2, 3, 4]);
    assert_eq!(Seq::counter(3).take(5).to_vec(), [0, 3, 6, 9, 12]);
    assert_eq!(Seq::counter(-2).take(5).to_vec(), [0, -2, -4, -6, -8]);
}

#[test]
fn counter_with_large_step_collects_externally() {
    let step = i64::MAX / 2;
    let out: Vec<_> = Seq::counter(step).into_iter().collect();
    assert_eq!(out, [0, step, 2 * step]);
}

#[test]
fn counter_take_matches_multiples() {
    for step in [-7, -1, 0, 1, 4] {
        for k in [0, 1, 9] {
            let expected: Vec<i64> = (0..k).map(|i| i * step).collect();
            assert_eq!(Seq::counter(step).take(k as usize).to_vec(), expected);
        }
    }
}

#[test]
fn from_dyn() {
    let out = Seq::from_dyn::<i32>(Box::new(vec![1, 2, 3])).unwrap().to_vec();
    assert_eq!(out, [1, 2, 3]);

    let iterator: Box<dyn Iterator<Item = i32>> = Box::new((0..3).rev());
    let out = Seq::from_dyn::<i32>(Box::new(iterator)).unwrap().to_vec();
    assert_eq!(out, [2, 1, 0]);

    let cursor: BoxCursor<'static, i32> = Box::new(Seq::new(4..6).into_inner());
    let out = Seq::from_dyn::<i32>(Box::new(cursor)).unwrap().to_vec();
    assert_eq!(out, [4, 5]);
}

#[test]
fn from_dyn_rejects_non_iterables() {
    let err = Seq::from_dyn::<i32>(Box::new(42_u8)).err();
    assert_eq!(err, Some(SeqError::InvalidInput { expected: "i32" }));

    let err = Seq::from_dyn::<i32>(Box::new(vec!["wrong element type"])).err();
    assert!(matches!(err, Some(SeqError::InvalidInput { .. })));
}

struct Doubling<C> {
    cursor: C,
}

impl<C: Cursor> Wrapper for Doubling<C> {
    type Cursor = C;
    type Rewrap<D: Cursor> = Doubling<D>;

    fn rewrap<D: Cursor>(cursor: D) -> Doubling<D> {
        Doubling { cursor }
    }

    fn into_inner(self) -> C {
        self.cursor
    }

    fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: Cursor> From<Seq<C>> for Doubling<C> {
    fn from(seq: Seq<C>) -> Self {
        Doubling {
            cursor: seq.into_inner(),
        }
    }
}

impl<C: Cursor<Item = i32>> Doubling<C> {
    fn double(self) -> Doubling<impl Cursor<Item = i32>> {
        self.map(|x, _| x * 2)
    }
}

#[test]
fn custom_wrapper_survives_chaining() {
    let doubled: Doubling<_> = Doubling::from(Seq::new([1, 2, 3]))
        .filter(|x, _| *x > 1)
        .take(5)
        .double();
    let mut doubled = doubled.double();
    assert_eq!(doubled.to_vec(), [8, 12]);
}

#[test]
fn boxed_sequences_compose() {
    let mut seqs: Vec<Seq<BoxCursor<'static, i64>>> = vec![
        Seq::counter(2).take(3).boxed(),
        Seq::range(3).unwrap().boxed(),
    ];
    let last = seqs.pop();
    let out = seqs.remove(0).concat(last).to_vec();
    assert_eq!(out, [0, 2, 4, 0, 1, 2]);
}

#[test]
fn iterator_cursor_is_public() {
    let cursor: IteratorCursor<_> = (0..2).into_cursor();
    assert_eq!(Seq::from_cursor(cursor).to_vec(), [0, 1]);
}
