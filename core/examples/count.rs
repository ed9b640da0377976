use seq_fusion::prelude::*;

fn main() -> Result<(), SeqError> {
    let n = Seq::range((0, 2047))?
        .every_nth(2)
        .map(|i, _| i + 1)
        .filter(|i, _| *i > 512)
        .fold(0, |acc, item, _| acc + item);

    let expect: i64 = (0..2048)
        .step_by(2)
        .map(|i| i + 1)
        .filter(|i| *i > 512)
        .sum();

    assert_eq!(n, expect);

    let words = Seq::new(["lazy", "pull", "based"])
        .sub_split(str::chars)
        .accumulate_n(4, true)
        .map(|chunk, i| format!("{i}:{}", chunk.into_iter().collect::<String>()))
        .join(" ");
    println!("{n} {words}");
    Ok(())
}
