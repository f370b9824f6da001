pub mod accumulator;
pub mod parser;

pub use accumulator::{Finished, Group, Mode, State};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Summary {
    /// `None` when no group was ever closed.
    pub max: Option<Group>,
    pub top3: Vec<i64>,
    /// Wider than the totals so three of them always fit.
    pub top3_sum: i128,
}

pub fn process<I>(lines: I) -> Summary
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let finished = lines
        .into_iter()
        .fold(State::default(), |state, line| state.advance(line.as_ref()))
        .finalize();

    let top3 = finished.top(3);
    let top3_sum = top3.iter().copied().map(i128::from).sum();

    Summary {
        max: finished.max,
        top3,
        top3_sum,
    }
}

pub fn process_str(input: &str) -> Summary {
    process(parser::universal_lines(input))
}
