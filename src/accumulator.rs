use im::Vector;
use itertools::Itertools;

use crate::parser::{classify, Line};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Group {
    pub index: usize,
    pub total: i64,
}

impl Group {
    // Only replaces on a strictly larger total, so the first of equal groups wins.
    fn merge(self, previous: Option<Group>) -> Group {
        match previous {
            Some(previous) if previous.total >= self.total => previous,
            _ => self,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    #[default]
    BetweenGroups,
    InGroup(Group),
}

// The closed totals are a persistent vector, so snapshots share structure.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    closed: Vector<i64>,
    mode: Mode,
    running_max: Option<Group>,
}

impl State {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn closed(&self) -> &Vector<i64> {
        &self.closed
    }

    pub fn running_max(&self) -> Option<Group> {
        self.running_max
    }

    pub fn advance(self, line: &str) -> State {
        match classify(line) {
            Ok(line) => self.advance_classified(line),
            Err(e) => {
                log::warn!("skipping line: {}", e);
                self
            }
        }
    }

    pub fn advance_classified(self, line: Line) -> State {
        match (line, self.mode) {
            (Line::Blank, Mode::BetweenGroups) => self,
            (Line::Blank, Mode::InGroup(group)) => self.close(group),
            (Line::Number(n), Mode::BetweenGroups) => State {
                mode: Mode::InGroup(Group {
                    index: self.closed.len(),
                    total: n,
                }),
                ..self
            },
            (Line::Number(n), Mode::InGroup(Group { index, total })) => match total.checked_add(n)
            {
                Some(total) => State {
                    mode: Mode::InGroup(Group { index, total }),
                    ..self
                },
                None => {
                    log::warn!(
                        "skipping {} in group {}: total {} would overflow",
                        n,
                        index,
                        total
                    );
                    self
                }
            },
        }
    }

    fn close(self, group: Group) -> State {
        let State {
            mut closed,
            running_max,
            ..
        } = self;

        closed.push_back(group.total);

        State {
            closed,
            mode: Mode::BetweenGroups,
            running_max: Some(group.merge(running_max)),
        }
    }

    // A trailing group with no blank line after it still has to be closed.
    pub fn finalize(self) -> Finished {
        let state = self.advance_classified(Line::Blank);
        Finished {
            closed: state.closed,
            max: state.running_max,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Finished {
    pub closed: Vector<i64>,
    pub max: Option<Group>,
}

impl Finished {
    pub fn top(&self, n: usize) -> Vec<i64> {
        self.closed
            .iter()
            .copied()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .take(n)
            .collect()
    }
}
