//! Builds problem records from extracted fields.

use crate::clock::Clock;
use crate::types::{Problem, ProblemFields, ProblemType};

/// Wrap `fields` into a problem anchored at `split_point`.
pub fn assemble(split_point: usize, fields: ProblemFields, clock: &dyn Clock) -> Problem {
    Problem {
        id: split_point + 1,
        key: split_point,
        kind: ProblemType::infer(&fields.options),
        created_at: clock.now(),
        title: fields.title,
        options: fields.options,
        answer: fields.answer,
        hint: fields.hint,
    }
}
