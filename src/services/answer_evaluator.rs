use std::collections::HashSet;

/// Grades a submitted answer set against a quiz's correct option set.
pub struct AnswerEvaluator;

impl AnswerEvaluator {
    /// A submission is correct only when it names exactly the correct
    /// options. Subsets, supersets, and partial overlaps all grade as wrong;
    /// out-of-range indices in the submission simply fail the comparison.
    pub fn evaluate(submitted: &HashSet<i32>, correct: &HashSet<i32>) -> bool {
        submitted == correct
    }
}
