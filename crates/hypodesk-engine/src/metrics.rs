use hypodesk_types::{StatusMetric, TopicStatus};

use crate::filter::HasStatus;

/// One tile per concrete status, in tile order, counting `rows` by status.
/// Statuses with no rows still get a zero tile; untracked rows are not counted.
pub fn status_counts<'a, T>(rows: impl IntoIterator<Item = &'a T>) -> Vec<StatusMetric>
where
    T: HasStatus + 'a,
{
    let mut counts = [0usize; TopicStatus::ALL.len()];

    for row in rows {
        if let Some(status) = row.status()
            && let Some(slot) = TopicStatus::ALL.iter().position(|s| *s == status)
        {
            counts[slot] += 1;
        }
    }

    TopicStatus::ALL
        .into_iter()
        .zip(counts)
        .map(|(status, value)| StatusMetric::new(status, value))
        .collect()
}
