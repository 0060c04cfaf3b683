use std::cmp::Ordering;

/// Keeps the first `k` items under `cmp` and drops the rest.
///
/// Runs a linear-time partition, so the kept items are NOT sorted among
/// themselves. When several items tie with the `k`-th under `cmp`, which of
/// them survive depends on the partition's pivoting.
pub fn partition_top_k<T, F>(items: &mut Vec<T>, k: usize, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if k == 0 {
        items.clear();
        return;
    }
    if k >= items.len() {
        return;
    }

    items.select_nth_unstable_by(k - 1, &mut cmp);
    items.truncate(k);
}
