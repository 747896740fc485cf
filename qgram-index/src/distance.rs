/// Prefix edit distance: the smallest edit distance between `x` and any prefix of `y`.
///
/// Only the first `|x| + delta + 1` columns of the matrix are computed, since no
/// longer prefix of `y` can be within `delta` of `x`. Returns `delta + 1` when the
/// distance is larger than `delta`.
pub fn prefix_edit_distance(x: &str, y: &str, delta: usize) -> usize {
    let x = x.as_bytes();
    let y = y.as_bytes();
    let columns = (x.len() + delta + 1).min(y.len() + 1);

    let mut previous: Vec<usize> = (0..columns).collect();
    let mut current = vec![0; columns];
    for i in 1..=x.len() {
        current[0] = i;
        for j in 1..columns {
            let substitution = usize::from(x[i - 1] != y[j - 1]);
            current[j] = (previous[j - 1] + substitution)
                .min(current[j - 1] + 1)
                .min(previous[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous
        .into_iter()
        .min()
        .map_or(delta + 1, |min| min.min(delta + 1))
}
