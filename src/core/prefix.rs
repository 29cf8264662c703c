use crate::utils::error::Result;
use crate::utils::validation;

/// Return the first `min(n + 1, length)` characters of `source`, in order.
///
/// The count is inclusive of index `n`, so `n = 2` yields up to three
/// characters. An empty source yields an empty sequence regardless of `n`.
/// Characters are Unicode scalar values, not bytes. Fails with
/// `InvalidArgument` when `n` is negative.
pub fn extract(source: &str, n: i64) -> Result<Vec<char>> {
    validation::validate_non_negative("n", n)?;

    // n + 1 can exceed usize on 32-bit targets; cap instead of wrapping.
    let take = usize::try_from(n)
        .map(|v| v.saturating_add(1))
        .unwrap_or(usize::MAX);

    Ok(source.chars().take(take).collect())
}
