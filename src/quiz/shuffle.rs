use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly permutes `items` (Fisher-Yates) and keeps the first `limit`.
///
/// A `limit` of zero, or one larger than the input, keeps everything.
pub fn shuffle_and_take<T, R>(mut items: Vec<T>, limit: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    if limit > 0 {
        items.truncate(limit);
    }
    items
}

pub fn shuffle_selection<T>(items: Vec<T>, limit: usize) -> Vec<T> {
    shuffle_and_take(items, limit, &mut rand::thread_rng())
}
