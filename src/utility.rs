/// Computes the arithmetic mean of a sequence of values.
/// Returns `None` for empty input instead of dividing by zero.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_mean_values() {
        assert_eq!(mean([50.0, 100.0]), Some(75.0));
        assert_eq!(mean([32.5]), Some(32.5));
    }
}
