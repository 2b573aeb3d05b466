use crate::predictor::SpeedupResult;

/// # Description
/// concatenate the per category predictions
/// # Arguments
/// * `per_category` - one sequence per category, already in the classifier's order
/// # Return
/// the categories one after the other, input order kept inside each one;
/// nothing is sorted or removed
pub fn aggregate<'a, I>(per_category: I) -> Vec<SpeedupResult>
where
    I: IntoIterator<Item = &'a [SpeedupResult]>,
{
    per_category
        .into_iter()
        .flat_map(|results| results.iter().cloned())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn result(p: u32) -> SpeedupResult {
        SpeedupResult {
            process_count: p,
            serial_fraction: 0.0,
            predicted_speedup: 1.0,
            predicted_parallel_time: 1.0,
        }
    }

    #[test]
    fn test_category_then_input_order() {
        let gpu = vec![result(8), result(2)];
        let cpu = vec![result(4), result(2), result(16)];
        let merged = aggregate([gpu.as_slice(), cpu.as_slice()]);
        let counts: Vec<u32> = merged.iter().map(|r| r.process_count).collect();
        assert_eq!(counts, vec![8, 2, 4, 2, 16]);
    }

    #[test]
    fn test_empty_categories() {
        let cpu = vec![result(1)];
        let merged = aggregate([&[][..], cpu.as_slice(), &[][..]]);
        assert_eq!(merged, cpu);
        assert!(aggregate(std::iter::empty()).is_empty());
    }
}
