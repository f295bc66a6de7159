use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_over_a_mixed_sign_slice() {
        let values = [0.5, -2.0, 3.25, 0.0];
        assert_eq!(get_min(&values), -2.0);
        assert_eq!(get_max(&values), 3.25);
        assert_eq!(get_min_max(&values), (-2.0, 3.25));
    }
}
