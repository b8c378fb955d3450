//! Least squares fits used to estimate growth rates

use num_traits::Float;

/// Ordinary least squares slope of `y` against `x`
///
/// Returns `None` for fewer than two points or when every `x` is equal.
pub fn least_squares_slope<T: Float>(points: &[(T, T)]) -> Option<T> {
    if points.len() < 2 {
        return None;
    }

    let count = T::from(points.len())?;
    let (sum_x, sum_y) = points
        .iter()
        .fold((T::zero(), T::zero()), |(sx, sy), &(x, y)| (sx + x, sy + y));
    let mean_x = sum_x / count;
    let mean_y = sum_y / count;

    let (covariance, variance) =
        points
            .iter()
            .fold((T::zero(), T::zero()), |(cov, var), &(x, y)| {
                let dx = x - mean_x;
                (cov + dx * (y - mean_y), var + dx * dx)
            });

    if variance <= T::epsilon() {
        return None;
    }
    Some(covariance / variance)
}

/// Growth exponent `k` of a power law `y = a * x^k` fitted on a log-log scale
///
/// Points with a non-positive coordinate are skipped since their logarithm
/// is undefined.
pub fn log_log_slope<T: Float>(points: &[(T, T)]) -> Option<T> {
    let logged: Vec<(T, T)> = points
        .iter()
        .filter(|(x, y)| *x > T::zero() && *y > T::zero())
        .map(|&(x, y)| (x.ln(), y.ln()))
        .collect();
    least_squares_slope(&logged)
}
