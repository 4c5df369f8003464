//! Shared numeric approximations
//!
//! Rational approximations from Abramowitz & Stegun, accurate to a few
//! decimal places — ample for rendering p-values and interval bounds in a
//! results panel.

/// Two-sided z-score for a confidence level, via the A&S 26.2.23 rational
/// approximation of the inverse standard-normal CDF
///
/// Out-of-range confidence levels are clamped into (0, 1) rather than
/// rejected; statistics functions here are total by contract.
pub(crate) fn z_score(confidence: f64) -> f64 {
    let confidence = confidence.clamp(1e-9, 1.0 - 1e-9);
    let tail = (1.0 - confidence) / 2.0;
    let t = (-2.0_f64 * tail.ln()).sqrt();

    // A&S 26.2.23 coefficients
    let num = 2.515517 + 0.802853 * t + 0.010328 * t * t;
    let den = 1.0 + 1.432788 * t + 0.189269 * t * t + 0.001308 * t * t * t;
    t - num / den
}

/// Standard normal CDF via the A&S 7.1.26 polynomial
pub(crate) fn normal_cdf(x: f64) -> f64 {
    let x_abs = x.abs();
    let t = 1.0 / (1.0 + 0.2316419 * x_abs);
    let density = 0.3989422804014327 * (-x_abs * x_abs / 2.0).exp(); // 1/√(2π)
    let poly = t
        * (0.319381530
            + t * (-0.356563782 + t * (1.781477937 + t * (-1.821255978 + t * 1.330274429))));
    let upper_tail = density * poly;
    if x >= 0.0 {
        1.0 - upper_tail
    } else {
        upper_tail
    }
}

/// Upper-tail probability of a chi-squared variable via the
/// Wilson–Hilferty cube-root normal approximation
///
/// For X ~ χ²(k), (X/k)^(1/3) is approximately normal with mean
/// 1 − 2/(9k) and variance 2/(9k).
pub(crate) fn chi_squared_survival(x: f64, dof: usize) -> f64 {
    if dof == 0 {
        return if x > 0.0 { 0.0 } else { 1.0 };
    }
    if x <= 0.0 {
        return 1.0;
    }
    let k = dof as f64;
    let variance = 2.0 / (9.0 * k);
    let z = ((x / k).powf(1.0 / 3.0) - (1.0 - variance)) / variance.sqrt();
    normal_cdf(-z).clamp(0.0, 1.0)
}
