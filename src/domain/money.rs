//! Currency amounts and effort weights.

/// An amount of currency. Named after the common currency, but also used for
/// seals, scrips and other shop currencies: no conversion happens between them.
pub type Gil = i64;

/// Dimensionless convenience multiplier. Lower is easier.
pub type Effort = f64;

/// Integer division rounding toward positive infinity.
///
/// Used when scaling a requirement up to whole transactions or crafts.
pub const fn div_ceil(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    numerator.div_ceil(denominator)
}
