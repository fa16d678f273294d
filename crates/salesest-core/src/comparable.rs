//! Expected-sales projection from comparable nearby stores.
//!
//! Each comparable is reduced to a daily sales rate per ㎡ so outlets of
//! different size and schedule line up, a fixed window of the sorted rates
//! is kept, and the extremes of that window are projected onto the target
//! store's area over a canonical 30-day month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EstimationError;
use crate::estimate::{EstimationMethod, EstimationResult};

/// Fewer usable comparables than this and no estimate is produced.
pub const MIN_COMPARABLE_RATES: usize = 3;

/// Month length used to project a daily rate back to monthly sales.
pub const PROJECTION_DAYS: u32 = 30;

/// Once this many rates exist, the lowest and the highest are dropped.
const TRIM_THRESHOLD: usize = 5;

/// Width of the kept window when trimming applies.
const TRIM_WINDOW: usize = 3;

fn default_operating_days() -> i32 {
    30
}

/// Sales figures of one nearby franchise outlet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyStoreRecord {
    pub name: String,
    /// Monthly sales in 만원.
    pub monthly_sales: Decimal,
    pub area_sqm: Decimal,
    #[serde(default = "default_operating_days")]
    pub operating_days: i32,
}

impl NearbyStoreRecord {
    /// Daily sales per ㎡, or `None` if the record is unusable.
    #[must_use]
    pub fn normalized_rate(&self) -> Option<Decimal> {
        self.rate().ok()
    }

    /// Daily sales per ㎡, or the reason the record cannot be used.
    fn rate(&self) -> Result<Decimal, &'static str> {
        if self.area_sqm <= Decimal::ZERO {
            return Err("area must be positive");
        }
        if self.operating_days <= 0 {
            return Err("operating days must be positive");
        }

        let rate = (self.monthly_sales / Decimal::from(self.operating_days))
            .checked_div(self.area_sqm)
            .ok_or("rate out of range")?;
        if rate <= Decimal::ZERO {
            return Err("no sales recorded");
        }
        Ok(rate)
    }
}

/// Normalized rates of every usable record, in input order.
///
/// Records with a non-positive area, non-positive operating days, or a
/// non-positive resulting rate are dropped, never coerced to zero.
#[must_use]
pub fn normalized_rates(records: &[NearbyStoreRecord]) -> Vec<Decimal> {
    records
        .iter()
        .filter_map(|record| match record.rate() {
            Ok(rate) => Some(rate),
            Err(reason) => {
                tracing::debug!(store = %record.name, reason, "skipping comparable store");
                None
            }
        })
        .collect()
}

/// Kept window of an ascending rate list.
///
/// With five or more rates this is always sorted positions 1, 2 and 3,
/// whatever the total; with fewer, every rate is kept.
#[must_use]
pub fn trim_rates(sorted: &[Decimal]) -> &[Decimal] {
    if sorted.len() >= TRIM_THRESHOLD {
        &sorted[1..=TRIM_WINDOW]
    } else {
        sorted
    }
}

/// Project a monthly expected-sales range for a store of `target_area_sqm`
/// from nearby comparable stores.
///
/// # Errors
///
/// - [`EstimationError::InvalidArea`] if `target_area_sqm` is not positive.
/// - [`EstimationError::InsufficientData`] if fewer than
///   [`MIN_COMPARABLE_RATES`] records are usable.
/// - [`EstimationError::InvalidInput`] if the projection or the ratio of the
///   projected bounds overflows.
pub fn estimate_from_comparables(
    records: &[NearbyStoreRecord],
    target_area_sqm: Decimal,
) -> Result<EstimationResult, EstimationError> {
    if target_area_sqm <= Decimal::ZERO {
        return Err(EstimationError::InvalidArea {
            area: target_area_sqm,
        });
    }

    let mut rates = normalized_rates(records);
    if rates.len() < MIN_COMPARABLE_RATES {
        return Err(EstimationError::InsufficientData {
            usable: rates.len(),
            required: MIN_COMPARABLE_RATES,
        });
    }
    rates.sort_unstable();

    let kept = trim_rates(&rates);
    // Non-empty: at least MIN_COMPARABLE_RATES survive trimming.
    let (Some(&min_rate), Some(&max_rate)) = (kept.first(), kept.last()) else {
        return Err(EstimationError::InsufficientData {
            usable: 0,
            required: MIN_COMPARABLE_RATES,
        });
    };

    let min_monthly = project(min_rate, target_area_sqm)?;
    let max_monthly = project(max_rate, target_area_sqm)?;

    EstimationResult::stamped(
        min_monthly,
        max_monthly,
        EstimationMethod::ComparableStores,
        None,
    )
}

fn project(rate: Decimal, target_area_sqm: Decimal) -> Result<Decimal, EstimationError> {
    rate.checked_mul(target_area_sqm)
        .and_then(|v| v.checked_mul(Decimal::from(PROJECTION_DAYS)))
        .ok_or_else(|| {
            EstimationError::InvalidInput(format!(
                "projected sales overflow for rate {rate} and area {target_area_sqm}"
            ))
        })
}

#[cfg(test)]
#[path = "comparable_test.rs"]
mod tests;
