//! YAML request files describing one expected-sales calculation.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::comparable::{estimate_from_comparables, NearbyStoreRecord};
use crate::error::{EstimationError, RequestError};
use crate::estimate::{EstimationMethod, EstimationResult};
use crate::prediction::validate_predicted_range;
use crate::report_data::ReportMetadata;

/// Franchisor-supplied range for [`EstimationMethod::FranchisorPrediction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub min_monthly_sales: Decimal,
    pub max_monthly_sales: Decimal,
    #[serde(default)]
    pub basis: String,
}

/// A complete calculation request: form metadata plus the inputs for the
/// selected method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub metadata: ReportMetadata,
    pub method: EstimationMethod,
    #[serde(default)]
    pub nearby_stores: Vec<NearbyStoreRecord>,
    #[serde(default)]
    pub prediction: Option<PredictionInput>,
}

impl EstimateRequest {
    /// Run the selected method.
    ///
    /// The comparable method projects onto `metadata.store_area_sqm`.
    ///
    /// # Errors
    ///
    /// Returns the estimator's [`EstimationError`], or
    /// [`EstimationError::InvalidInput`] when a prediction request carries no
    /// `prediction` block.
    pub fn run(&self) -> Result<EstimationResult, EstimationError> {
        match self.method {
            EstimationMethod::ComparableStores => {
                estimate_from_comparables(&self.nearby_stores, self.metadata.store_area_sqm)
            }
            EstimationMethod::FranchisorPrediction => {
                let prediction = self.prediction.as_ref().ok_or_else(|| {
                    EstimationError::InvalidInput(
                        "franchisor-prediction request has no prediction block".to_string(),
                    )
                })?;
                validate_predicted_range(
                    prediction.min_monthly_sales,
                    prediction.max_monthly_sales,
                    &prediction.basis,
                )
            }
        }
    }
}

/// Load a request from a YAML file.
///
/// # Errors
///
/// Returns [`RequestError`] if the file cannot be read or parsed.
pub fn load_request(path: &Path) -> Result<EstimateRequest, RequestError> {
    let content = std::fs::read_to_string(path).map_err(|e| RequestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_request(&content)
}

/// Parse a request from YAML text.
///
/// # Errors
///
/// Returns [`RequestError::Parse`] on malformed YAML or a schema mismatch.
pub fn parse_request(yaml: &str) -> Result<EstimateRequest, RequestError> {
    let request: EstimateRequest = serde_yaml::from_str(yaml)?;
    tracing::debug!(
        method = %request.method,
        nearby_stores = request.nearby_stores.len(),
        "loaded estimate request"
    );
    Ok(request)
}
