//! Expected-sales estimation engine for prospective franchise stores.
//!
//! Two estimation methods produce an [`EstimationResult`]: projection from
//! comparable nearby stores and validation of a franchisor-supplied range.
//! Both are stamped with the statutory max/min ratio check before being
//! handed to a renderer via [`assemble_report_data`].

pub mod app_config;
pub mod comparable;
pub mod config;
pub mod error;
pub mod estimate;
pub mod prediction;
pub mod ratio;
pub mod report_data;
pub mod request;

pub use app_config::{AppConfig, Environment, ReportFormat};
pub use comparable::{
    estimate_from_comparables, normalized_rates, trim_rates, NearbyStoreRecord,
    MIN_COMPARABLE_RATES, PROJECTION_DAYS,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, EstimationError, ReportDataError, RequestError};
pub use estimate::{EstimationMethod, EstimationResult};
pub use prediction::validate_predicted_range;
pub use ratio::{check_legal_ratio, RatioCheck, LEGAL_RATIO_CEILING};
pub use report_data::{
    assemble_report_data, CompetitorRecord, ReportData, ReportMetadata, RequiredField,
};
pub use request::{load_request, parse_request, EstimateRequest, PredictionInput};
