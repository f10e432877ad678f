//! Backend for the SAR globe: mock radar sample batches and the static
//! payloads the 3D client renders over Japan.

pub mod config;
pub mod error;
pub mod geo;
pub mod globe;
pub mod sar;
pub mod server;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{ApiError, ConfigError, SarError};
pub use sar::{generate, generate_at, BaseLocation, SampleRecord, SarBatch};
