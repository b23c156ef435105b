//! Fixed settings for the feeder process.
//!
//! There is no file or flag surface. The values below are the whole
//! configuration; region and credentials resolution beyond the profile name is
//! left to the AWS SDK.

use std::time::Duration;

/// Table every record is written to.
pub const TABLE_NAME: &str = "OrdersRawTable";
/// AWS region hosting the table.
pub const REGION: &str = "ap-south-1";
/// Shared-config profile used to resolve credentials.
pub const PROFILE: &str = "default";
/// Pause between the end of one write attempt and the next generation.
pub const WRITE_INTERVAL: Duration = Duration::from_secs(1);

/// Connection context and pacing for a feeder run.
#[derive(Debug, Clone, PartialEq)]
pub struct FeederConfig {
    pub table_name: String,
    pub region: String,
    pub profile: String,
    pub write_interval: Duration,
}

impl Default for FeederConfig {
    fn default() -> Self {
        Self {
            table_name: TABLE_NAME.to_string(),
            region: REGION.to_string(),
            profile: PROFILE.to_string(),
            write_interval: WRITE_INTERVAL,
        }
    }
}

impl FeederConfig {
    /// The part of the configuration the write driver needs.
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            write_interval: self.write_interval,
        }
    }
}

/// Settings owned by the [`WriteDriver`](crate::driver::WriteDriver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub write_interval: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            write_interval: WRITE_INTERVAL,
        }
    }
}
