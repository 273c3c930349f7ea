pub mod timeseries;

pub use self::timeseries::{Datapoint, ReportingPeriodComparisonMethod, Timeseries};
