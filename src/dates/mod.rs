pub mod components;
pub mod granularity;
pub mod reportingperiod;
pub mod serialization;
pub mod unitoftime;

pub use self::components::{MonthNumber, MonthOfYear, QuarterNumber};
pub use self::granularity::{Unit, UnitOfTimeGranularity, UnitOfTimeKind};
pub use self::reportingperiod::{OverflowStrategy, ReportingPeriod, ReportingPeriodComponent};
pub use self::serialization::deserialize_from_sortable_string;
pub use self::unitoftime::{
    CalendarDay, CalendarMonth, CalendarQuarter, CalendarUnbounded, CalendarYear, FiscalMonth,
    FiscalQuarter, FiscalUnbounded, FiscalYear, GenericMonth, GenericQuarter, GenericUnbounded,
    GenericYear, UnitOfTime, UnitOfTimeType, MAX_YEAR, MIN_YEAR,
};
