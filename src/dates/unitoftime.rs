use chrono::{Datelike, Days, NaiveDate};
use crate::core::qm;
use crate::dates::components::{ordinal, MonthNumber, MonthOfYear, QuarterNumber};
use crate::dates::granularity::{Unit, UnitOfTimeGranularity, UnitOfTimeKind};
use crate::dates::reportingperiod::ReportingPeriod;
use std::cmp::Ordering;
use std::fmt;

/// Years are limited to four digits so that sortable strings stay fixed
/// width. Year zero is not a year of the Gregorian calendar.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

fn check_year(year: i64) -> qm::Result<i32> {
    if year < MIN_YEAR as i64 || year > MAX_YEAR as i64 {
        return Err(qm::Error::out_of_range("year", year, MIN_YEAR as i64, MAX_YEAR as i64));
    }
    Ok(year as i32)
}

fn date(year: i32, month: u32, day: u32) -> qm::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        qm::Error::out_of_range("day of month", day, 1, days_in_month(year, month))
    })
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

/// A single day of the Gregorian calendar. Days exist only in calendar
/// time; fiscal and generic time are no finer than a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    date: NaiveDate,
}

impl CalendarDay {
    pub fn new(year: i32, month: MonthOfYear, day: u32) -> qm::Result<CalendarDay> {
        let year = check_year(year as i64)?;
        let month = month.number()?;
        Ok(CalendarDay {
            date: date(year, month, day)?,
        })
    }

    pub fn from_naive_date(date: NaiveDate) -> qm::Result<CalendarDay> {
        check_year(date.year() as i64)?;
        Ok(CalendarDay { date })
    }

    pub fn to_naive_date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month_of_year(&self) -> MonthOfYear {
        MonthOfYear::from_month0(self.date.month0())
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

/// A month of the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    year: i32,
    month: MonthOfYear,
}

impl CalendarMonth {
    pub fn new(year: i32, month: MonthOfYear) -> qm::Result<CalendarMonth> {
        let year = check_year(year as i64)?;
        month.number()?;
        Ok(CalendarMonth { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_of_year(&self) -> MonthOfYear {
        self.month
    }

    pub fn month_number(&self) -> MonthNumber {
        MonthNumber::from_month0(self.month as u32 - 1)
    }
}

macro_rules! numbered_month_type {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            year: i32,
            month: MonthNumber,
        }

        impl $name {
            pub fn new(year: i32, month: MonthNumber) -> qm::Result<$name> {
                let year = check_year(year as i64)?;
                month.number()?;
                Ok($name { year, month })
            }

            pub fn year(&self) -> i32 {
                self.year
            }

            pub fn month_number(&self) -> MonthNumber {
                self.month
            }
        }
    };
}

macro_rules! quarter_type {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            year: i32,
            quarter: QuarterNumber,
        }

        impl $name {
            pub fn new(year: i32, quarter: QuarterNumber) -> qm::Result<$name> {
                let year = check_year(year as i64)?;
                quarter.number()?;
                Ok($name { year, quarter })
            }

            pub fn year(&self) -> i32 {
                self.year
            }

            pub fn quarter_number(&self) -> QuarterNumber {
                self.quarter
            }
        }
    };
}

macro_rules! year_type {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            year: i32,
        }

        impl $name {
            pub fn new(year: i32) -> qm::Result<$name> {
                Ok($name {
                    year: check_year(year as i64)?,
                })
            }

            pub fn year(&self) -> i32 {
                self.year
            }
        }
    };
}

macro_rules! unbounded_type {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name;

        impl $name {
            pub fn new() -> $name {
                $name
            }
        }
    };
}

numbered_month_type!(
    /// A month of a fiscal year, numbered from the start of that year.
    FiscalMonth
);
numbered_month_type!(
    /// A month of a year with no particular alignment.
    GenericMonth
);
quarter_type!(
    /// A quarter of the Gregorian calendar year.
    CalendarQuarter
);
quarter_type!(FiscalQuarter);
quarter_type!(GenericQuarter);
year_type!(
    /// A Gregorian calendar year.
    CalendarYear
);
year_type!(FiscalYear);
year_type!(GenericYear);
unbounded_type!(
    /// No limit, in calendar time. Used for an open side of a period.
    CalendarUnbounded
);
unbounded_type!(FiscalUnbounded);
unbounded_type!(GenericUnbounded);

/// Any unit of time. Each variant wraps the concrete type of the same name,
/// so per-variant behaviour is an exhaustive match rather than a cast.
///
/// Values of the same variant are ordered chronologically. Values of
/// different variants are not comparable: `partial_cmp` returns `None` and
/// `try_cmp` says why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitOfTime {
    CalendarDay(CalendarDay),
    CalendarMonth(CalendarMonth),
    CalendarQuarter(CalendarQuarter),
    CalendarYear(CalendarYear),
    CalendarUnbounded(CalendarUnbounded),
    FiscalMonth(FiscalMonth),
    FiscalQuarter(FiscalQuarter),
    FiscalYear(FiscalYear),
    FiscalUnbounded(FiscalUnbounded),
    GenericMonth(GenericMonth),
    GenericQuarter(GenericQuarter),
    GenericYear(GenericYear),
    GenericUnbounded(GenericUnbounded),
}

/// A concrete unit-of-time type that a `UnitOfTime` can be narrowed to.
/// `UnitOfTime` itself narrows to itself, so generic parsing code can ask
/// for either.
pub trait UnitOfTimeType: Sized + Copy + Into<UnitOfTime> {
    fn from_unit_of_time(unit: UnitOfTime) -> qm::Result<Self>;
}

impl UnitOfTimeType for UnitOfTime {
    fn from_unit_of_time(unit: UnitOfTime) -> qm::Result<UnitOfTime> {
        Ok(unit)
    }
}

macro_rules! concrete_unit_of_time {
    ($($name:ident),*) => {
        $(
            impl From<$name> for UnitOfTime {
                fn from(value: $name) -> UnitOfTime {
                    UnitOfTime::$name(value)
                }
            }

            impl UnitOfTimeType for $name {
                fn from_unit_of_time(unit: UnitOfTime) -> qm::Result<$name> {
                    match unit {
                        UnitOfTime::$name(value) => Ok(value),
                        other => Err(qm::Error::new(
                            qm::ErrorKind::TypeMismatch,
                            &format!("expected a {} but got {:?}", stringify!($name), other),
                        )),
                    }
                }
            }
        )*
    };
}

concrete_unit_of_time!(
    CalendarDay,
    CalendarMonth,
    CalendarQuarter,
    CalendarYear,
    CalendarUnbounded,
    FiscalMonth,
    FiscalQuarter,
    FiscalYear,
    FiscalUnbounded,
    GenericMonth,
    GenericQuarter,
    GenericYear,
    GenericUnbounded
);

/// The data that pins down a unit of time once its kind is known. Month and
/// quarter numbers are one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Parts {
    Day(NaiveDate),
    Month(i32, u32),
    Quarter(i32, u32),
    Year(i32),
    Unbounded,
}

impl UnitOfTimeKind {
    /// The unbounded value of this kind.
    pub fn unbounded(self) -> UnitOfTime {
        UnitOfTime::unbounded(self)
    }
}

impl UnitOfTime {
    pub fn unbounded(kind: UnitOfTimeKind) -> UnitOfTime {
        match kind {
            UnitOfTimeKind::Calendar => UnitOfTime::CalendarUnbounded(CalendarUnbounded),
            UnitOfTimeKind::Fiscal => UnitOfTime::FiscalUnbounded(FiscalUnbounded),
            UnitOfTimeKind::Generic => UnitOfTime::GenericUnbounded(GenericUnbounded),
        }
    }

    pub fn kind(&self) -> UnitOfTimeKind {
        match *self {
            UnitOfTime::CalendarDay(_)
            | UnitOfTime::CalendarMonth(_)
            | UnitOfTime::CalendarQuarter(_)
            | UnitOfTime::CalendarYear(_)
            | UnitOfTime::CalendarUnbounded(_) => UnitOfTimeKind::Calendar,
            UnitOfTime::FiscalMonth(_)
            | UnitOfTime::FiscalQuarter(_)
            | UnitOfTime::FiscalYear(_)
            | UnitOfTime::FiscalUnbounded(_) => UnitOfTimeKind::Fiscal,
            UnitOfTime::GenericMonth(_)
            | UnitOfTime::GenericQuarter(_)
            | UnitOfTime::GenericYear(_)
            | UnitOfTime::GenericUnbounded(_) => UnitOfTimeKind::Generic,
        }
    }

    pub fn granularity(&self) -> UnitOfTimeGranularity {
        match self.parts() {
            Parts::Day(_) => UnitOfTimeGranularity::Day,
            Parts::Month(..) => UnitOfTimeGranularity::Month,
            Parts::Quarter(..) => UnitOfTimeGranularity::Quarter,
            Parts::Year(_) => UnitOfTimeGranularity::Year,
            Parts::Unbounded => UnitOfTimeGranularity::Unbounded,
        }
    }

    pub fn unit(&self) -> Unit {
        Unit::of(self.kind(), self.granularity())
    }

    pub fn is_bounded(&self) -> bool {
        self.parts() != Parts::Unbounded
    }

    /// The year this unit falls in, or `None` if it is unbounded.
    pub fn year(&self) -> Option<i32> {
        match self.parts() {
            Parts::Day(d) => Some(d.year()),
            Parts::Month(y, _) | Parts::Quarter(y, _) | Parts::Year(y) => Some(y),
            Parts::Unbounded => None,
        }
    }

    pub(crate) fn parts(&self) -> Parts {
        match *self {
            UnitOfTime::CalendarDay(d) => Parts::Day(d.date),
            UnitOfTime::CalendarMonth(m) => Parts::Month(m.year, m.month as u32),
            UnitOfTime::FiscalMonth(m) => Parts::Month(m.year, m.month as u32),
            UnitOfTime::GenericMonth(m) => Parts::Month(m.year, m.month as u32),
            UnitOfTime::CalendarQuarter(q) => Parts::Quarter(q.year, q.quarter as u32),
            UnitOfTime::FiscalQuarter(q) => Parts::Quarter(q.year, q.quarter as u32),
            UnitOfTime::GenericQuarter(q) => Parts::Quarter(q.year, q.quarter as u32),
            UnitOfTime::CalendarYear(y) => Parts::Year(y.year),
            UnitOfTime::FiscalYear(y) => Parts::Year(y.year),
            UnitOfTime::GenericYear(y) => Parts::Year(y.year),
            UnitOfTime::CalendarUnbounded(_)
            | UnitOfTime::FiscalUnbounded(_)
            | UnitOfTime::GenericUnbounded(_) => Parts::Unbounded,
        }
    }

    pub(crate) fn from_parts(kind: UnitOfTimeKind, parts: Parts) -> qm::Result<UnitOfTime> {
        use crate::dates::granularity::UnitOfTimeKind::*;
        Ok(match (kind, parts) {
            (Calendar, Parts::Day(d)) => CalendarDay::from_naive_date(d)?.into(),
            (_, Parts::Day(_)) => {
                return Err(qm::Error::new(
                    qm::ErrorKind::NotSupported,
                    &format!("{} time has no Day granularity", kind),
                ))
            }
            (Calendar, Parts::Month(y, m)) => CalendarMonth::new(y, MonthOfYear::from_number(m)?)?.into(),
            (Fiscal, Parts::Month(y, m)) => FiscalMonth::new(y, MonthNumber::from_number(m)?)?.into(),
            (Generic, Parts::Month(y, m)) => GenericMonth::new(y, MonthNumber::from_number(m)?)?.into(),
            (Calendar, Parts::Quarter(y, q)) => {
                CalendarQuarter::new(y, QuarterNumber::from_number(q)?)?.into()
            }
            (Fiscal, Parts::Quarter(y, q)) => FiscalQuarter::new(y, QuarterNumber::from_number(q)?)?.into(),
            (Generic, Parts::Quarter(y, q)) => {
                GenericQuarter::new(y, QuarterNumber::from_number(q)?)?.into()
            }
            (Calendar, Parts::Year(y)) => CalendarYear::new(y)?.into(),
            (Fiscal, Parts::Year(y)) => FiscalYear::new(y)?.into(),
            (Generic, Parts::Year(y)) => GenericYear::new(y)?.into(),
            (_, Parts::Unbounded) => UnitOfTime::unbounded(kind),
        })
    }

    /// Chronological comparison. Fails with `KindMismatch` across kinds and
    /// `GranularityMismatch` across concrete variants of the same kind. Two
    /// unbounded values of the same kind are equal.
    pub fn try_cmp(&self, other: &UnitOfTime) -> qm::Result<Ordering> {
        self.kind().check_same(other.kind())?;
        match (self.parts(), other.parts()) {
            (Parts::Day(a), Parts::Day(b)) => Ok(a.cmp(&b)),
            (Parts::Month(ay, am), Parts::Month(by, bm)) => Ok((ay, am).cmp(&(by, bm))),
            (Parts::Quarter(ay, aq), Parts::Quarter(by, bq)) => Ok((ay, aq).cmp(&(by, bq))),
            (Parts::Year(a), Parts::Year(b)) => Ok(a.cmp(&b)),
            (Parts::Unbounded, Parts::Unbounded) => Ok(Ordering::Equal),
            _ => Err(qm::Error::new(
                qm::ErrorKind::GranularityMismatch,
                &format!(
                    "cannot compare a {} with a {}",
                    self.unit(),
                    other.unit()
                ),
            )),
        }
    }

    /// Moves by `n` whole units of this value's own granularity. Negative
    /// `n` moves backwards.
    pub fn plus(&self, n: i32) -> qm::Result<UnitOfTime> {
        let n = n as i64;
        let parts = match self.parts() {
            Parts::Day(d) => {
                let moved = if n >= 0 {
                    d.checked_add_days(Days::new(n as u64))
                } else {
                    d.checked_sub_days(Days::new(n.unsigned_abs()))
                };
                Parts::Day(moved.ok_or_else(|| {
                    qm::Error::new(
                        qm::ErrorKind::OutOfRange,
                        &format!("{} days from {} is outside the supported range", n, d),
                    )
                })?)
            }
            Parts::Month(y, m) => {
                let ordinal = y as i64 * 12 + (m as i64 - 1) + n;
                let year = check_year(ordinal.div_euclid(12))?;
                Parts::Month(year, ordinal.rem_euclid(12) as u32 + 1)
            }
            Parts::Quarter(y, q) => {
                let ordinal = y as i64 * 4 + (q as i64 - 1) + n;
                let year = check_year(ordinal.div_euclid(4))?;
                Parts::Quarter(year, ordinal.rem_euclid(4) as u32 + 1)
            }
            Parts::Year(y) => Parts::Year(check_year(y as i64 + n)?),
            Parts::Unbounded => return Err(cannot_adjust_unbounded()),
        };
        UnitOfTime::from_parts(self.kind(), parts)
    }

    /// Moves by `n` units of the given granularity, which must be as or less
    /// granular than this value's own; adding years to a quarter is fine,
    /// adding quarters to a year is not. Coarser steps are re-expressed as a
    /// multiple of the native unit. Days cannot take coarser steps because
    /// months have no fixed length in days.
    pub fn plus_granularity(&self, n: i32, granularity: UnitOfTimeGranularity) -> qm::Result<UnitOfTime> {
        granularity.validate()?;
        if !self.is_bounded() || granularity == UnitOfTimeGranularity::Unbounded {
            return Err(cannot_adjust_unbounded());
        }
        let own = self.granularity();
        if granularity.is_more_granular_than(own)? {
            return Err(qm::Error::new(
                qm::ErrorKind::IncompatibleGranularity,
                &format!("cannot add {} units to a {}", granularity, self.unit()),
            ));
        }
        let multiplier = match (own, granularity) {
            (a, b) if a == b => 1,
            (UnitOfTimeGranularity::Month, UnitOfTimeGranularity::Quarter) => 3,
            (UnitOfTimeGranularity::Month, UnitOfTimeGranularity::Year) => 12,
            (UnitOfTimeGranularity::Quarter, UnitOfTimeGranularity::Year) => 4,
            _ => {
                return Err(qm::Error::new(
                    qm::ErrorKind::NotSupported,
                    &format!("cannot add {} units to a {}", granularity, self.unit()),
                ))
            }
        };
        let steps = n.checked_mul(multiplier).ok_or_else(|| {
            qm::Error::new(
                qm::ErrorKind::OutOfRange,
                &format!("{} {} units is too large an adjustment", n, granularity),
            )
        })?;
        self.plus(steps)
    }

    /// The first unit of this variant in the same year, e.g. January for a
    /// month or Q1 for a quarter.
    pub fn first_in_same_year(&self) -> qm::Result<UnitOfTime> {
        let parts = match self.parts() {
            Parts::Day(d) => Parts::Day(date(d.year(), 1, 1)?),
            Parts::Month(y, _) => Parts::Month(y, 1),
            Parts::Quarter(y, _) => Parts::Quarter(y, 1),
            Parts::Year(y) => Parts::Year(y),
            Parts::Unbounded => return Err(unbounded_has_no_year()),
        };
        UnitOfTime::from_parts(self.kind(), parts)
    }

    /// The last unit of this variant in the same year.
    pub fn last_in_same_year(&self) -> qm::Result<UnitOfTime> {
        let parts = match self.parts() {
            Parts::Day(d) => Parts::Day(date(d.year(), 12, 31)?),
            Parts::Month(y, _) => Parts::Month(y, 12),
            Parts::Quarter(y, _) => Parts::Quarter(y, 4),
            Parts::Year(y) => Parts::Year(y),
            Parts::Unbounded => return Err(unbounded_has_no_year()),
        };
        UnitOfTime::from_parts(self.kind(), parts)
    }

    pub fn is_first_in_year(&self) -> qm::Result<bool> {
        Ok(self.first_in_same_year()? == *self)
    }

    pub fn is_last_in_year(&self) -> qm::Result<bool> {
        Ok(self.last_in_same_year()? == *self)
    }

    /// The first calendar day covered by this unit. Only calendar units have
    /// calendar days.
    pub fn first_calendar_day(&self) -> qm::Result<CalendarDay> {
        self.check_calendar_days()?;
        CalendarDay::from_unit_of_time(self.first_most_granular()?)
    }

    /// The last calendar day covered by this unit.
    pub fn last_calendar_day(&self) -> qm::Result<CalendarDay> {
        self.check_calendar_days()?;
        CalendarDay::from_unit_of_time(self.last_most_granular()?)
    }

    fn check_calendar_days(&self) -> qm::Result<()> {
        if self.kind() != UnitOfTimeKind::Calendar || !self.is_bounded() {
            return Err(qm::Error::new(
                qm::ErrorKind::NotSupported,
                &format!("a {} has no calendar days", self.unit()),
            ));
        }
        Ok(())
    }

    /// The period covering the same span as this unit, expressed in the
    /// finest granularity of its kind. An unbounded unit becomes the period
    /// that is unbounded on both sides.
    pub fn to_most_granular(&self) -> qm::Result<ReportingPeriod> {
        if !self.is_bounded() {
            return ReportingPeriod::new(*self, *self);
        }
        ReportingPeriod::new(self.first_most_granular()?, self.last_most_granular()?)
    }

    pub(crate) fn first_most_granular(&self) -> qm::Result<UnitOfTime> {
        let target = self.kind().most_granular();
        let mut unit = *self;
        while unit.granularity() != target {
            unit = unit.first_sub_unit()?;
        }
        Ok(unit)
    }

    pub(crate) fn last_most_granular(&self) -> qm::Result<UnitOfTime> {
        let target = self.kind().most_granular();
        let mut unit = *self;
        while unit.granularity() != target {
            unit = unit.last_sub_unit()?;
        }
        Ok(unit)
    }

    /// The first unit one notch finer that this unit is made of: Q1 of a
    /// year, the first month of a quarter, the first day of a month.
    pub(crate) fn first_sub_unit(&self) -> qm::Result<UnitOfTime> {
        let parts = match self.parts() {
            Parts::Year(y) => Parts::Quarter(y, 1),
            Parts::Quarter(y, q) => Parts::Month(y, 3 * q - 2),
            Parts::Month(y, m) => Parts::Day(date(y, m, 1)?),
            Parts::Day(_) => return Err(no_finer_unit(self)),
            Parts::Unbounded => return Err(cannot_adjust_unbounded()),
        };
        UnitOfTime::from_parts(self.kind(), parts)
    }

    pub(crate) fn last_sub_unit(&self) -> qm::Result<UnitOfTime> {
        let parts = match self.parts() {
            Parts::Year(y) => Parts::Quarter(y, 4),
            Parts::Quarter(y, q) => Parts::Month(y, 3 * q),
            Parts::Month(y, m) => Parts::Day(date(y, m, days_in_month(y, m))?),
            Parts::Day(_) => return Err(no_finer_unit(self)),
            Parts::Unbounded => return Err(cannot_adjust_unbounded()),
        };
        UnitOfTime::from_parts(self.kind(), parts)
    }

    /// The unit one notch coarser that contains this one: the month of a
    /// day, the quarter of a month, the year of a quarter.
    pub(crate) fn containing_unit(&self) -> qm::Result<UnitOfTime> {
        let parts = match self.parts() {
            Parts::Day(d) => Parts::Month(d.year(), d.month()),
            Parts::Month(y, m) => Parts::Quarter(y, (m - 1) / 3 + 1),
            Parts::Quarter(y, _) => Parts::Year(y),
            Parts::Year(_) | Parts::Unbounded => {
                return Err(qm::Error::new(
                    qm::ErrorKind::NotSupported,
                    &format!("a {} is not contained in a coarser bounded unit", self.unit()),
                ))
            }
        };
        UnitOfTime::from_parts(self.kind(), parts)
    }
}

fn cannot_adjust_unbounded() -> qm::Error {
    qm::Error::new(
        qm::ErrorKind::CannotAdjustUnbounded,
        "an unbounded unit of time cannot be adjusted",
    )
}

fn unbounded_has_no_year() -> qm::Error {
    qm::Error::new(
        qm::ErrorKind::NotSupported,
        "an unbounded unit of time does not fall in a year",
    )
}

fn no_finer_unit(unit: &UnitOfTime) -> qm::Error {
    qm::Error::new(
        qm::ErrorKind::NotSupported,
        &format!("a {} cannot be broken into finer units", unit.unit()),
    )
}

impl PartialOrd for UnitOfTime {
    fn partial_cmp(&self, other: &UnitOfTime) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month as u32)
    }
}

impl fmt::Display for FiscalMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} month of FY{:04}", ordinal(self.month as u32), self.year)
    }
}

impl fmt::Display for GenericMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} month of {:04}", ordinal(self.month as u32), self.year)
    }
}

impl fmt::Display for CalendarQuarter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}Q{:04}", self.quarter as u32, self.year)
    }
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}Q FY{:04}", self.quarter as u32, self.year)
    }
}

impl fmt::Display for GenericQuarter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}Q-{:04}", self.quarter as u32, self.year)
    }
}

impl fmt::Display for CalendarYear {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CY{:04}", self.year)
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FY{:04}", self.year)
    }
}

impl fmt::Display for GenericYear {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}", self.year)
    }
}

impl fmt::Display for CalendarUnbounded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unbounded")
    }
}

impl fmt::Display for FiscalUnbounded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unbounded")
    }
}

impl fmt::Display for GenericUnbounded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unbounded")
    }
}

impl fmt::Display for UnitOfTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            UnitOfTime::CalendarDay(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::CalendarMonth(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::CalendarQuarter(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::CalendarYear(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::CalendarUnbounded(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::FiscalMonth(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::FiscalQuarter(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::FiscalYear(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::FiscalUnbounded(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::GenericMonth(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::GenericQuarter(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::GenericYear(ref u) => fmt::Display::fmt(u, f),
            UnitOfTime::GenericUnbounded(ref u) => fmt::Display::fmt(u, f),
        }
    }
}
