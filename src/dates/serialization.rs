//! The sortable string form of units of time and reporting periods.
//!
//! Every concrete variant has a fixed pattern, tagged with `c`, `f` or `g`
//! for its kind and zero-padded so that, within a variant, lexical order is
//! chronological order:
//!
//! | variant   | pattern        |
//! |-----------|----------------|
//! | day       | `c-YYYY-MM-DD` |
//! | month     | `k-YYYY-MM`    |
//! | quarter   | `k-YYYY-QN`    |
//! | year      | `k-YYYY`       |
//! | unbounded | `k-unbounded`  |
//!
//! A reporting period is its start and end joined by a single comma. The
//! serde implementations in this module write and read these strings, so
//! whatever document format a caller uses carries the same text.

use crate::core::qm;
use crate::dates::components::MonthOfYear;
use crate::dates::granularity::{UnitOfTimeGranularity, UnitOfTimeKind};
use crate::dates::reportingperiod::ReportingPeriod;
use crate::dates::unitoftime::*;
use chrono::Datelike;
use regex::{Captures, Regex};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

struct Pattern {
    kind: UnitOfTimeKind,
    granularity: UnitOfTimeGranularity,
    regex: Regex,
}

fn pattern(kind: UnitOfTimeKind, granularity: UnitOfTimeGranularity, body: &str) -> Pattern {
    let source = format!("^{}-{}$", kind.tag(), body);
    Pattern {
        kind,
        granularity,
        regex: Regex::new(&source).expect("sortable string patterns are valid regular expressions"),
    }
}

lazy_static! {
    static ref PATTERNS: Vec<Pattern> = {
        let mut patterns = vec![pattern(
            UnitOfTimeKind::Calendar,
            UnitOfTimeGranularity::Day,
            "([0-9]{4})-([0-9]{2})-([0-9]{2})",
        )];
        for &kind in &[UnitOfTimeKind::Calendar, UnitOfTimeKind::Fiscal, UnitOfTimeKind::Generic] {
            patterns.push(pattern(kind, UnitOfTimeGranularity::Month, "([0-9]{4})-([0-9]{2})"));
            patterns.push(pattern(kind, UnitOfTimeGranularity::Quarter, "([0-9]{4})-Q([0-9])"));
            patterns.push(pattern(kind, UnitOfTimeGranularity::Year, "([0-9]{4})"));
            patterns.push(pattern(kind, UnitOfTimeGranularity::Unbounded, "unbounded"));
        }
        patterns
    };
}

fn field(captures: &Captures, index: usize) -> qm::Result<u32> {
    captures
        .get(index)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| {
            qm::Error::new(
                qm::ErrorKind::MalformedValue,
                &format!("field {} of {} is missing or not a number", index, &captures[0]),
            )
        })
}

fn build(pattern: &Pattern, captures: &Captures) -> qm::Result<UnitOfTime> {
    let kind = pattern.kind;
    match pattern.granularity {
        UnitOfTimeGranularity::Unbounded => Ok(UnitOfTime::unbounded(kind)),
        UnitOfTimeGranularity::Day => {
            let month = MonthOfYear::from_number(field(captures, 2)?)?;
            Ok(CalendarDay::new(field(captures, 1)? as i32, month, field(captures, 3)?)?.into())
        }
        UnitOfTimeGranularity::Month => {
            let parts = Parts::Month(field(captures, 1)? as i32, field(captures, 2)?);
            UnitOfTime::from_parts(kind, parts)
        }
        UnitOfTimeGranularity::Quarter => {
            let parts = Parts::Quarter(field(captures, 1)? as i32, field(captures, 2)?);
            UnitOfTime::from_parts(kind, parts)
        }
        UnitOfTimeGranularity::Year => UnitOfTime::from_parts(kind, Parts::Year(field(captures, 1)? as i32)),
        UnitOfTimeGranularity::Invalid => Err(qm::Error::invalid_enum("granularity")),
    }
}

fn parse_unit_of_time(text: &str) -> qm::Result<UnitOfTime> {
    // the patterns are mutually exclusive, so the first match is the only one
    let found = PATTERNS
        .iter()
        .find_map(|p| p.regex.captures(text).map(|captures| (p, captures)));
    let (pattern, captures) = match found {
        Some(found) => found,
        None => {
            debug!(input = text, "no sortable string pattern matches");
            return Err(qm::Error::new(
                qm::ErrorKind::UnrecognizedFormat,
                &format!("'{}' is not a sortable unit-of-time string", text),
            ));
        }
    };
    build(pattern, &captures).map_err(|e| {
        debug!(input = text, reason = e.message(), "malformed sortable string");
        e.with_kind(qm::ErrorKind::MalformedValue)
    })
}

/// Parses a sortable string and narrows the result to the requested type,
/// which may be `UnitOfTime` itself or any concrete variant. Fails with
/// `UnrecognizedFormat` if no pattern matches, `MalformedValue` if a pattern
/// matches but a field is invalid (month 13, year 0000 and the like), and
/// `TypeMismatch` if the value is of another variant.
pub fn deserialize_from_sortable_string<T: UnitOfTimeType>(text: &str) -> qm::Result<T> {
    T::from_unit_of_time(parse_unit_of_time(text)?)
}

impl UnitOfTime {
    pub fn to_sortable_string(&self) -> String {
        let tag = self.kind().tag();
        match self.parts() {
            Parts::Day(d) => format!("{}-{:04}-{:02}-{:02}", tag, d.year(), d.month(), d.day()),
            Parts::Month(y, m) => format!("{}-{:04}-{:02}", tag, y, m),
            Parts::Quarter(y, q) => format!("{}-{:04}-Q{}", tag, y, q),
            Parts::Year(y) => format!("{}-{:04}", tag, y),
            Parts::Unbounded => format!("{}-unbounded", tag),
        }
    }
}

impl ReportingPeriod {
    pub fn to_sortable_string(&self) -> String {
        format!(
            "{},{}",
            self.start().to_sortable_string(),
            self.end().to_sortable_string()
        )
    }

    /// Parses `"{start},{end}"`. Each side must be a non-blank sortable
    /// string, and the pair must make a valid period.
    pub fn from_sortable_string(text: &str) -> qm::Result<ReportingPeriod> {
        let tokens: Vec<&str> = text.split(',').collect();
        if tokens.len() != 2 {
            return Err(qm::Error::new(
                qm::ErrorKind::UnrecognizedFormat,
                &format!("'{}' is not two units of time separated by a comma", text),
            ));
        }
        if tokens.iter().any(|token| token.trim().is_empty()) {
            return Err(qm::Error::new(
                qm::ErrorKind::MalformedValue,
                &format!("'{}' has a blank start or end", text),
            ));
        }
        let start = parse_unit_of_time(tokens[0])?;
        let end = parse_unit_of_time(tokens[1])?;
        ReportingPeriod::new(start, end).map_err(|e| e.with_kind(qm::ErrorKind::MalformedValue))
    }
}

impl Serialize for UnitOfTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_sortable_string())
    }
}

impl<'de> Deserialize<'de> for UnitOfTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<UnitOfTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        deserialize_from_sortable_string(&text).map_err(D::Error::custom)
    }
}

macro_rules! sortable_string_serde {
    ($($name:ident),*) => {
        $(
            impl Serialize for $name {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&UnitOfTime::from(*self).to_sortable_string())
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<$name, D::Error> {
                    let text = String::deserialize(deserializer)?;
                    deserialize_from_sortable_string::<$name>(&text).map_err(D::Error::custom)
                }
            }
        )*
    };
}

sortable_string_serde!(
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

impl Serialize for ReportingPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_sortable_string())
    }
}

impl<'de> Deserialize<'de> for ReportingPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<ReportingPeriod, D::Error> {
        let text = String::deserialize(deserializer)?;
        ReportingPeriod::from_sortable_string(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::components::{MonthNumber, QuarterNumber};

    fn parse(text: &str) -> qm::Result<UnitOfTime> {
        deserialize_from_sortable_string::<UnitOfTime>(text)
    }

    #[test]
    fn serialized_forms() {
        let cases: Vec<(UnitOfTime, &str)> = vec![
            (CalendarDay::new(2017, MonthOfYear::March, 5).unwrap().into(), "c-2017-03-05"),
            (CalendarMonth::new(2017, MonthOfYear::November).unwrap().into(), "c-2017-11"),
            (CalendarQuarter::new(2017, QuarterNumber::Q3).unwrap().into(), "c-2017-Q3"),
            (CalendarYear::new(17).unwrap().into(), "c-0017"),
            (FiscalMonth::new(2017, MonthNumber::Twelve).unwrap().into(), "f-2017-12"),
            (FiscalQuarter::new(2017, QuarterNumber::Q1).unwrap().into(), "f-2017-Q1"),
            (FiscalYear::new(2017).unwrap().into(), "f-2017"),
            (GenericMonth::new(1, MonthNumber::One).unwrap().into(), "g-0001-01"),
            (GenericQuarter::new(9999, QuarterNumber::Q4).unwrap().into(), "g-9999-Q4"),
            (GenericYear::new(2017).unwrap().into(), "g-2017"),
            (UnitOfTime::unbounded(UnitOfTimeKind::Calendar), "c-unbounded"),
            (UnitOfTime::unbounded(UnitOfTimeKind::Fiscal), "f-unbounded"),
            (UnitOfTime::unbounded(UnitOfTimeKind::Generic), "g-unbounded"),
        ];
        for (unit, text) in cases {
            assert_eq!(unit.to_sortable_string(), text);
            assert_eq!(parse(text).unwrap(), unit, "parsing {}", text);
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse("c-2017-13").unwrap_err().kind(), qm::ErrorKind::MalformedValue);
        assert_eq!(parse("x-2017").unwrap_err().kind(), qm::ErrorKind::UnrecognizedFormat);
        assert_eq!(parse("c-0000").unwrap_err().kind(), qm::ErrorKind::MalformedValue);
        assert_eq!(parse("f-2017-Q5").unwrap_err().kind(), qm::ErrorKind::MalformedValue);
        assert_eq!(parse("c-2017-02-30").unwrap_err().kind(), qm::ErrorKind::MalformedValue);
        assert_eq!(parse("f-2017-02-03").unwrap_err().kind(), qm::ErrorKind::UnrecognizedFormat);
        assert_eq!(parse(" c-2017").unwrap_err().kind(), qm::ErrorKind::UnrecognizedFormat);
        assert_eq!(parse("c-2017\n").unwrap_err().kind(), qm::ErrorKind::UnrecognizedFormat);
        assert_eq!(parse("C-2017").unwrap_err().kind(), qm::ErrorKind::UnrecognizedFormat);
        assert_eq!(parse("c-Unbounded").unwrap_err().kind(), qm::ErrorKind::UnrecognizedFormat);
        assert_eq!(parse("").unwrap_err().kind(), qm::ErrorKind::UnrecognizedFormat);
    }

    #[test]
    fn narrows_to_requested_type() {
        let month: CalendarMonth = deserialize_from_sortable_string("c-2017-11").unwrap();
        assert_eq!(month, CalendarMonth::new(2017, MonthOfYear::November).unwrap());
        let err = deserialize_from_sortable_string::<FiscalMonth>("c-2017-11").unwrap_err();
        assert_eq!(err.kind(), qm::ErrorKind::TypeMismatch);
        let err = deserialize_from_sortable_string::<CalendarYear>("c-2017-11").unwrap_err();
        assert_eq!(err.kind(), qm::ErrorKind::TypeMismatch);
    }

    #[test]
    fn period_strings() {
        let period = ReportingPeriod::from_sortable_string("c-2017-Q1,c-2017-Q3").unwrap();
        assert_eq!(period.to_sortable_string(), "c-2017-Q1,c-2017-Q3");
        let open = ReportingPeriod::from_sortable_string("g-unbounded,g-2017").unwrap();
        assert!(open.has_component_with_unbounded_granularity());

        let kind = |text: &str| ReportingPeriod::from_sortable_string(text).unwrap_err().kind();
        assert_eq!(kind("c-2017"), qm::ErrorKind::UnrecognizedFormat);
        assert_eq!(kind("c-2017,c-2018,c-2019"), qm::ErrorKind::UnrecognizedFormat);
        assert_eq!(kind("c-2017, "), qm::ErrorKind::MalformedValue);
        assert_eq!(kind(",c-2017"), qm::ErrorKind::MalformedValue);
        assert_eq!(kind("c-2018,c-2017"), qm::ErrorKind::MalformedValue);
        assert_eq!(kind("c-2017,f-2018"), qm::ErrorKind::MalformedValue);
        assert_eq!(kind("c-2017,c-2017-13"), qm::ErrorKind::MalformedValue);
    }

    #[test]
    fn serde_uses_sortable_strings() {
        let unit: UnitOfTime = FiscalQuarter::new(2017, QuarterNumber::Q2).unwrap().into();
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, "\"f-2017-Q2\"");
        assert_eq!(serde_json::from_str::<UnitOfTime>(&json).unwrap(), unit);

        let year = CalendarYear::new(2017).unwrap();
        assert_eq!(serde_json::to_string(&year).unwrap(), "\"c-2017\"");
        assert!(serde_json::from_str::<CalendarYear>("\"c-2017-01\"").is_err());

        let period = ReportingPeriod::from_sortable_string("c-2017-01-01,c-unbounded").unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"c-2017-01-01,c-unbounded\"");
        assert_eq!(serde_json::from_str::<ReportingPeriod>(&json).unwrap(), period);
        assert!(serde_json::from_str::<ReportingPeriod>("\"c-2017-13,c-2018\"").is_err());
    }
}
