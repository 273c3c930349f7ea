use crate::core::qm;
use crate::dates::granularity::{Unit, UnitOfTimeGranularity, UnitOfTimeKind};
use crate::dates::unitoftime::UnitOfTime;
use std::cmp::Ordering;
use std::fmt;

/// What to do with coarser units that a period only partly covers when it
/// is split into units less granular than its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverflowStrategy {
    /// Fail with an `Overflow` error if the period's boundaries do not line
    /// up with the coarser units.
    ThrowOnOverflow,
    /// Drop the partly covered units at either edge. This may leave nothing.
    DiscardOverflow,
}

/// Which end of a period an adjustment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportingPeriodComponent {
    Start,
    End,
    Both,
}

/// A closed interval of units of time of the same kind. Either side may be
/// unbounded. Bounded sides share a granularity, and the start is never
/// after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportingPeriod {
    start: UnitOfTime,
    end: UnitOfTime,
}

impl ReportingPeriod {
    pub fn new(start: UnitOfTime, end: UnitOfTime) -> qm::Result<ReportingPeriod> {
        start.kind().check_same(end.kind())?;
        if start.is_bounded() && end.is_bounded() {
            if start.granularity() != end.granularity() {
                return Err(qm::Error::new(
                    qm::ErrorKind::GranularityMismatch,
                    &format!(
                        "start is a {} but end is a {}",
                        start.unit(),
                        end.unit()
                    ),
                ));
            }
            if start.try_cmp(&end)? == Ordering::Greater {
                return Err(qm::Error::new(
                    qm::ErrorKind::InvalidArgument,
                    &format!("start {} is after end {}", start, end),
                ));
            }
        }
        Ok(ReportingPeriod { start, end })
    }

    pub fn start(&self) -> &UnitOfTime {
        &self.start
    }

    pub fn end(&self) -> &UnitOfTime {
        &self.end
    }

    pub fn kind(&self) -> UnitOfTimeKind {
        self.start.kind()
    }

    pub fn has_component_with_unbounded_granularity(&self) -> bool {
        !self.start.is_bounded() || !self.end.is_bounded()
    }

    pub fn has_uniform_granularity(&self) -> bool {
        self.start.granularity() == self.end.granularity()
    }

    /// The granularity of both sides. Fails if they differ, which can only
    /// happen when one side is unbounded.
    pub fn granularity(&self) -> qm::Result<UnitOfTimeGranularity> {
        if !self.has_uniform_granularity() {
            return Err(qm::Error::new(
                qm::ErrorKind::GranularityMismatch,
                &format!(
                    "period {} has a {} start and a {} end",
                    self,
                    self.start.granularity(),
                    self.end.granularity()
                ),
            ));
        }
        Ok(self.start.granularity())
    }

    pub fn unit(&self) -> qm::Result<Unit> {
        Unit::new(self.kind(), self.granularity()?)
    }

    fn check_bounded(&self, kind: qm::ErrorKind) -> qm::Result<()> {
        if self.has_component_with_unbounded_granularity() {
            return Err(qm::Error::new(
                kind,
                &format!("period {} has an unbounded component", self),
            ));
        }
        Ok(())
    }

    /// The same span in the finest granularity of the kind. Unbounded sides
    /// stay unbounded.
    pub fn to_most_granular(&self) -> qm::Result<ReportingPeriod> {
        let start = if self.start.is_bounded() {
            self.start.first_most_granular()?
        } else {
            self.start
        };
        let end = if self.end.is_bounded() {
            self.end.last_most_granular()?
        } else {
            self.end
        };
        ReportingPeriod::new(start, end)
    }

    /// Widens the period one notch at a time for as long as its boundaries
    /// line up with the coarser units. Never fails for misalignment; a
    /// period with an unbounded side is returned as it is.
    pub fn to_least_granular(&self) -> qm::Result<ReportingPeriod> {
        if self.has_component_with_unbounded_granularity() {
            return Ok(*self);
        }
        let mut period = *self;
        loop {
            let next = period.granularity()?.one_notch_less_granular()?;
            if next == UnitOfTimeGranularity::Unbounded {
                break;
            }
            match period.make_less_granular(next, true) {
                Ok(wider) => period = wider,
                Err(ref e) if e.kind() == qm::ErrorKind::Overflow => break,
                Err(e) => return Err(e),
            }
        }
        Ok(period)
    }

    /// Does this period cover all of the other? An unbounded side of this
    /// period covers anything on that side.
    pub fn contains_period(&self, other: &ReportingPeriod) -> qm::Result<bool> {
        self.kind().check_same(other.kind())?;
        let outer = self.to_most_granular()?;
        let inner = other.to_most_granular()?;

        let start_covered = if !outer.start.is_bounded() {
            true
        } else if !inner.start.is_bounded() {
            false
        } else {
            outer.start.try_cmp(&inner.start)? != Ordering::Greater
        };
        let end_covered = if !outer.end.is_bounded() {
            true
        } else if !inner.end.is_bounded() {
            false
        } else {
            outer.end.try_cmp(&inner.end)? != Ordering::Less
        };
        Ok(start_covered && end_covered)
    }

    /// Does this period cover all of the given unit? An unbounded unit is
    /// only covered by a period that is unbounded on both sides.
    pub fn contains(&self, unit: &UnitOfTime) -> qm::Result<bool> {
        self.contains_period(&unit.to_most_granular()?)
    }

    /// True if the periods share any time. Both are first brought to their
    /// finest granularity, so endpoint containment is exact.
    pub fn has_overlap_with(&self, other: &ReportingPeriod) -> qm::Result<bool> {
        self.kind().check_same(other.kind())?;
        let a = self.to_most_granular()?;
        let b = other.to_most_granular()?;
        Ok(a.contains(&b.start)?
            || a.contains(&b.end)?
            || b.contains(&a.start)?
            || b.contains(&a.end)?)
    }

    /// True if this period starts immediately after the other ends, with no
    /// gap and no overlap.
    pub fn is_greater_than_and_adjacent_to(&self, other: &ReportingPeriod) -> qm::Result<bool> {
        self.kind().check_same(other.kind())?;
        if !self.start.is_bounded() || !other.end.is_bounded() {
            return Ok(false);
        }
        let start = self.start.first_most_granular()?;
        let end = other.end.last_most_granular()?;
        // the very first representable unit has nothing before it
        Ok(start.plus(-1).map(|before| before == end).unwrap_or(false))
    }

    /// Equal once both sides are brought to their finest granularity, so
    /// that CY2017 equals the period from Q1 2017 to Q4 2017.
    pub fn is_equal_to_ignoring_granularity(&self, other: &ReportingPeriod) -> qm::Result<bool> {
        self.kind().check_same(other.kind())?;
        Ok(self.to_most_granular()? == other.to_most_granular()?)
    }

    /// Every unit from start to end inclusive, in the period's own
    /// granularity.
    pub fn units_of_time_within(&self) -> qm::Result<Vec<UnitOfTime>> {
        self.check_bounded(qm::ErrorKind::CannotEnumerateUnbounded)?;
        let mut units = Vec::new();
        let mut unit = self.start;
        loop {
            units.push(unit);
            if unit == self.end {
                break;
            }
            unit = unit.plus(1)?;
        }
        Ok(units)
    }

    /// Re-expresses the period in a strictly finer granularity, one notch at
    /// a time: the start moves to its first sub-unit and the end to its last.
    pub fn make_more_granular(&self, granularity: UnitOfTimeGranularity) -> qm::Result<ReportingPeriod> {
        granularity.validate()?;
        self.check_bounded(qm::ErrorKind::CannotAdjustUnbounded)?;
        let current = self.granularity()?;
        if !granularity.is_more_granular_than(current)? {
            return Err(qm::Error::new(
                qm::ErrorKind::IncompatibleGranularity,
                &format!("{} is not more granular than {}", granularity, current),
            ));
        }
        self.kind().supports(granularity)?;

        let mut start = self.start;
        let mut end = self.end;
        while start.granularity() != granularity {
            start = start.first_sub_unit()?;
            end = end.last_sub_unit()?;
        }
        ReportingPeriod::new(start, end)
    }

    /// Re-expresses the period in a strictly coarser bounded granularity.
    /// At each notch the start must be the first sub-unit and the end the
    /// last sub-unit of their coarser units. If `throw_on_misalignment` is
    /// false, misaligned boundaries are widened to the coarser units that
    /// contain them instead of failing with `Overflow`.
    pub fn make_less_granular(
        &self,
        granularity: UnitOfTimeGranularity,
        throw_on_misalignment: bool,
    ) -> qm::Result<ReportingPeriod> {
        granularity.validate()?;
        self.check_bounded(qm::ErrorKind::CannotAdjustUnbounded)?;
        let current = self.granularity()?;
        if !granularity.is_less_granular_than(current)? {
            return Err(qm::Error::new(
                qm::ErrorKind::IncompatibleGranularity,
                &format!("{} is not less granular than {}", granularity, current),
            ));
        }
        if granularity == UnitOfTimeGranularity::Unbounded {
            return Err(qm::Error::new(
                qm::ErrorKind::NotSupported,
                "a bounded period cannot be made unbounded",
            ));
        }

        let mut start = self.start;
        let mut end = self.end;
        while start.granularity() != granularity {
            let wider_start = start.containing_unit()?;
            let wider_end = end.containing_unit()?;
            let aligned =
                wider_start.first_sub_unit()? == start && wider_end.last_sub_unit()? == end;
            if !aligned {
                if throw_on_misalignment {
                    return Err(qm::Error::new(
                        qm::ErrorKind::Overflow,
                        &format!(
                            "{} to {} does not line up with {} to {}",
                            start, end, wider_start, wider_end
                        ),
                    ));
                }
                trace!(%start, %end, %wider_start, %wider_end, "widening misaligned boundaries");
            }
            start = wider_start;
            end = wider_end;
        }
        ReportingPeriod::new(start, end)
    }

    /// The units of the given granularity that cover this period. Finer
    /// splits always cover the period exactly. Coarser splits either fail on
    /// misalignment or drop the partly covered edge units, depending on the
    /// overflow strategy.
    pub fn split(
        &self,
        granularity: UnitOfTimeGranularity,
        overflow_strategy: OverflowStrategy,
    ) -> qm::Result<Vec<UnitOfTime>> {
        granularity.validate()?;
        self.check_bounded(qm::ErrorKind::CannotEnumerateUnbounded)?;
        let current = self.granularity()?;

        if granularity == current {
            return self.units_of_time_within();
        }
        if granularity.is_more_granular_than(current)? {
            return self.make_more_granular(granularity)?.units_of_time_within();
        }

        match overflow_strategy {
            OverflowStrategy::ThrowOnOverflow => self
                .make_less_granular(granularity, true)?
                .units_of_time_within(),
            OverflowStrategy::DiscardOverflow => {
                let candidates = self
                    .make_less_granular(granularity, false)?
                    .units_of_time_within()?;
                let total = candidates.len();
                let mut kept = Vec::with_capacity(total);
                for unit in candidates {
                    if self.contains(&unit)? {
                        kept.push(unit);
                    }
                }
                if kept.len() != total {
                    debug!(
                        %granularity,
                        candidates = total,
                        kept = kept.len(),
                        "discarded partly covered units when splitting {}",
                        self
                    );
                }
                Ok(kept)
            }
        }
    }

    /// Every contiguous run of one to `max_units` units within the period,
    /// ordered by starting unit and then by length.
    pub fn create_permutations(&self, max_units: usize) -> qm::Result<Vec<ReportingPeriod>> {
        if max_units < 1 {
            return Err(qm::Error::new(
                qm::ErrorKind::OutOfRange,
                &format!("max_units is {}, which is less than 1", max_units),
            ));
        }
        let units = self.units_of_time_within()?;
        let mut permutations = Vec::new();
        for i in 0..units.len() {
            for len in 1..=max_units {
                let last = i + len - 1;
                if last >= units.len() {
                    break;
                }
                permutations.push(ReportingPeriod::new(units[i], units[last])?);
            }
        }
        Ok(permutations)
    }

    /// A copy of this period with the chosen end (or both) moved by `delta`
    /// units of the given granularity. Fails if the result would start after
    /// it ends.
    pub fn clone_with_adjustment(
        &self,
        component: ReportingPeriodComponent,
        delta: i32,
        granularity: UnitOfTimeGranularity,
    ) -> qm::Result<ReportingPeriod> {
        let start = match component {
            ReportingPeriodComponent::Start | ReportingPeriodComponent::Both => {
                self.start.plus_granularity(delta, granularity)?
            }
            ReportingPeriodComponent::End => self.start,
        };
        let end = match component {
            ReportingPeriodComponent::End | ReportingPeriodComponent::Both => {
                self.end.plus_granularity(delta, granularity)?
            }
            ReportingPeriodComponent::Start => self.end,
        };
        ReportingPeriod::new(start, end)
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::components::MonthOfYear::*;
    use crate::dates::components::{MonthNumber, MonthOfYear, QuarterNumber};
    use crate::dates::unitoftime::*;
    use crate::dates::granularity::UnitOfTimeGranularity as G;

    fn day(y: i32, m: MonthOfYear, d: u32) -> UnitOfTime {
        UnitOfTime::from(CalendarDay::new(y, m, d).unwrap())
    }

    fn month(y: i32, m: MonthOfYear) -> UnitOfTime {
        UnitOfTime::from(CalendarMonth::new(y, m).unwrap())
    }

    fn quarter(y: i32, q: QuarterNumber) -> UnitOfTime {
        UnitOfTime::from(CalendarQuarter::new(y, q).unwrap())
    }

    fn year(y: i32) -> UnitOfTime {
        UnitOfTime::from(CalendarYear::new(y).unwrap())
    }

    fn period(start: UnitOfTime, end: UnitOfTime) -> ReportingPeriod {
        ReportingPeriod::new(start, end).unwrap()
    }

    fn unbounded() -> UnitOfTime {
        UnitOfTimeKind::Calendar.unbounded()
    }

    #[test]
    fn construction_rules() {
        assert!(ReportingPeriod::new(month(2017, March), month(2017, March)).is_ok());
        assert_eq!(
            ReportingPeriod::new(month(2017, April), month(2017, March)).unwrap_err().kind(),
            qm::ErrorKind::InvalidArgument
        );
        assert_eq!(
            ReportingPeriod::new(month(2017, April), year(2018)).unwrap_err().kind(),
            qm::ErrorKind::GranularityMismatch
        );
        let fiscal = UnitOfTime::from(FiscalYear::new(2017).unwrap());
        assert_eq!(
            ReportingPeriod::new(year(2017), fiscal).unwrap_err().kind(),
            qm::ErrorKind::KindMismatch
        );
        let open = period(unbounded(), day(2017, March, 5));
        assert!(open.has_component_with_unbounded_granularity());
        assert!(!open.has_uniform_granularity());
        assert_eq!(open.granularity().unwrap_err().kind(), qm::ErrorKind::GranularityMismatch);
        assert_eq!(open.to_string(), "unbounded to 2017-03-05");
    }

    #[test]
    fn contains_units_and_periods() {
        let p = period(quarter(2017, QuarterNumber::Q1), quarter(2017, QuarterNumber::Q3));
        assert!(p.contains(&quarter(2017, QuarterNumber::Q2)).unwrap());
        assert!(!p.contains(&quarter(2018, QuarterNumber::Q1)).unwrap());
        assert!(p.contains(&month(2017, September)).unwrap());
        assert!(!p.contains(&month(2017, October)).unwrap());
        assert!(p.contains(&day(2017, January, 1)).unwrap());
        assert!(!p.contains(&year(2017)).unwrap());
        assert!(p.contains_period(&p).unwrap());
        assert!(!p.contains(&unbounded()).unwrap());

        let open = period(unbounded(), month(2017, March));
        assert!(open.contains(&year(1900)).unwrap());
        assert!(open.contains_period(&period(unbounded(), day(2017, March, 31))).unwrap());
        assert!(!open.contains(&day(2017, April, 1)).unwrap());
        assert!(period(unbounded(), unbounded()).contains(&unbounded()).unwrap());

        let fiscal = UnitOfTime::from(FiscalYear::new(2017).unwrap());
        assert_eq!(p.contains(&fiscal).unwrap_err().kind(), qm::ErrorKind::KindMismatch);
    }

    #[test]
    fn overlap() {
        let a = period(month(2017, January), month(2017, March));
        let b = period(day(2017, March, 31), day(2017, April, 2));
        let c = period(quarter(2017, QuarterNumber::Q2), quarter(2017, QuarterNumber::Q2));
        assert!(a.has_overlap_with(&b).unwrap());
        assert!(b.has_overlap_with(&a).unwrap());
        assert!(!a.has_overlap_with(&c).unwrap());
        assert!(b.has_overlap_with(&c).unwrap());

        let wide = period(day(2017, January, 15), day(2017, June, 15));
        let inside = period(month(2017, March), month(2017, March));
        assert!(wide.has_overlap_with(&inside).unwrap());
        assert!(inside.has_overlap_with(&wide).unwrap());

        let left = period(unbounded(), year(2010));
        let right = period(year(2015), unbounded());
        assert!(!left.has_overlap_with(&right).unwrap());
        assert!(period(unbounded(), unbounded()).has_overlap_with(&right).unwrap());
    }

    #[test]
    fn adjacency() {
        let q1 = period(quarter(2017, QuarterNumber::Q1), quarter(2017, QuarterNumber::Q1));
        let april = period(month(2017, April), month(2017, May));
        assert!(april.is_greater_than_and_adjacent_to(&q1).unwrap());
        assert!(!q1.is_greater_than_and_adjacent_to(&april).unwrap());

        let may = period(month(2017, May), month(2017, May));
        assert!(!may.is_greater_than_and_adjacent_to(&q1).unwrap());

        let open = period(unbounded(), month(2017, May));
        assert!(!open.is_greater_than_and_adjacent_to(&q1).unwrap());
        let after_open = period(year(2018), year(2018));
        assert!(after_open
            .is_greater_than_and_adjacent_to(&period(unbounded(), day(2017, December, 31)))
            .unwrap());
    }

    #[test]
    fn units_within() {
        let p = period(month(2016, November), month(2017, February));
        assert_eq!(
            p.units_of_time_within().unwrap(),
            vec![
                month(2016, November),
                month(2016, December),
                month(2017, January),
                month(2017, February)
            ]
        );
        let open = period(month(2016, November), unbounded());
        assert_eq!(
            open.units_of_time_within().unwrap_err().kind(),
            qm::ErrorKind::CannotEnumerateUnbounded
        );
        let last = UnitOfTime::from(GenericYear::new(9999).unwrap());
        assert_eq!(period(last, last).units_of_time_within().unwrap(), vec![last]);
    }

    #[test]
    fn more_granular() {
        let p = period(year(2016), year(2017));
        let months = p.make_more_granular(G::Month).unwrap();
        assert_eq!(months, period(month(2016, January), month(2017, December)));
        let days = p.make_more_granular(G::Day).unwrap();
        assert_eq!(days, period(day(2016, January, 1), day(2017, December, 31)));
        assert_eq!(
            p.make_more_granular(G::Year).unwrap_err().kind(),
            qm::ErrorKind::IncompatibleGranularity
        );

        let fy = UnitOfTime::from(FiscalYear::new(2017).unwrap());
        let fiscal = period(fy, fy);
        assert_eq!(
            fiscal.make_more_granular(G::Month).unwrap(),
            period(
                UnitOfTime::from(FiscalMonth::new(2017, MonthNumber::One).unwrap()),
                UnitOfTime::from(FiscalMonth::new(2017, MonthNumber::Twelve).unwrap())
            )
        );
        assert_eq!(
            fiscal.make_more_granular(G::Day).unwrap_err().kind(),
            qm::ErrorKind::NotSupported
        );
        assert_eq!(
            period(unbounded(), year(2017)).make_more_granular(G::Month).unwrap_err().kind(),
            qm::ErrorKind::CannotAdjustUnbounded
        );
    }

    #[test]
    fn less_granular() {
        let aligned = period(month(2016, January), month(2017, December));
        assert_eq!(
            aligned.make_less_granular(G::Year, true).unwrap(),
            period(year(2016), year(2017))
        );
        assert_eq!(
            aligned.make_less_granular(G::Quarter, true).unwrap(),
            period(quarter(2016, QuarterNumber::Q1), quarter(2017, QuarterNumber::Q4))
        );

        let misaligned = period(month(2015, March), month(2017, February));
        assert_eq!(
            misaligned.make_less_granular(G::Year, true).unwrap_err().kind(),
            qm::ErrorKind::Overflow
        );
        assert_eq!(
            misaligned.make_less_granular(G::Year, false).unwrap(),
            period(year(2015), year(2017))
        );
        assert_eq!(
            aligned.make_less_granular(G::Month, true).unwrap_err().kind(),
            qm::ErrorKind::IncompatibleGranularity
        );
        assert_eq!(
            aligned.make_less_granular(G::Unbounded, true).unwrap_err().kind(),
            qm::ErrorKind::NotSupported
        );
    }

    #[test]
    fn split_by_year_with_and_without_overflow() {
        let p = period(month(2015, March), month(2017, February));
        assert_eq!(
            p.split(G::Year, OverflowStrategy::ThrowOnOverflow).unwrap_err().kind(),
            qm::ErrorKind::Overflow
        );
        assert_eq!(
            p.split(G::Year, OverflowStrategy::DiscardOverflow).unwrap(),
            vec![year(2016)]
        );
    }

    #[test]
    fn split_other_cases() {
        let short = period(month(2017, February), month(2017, April));
        assert!(short
            .split(G::Year, OverflowStrategy::DiscardOverflow)
            .unwrap()
            .is_empty());
        assert_eq!(
            short.split(G::Quarter, OverflowStrategy::DiscardOverflow).unwrap(),
            Vec::<UnitOfTime>::new()
        );

        let q = period(quarter(2017, QuarterNumber::Q4), quarter(2018, QuarterNumber::Q1));
        assert_eq!(
            q.split(G::Month, OverflowStrategy::ThrowOnOverflow).unwrap(),
            vec![
                month(2017, October),
                month(2017, November),
                month(2017, December),
                month(2018, January),
                month(2018, February),
                month(2018, March)
            ]
        );
        assert_eq!(
            q.split(G::Quarter, OverflowStrategy::ThrowOnOverflow).unwrap(),
            vec![quarter(2017, QuarterNumber::Q4), quarter(2018, QuarterNumber::Q1)]
        );
        let days = period(day(2017, January, 1), day(2017, June, 30));
        assert_eq!(
            days.split(G::Quarter, OverflowStrategy::ThrowOnOverflow).unwrap(),
            vec![quarter(2017, QuarterNumber::Q1), quarter(2017, QuarterNumber::Q2)]
        );
        assert_eq!(
            period(unbounded(), year(2017))
                .split(G::Year, OverflowStrategy::ThrowOnOverflow)
                .unwrap_err()
                .kind(),
            qm::ErrorKind::CannotEnumerateUnbounded
        );
    }

    #[test]
    fn most_and_least_granular() {
        let p = period(quarter(2017, QuarterNumber::Q1), quarter(2017, QuarterNumber::Q4));
        let most = p.to_most_granular().unwrap();
        assert_eq!(most, period(day(2017, January, 1), day(2017, December, 31)));
        assert_eq!(most.to_most_granular().unwrap(), most);
        assert_eq!(most.to_least_granular().unwrap(), period(year(2017), year(2017)));

        let q1 = period(day(2017, January, 1), day(2017, March, 31));
        assert_eq!(
            q1.to_least_granular().unwrap(),
            period(quarter(2017, QuarterNumber::Q1), quarter(2017, QuarterNumber::Q1))
        );
        let odd = period(day(2017, January, 2), day(2017, March, 31));
        assert_eq!(odd.to_least_granular().unwrap(), odd);

        let open = period(unbounded(), month(2017, December));
        assert_eq!(
            open.to_most_granular().unwrap(),
            period(unbounded(), day(2017, December, 31))
        );
        assert_eq!(open.to_least_granular().unwrap(), open);

        let by_year = period(year(2017), year(2017));
        assert!(by_year.is_equal_to_ignoring_granularity(&p).unwrap());
        assert!(!by_year.is_equal_to_ignoring_granularity(&q1).unwrap());
    }

    #[test]
    fn permutations() {
        let p = period(year(2015), year(2017));
        let perms = p.create_permutations(2).unwrap();
        assert_eq!(
            perms,
            vec![
                period(year(2015), year(2015)),
                period(year(2015), year(2016)),
                period(year(2016), year(2016)),
                period(year(2016), year(2017)),
                period(year(2017), year(2017)),
            ]
        );
        assert_eq!(p.create_permutations(10).unwrap().len(), 6);
        assert_eq!(p.create_permutations(0).unwrap_err().kind(), qm::ErrorKind::OutOfRange);
        assert!(period(unbounded(), year(2017)).create_permutations(1).is_err());
    }

    #[test]
    fn adjustments() {
        let p = period(quarter(2017, QuarterNumber::Q1), quarter(2017, QuarterNumber::Q2));
        assert_eq!(
            p.clone_with_adjustment(ReportingPeriodComponent::End, 1, G::Quarter).unwrap(),
            period(quarter(2017, QuarterNumber::Q1), quarter(2017, QuarterNumber::Q3))
        );
        assert_eq!(
            p.clone_with_adjustment(ReportingPeriodComponent::Both, 1, G::Year).unwrap(),
            period(quarter(2018, QuarterNumber::Q1), quarter(2018, QuarterNumber::Q2))
        );
        assert_eq!(
            p.clone_with_adjustment(ReportingPeriodComponent::Start, 1, G::Year)
                .unwrap_err()
                .kind(),
            qm::ErrorKind::InvalidArgument
        );
        assert_eq!(
            p.clone_with_adjustment(ReportingPeriodComponent::Start, 1, G::Month)
                .unwrap_err()
                .kind(),
            qm::ErrorKind::IncompatibleGranularity
        );
        let open = period(unbounded(), quarter(2017, QuarterNumber::Q2));
        assert_eq!(
            open.clone_with_adjustment(ReportingPeriodComponent::Both, 1, G::Quarter)
                .unwrap_err()
                .kind(),
            qm::ErrorKind::CannotAdjustUnbounded
        );
        assert_eq!(
            open.clone_with_adjustment(ReportingPeriodComponent::End, -1, G::Quarter).unwrap(),
            period(unbounded(), quarter(2017, QuarterNumber::Q1))
        );
    }
}
