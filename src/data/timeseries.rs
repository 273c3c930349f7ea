use crate::core::qm;
use crate::dates::reportingperiod::ReportingPeriod;
use crate::dates::unitoftime::UnitOfTime;
use derive_more::Display;

/// How a query period is compared with the periods of a timeseries.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportingPeriodComparisonMethod {
    Invalid,
    /// The datapoint's period covers exactly the same time as the query,
    /// whatever granularity either is written in.
    #[default]
    IsEqualToIgnoringGranularity,
    /// The datapoint's period lies within the query.
    Contains,
}

/// A value reported for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datapoint<T> {
    reporting_period: ReportingPeriod,
    value: T,
}

impl<T> Datapoint<T> {
    pub fn new(reporting_period: ReportingPeriod, value: T) -> Datapoint<T> {
        Datapoint { reporting_period, value }
    }

    pub fn reporting_period(&self) -> &ReportingPeriod {
        &self.reporting_period
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Datapoints in the order they were added. Gaps, overlaps and mixed kinds
/// are all allowed; `is_contiguous` and `has_overlapping_reporting_periods`
/// let callers reject them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeseries<T> {
    datapoints: Vec<Datapoint<T>>,
}

impl<T> Timeseries<T> {
    pub fn new(datapoints: Vec<Datapoint<T>>) -> Timeseries<T> {
        Timeseries { datapoints }
    }

    pub fn push(&mut self, datapoint: Datapoint<T>) {
        self.datapoints.push(datapoint);
    }

    pub fn datapoints(&self) -> &[Datapoint<T>] {
        &self.datapoints
    }

    pub fn len(&self) -> usize {
        self.datapoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datapoints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Datapoint<T>> {
        self.datapoints.iter()
    }

    pub fn reporting_periods(&self) -> Vec<ReportingPeriod> {
        self.datapoints.iter().map(|d| d.reporting_period).collect()
    }

    /// The datapoints that match the query period. Datapoints of a
    /// different kind from the query never match.
    ///
    /// An equality match finds at most one datapoint; two datapoints
    /// covering the same time make the query ambiguous, which is an error.
    /// A containment match finds every datapoint inside the query, in the
    /// order of the series.
    pub fn get_matching_datapoints(
        &self,
        period: &ReportingPeriod,
        comparison: ReportingPeriodComparisonMethod,
    ) -> qm::Result<Vec<&Datapoint<T>>> {
        let same_kind = self
            .datapoints
            .iter()
            .filter(|d| d.reporting_period.kind() == period.kind());

        match comparison {
            ReportingPeriodComparisonMethod::IsEqualToIgnoringGranularity => {
                let target = period.to_most_granular()?;
                let mut matches = Vec::new();
                for datapoint in same_kind {
                    if datapoint.reporting_period.to_most_granular()? == target {
                        matches.push(datapoint);
                    }
                }
                if matches.len() > 1 {
                    return Err(qm::Error::new(
                        qm::ErrorKind::InvalidArgument,
                        &format!("{} datapoints are reported for {}", matches.len(), period),
                    ));
                }
                Ok(matches)
            }
            ReportingPeriodComparisonMethod::Contains => {
                let mut matches = Vec::new();
                for datapoint in same_kind {
                    if period.contains_period(&datapoint.reporting_period)? {
                        matches.push(datapoint);
                    }
                }
                Ok(matches)
            }
            ReportingPeriodComparisonMethod::Invalid => Err(qm::Error::new(
                qm::ErrorKind::NotSupported,
                &format!("comparison method {} is not supported", comparison),
            )),
        }
    }

    /// The one datapoint matching the query. Fails unless exactly one does.
    pub fn get_datapoint(
        &self,
        period: &ReportingPeriod,
        comparison: ReportingPeriodComparisonMethod,
    ) -> qm::Result<&Datapoint<T>> {
        let mut matches = self.get_matching_datapoints(period, comparison)?;
        match matches.len() {
            1 => Ok(matches.remove(0)),
            n => Err(qm::Error::new(
                qm::ErrorKind::InvalidArgument,
                &format!("expected one datapoint for {} but found {}", period, n),
            )),
        }
    }

    /// True if any two datapoints of the same kind share some time.
    pub fn has_overlapping_reporting_periods(&self) -> qm::Result<bool> {
        let periods = self.reporting_periods();
        for (i, a) in periods.iter().enumerate() {
            for b in &periods[i + 1..] {
                if a.kind() == b.kind() && a.has_overlap_with(b)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// True if the periods, taken in chronological order, each start right
    /// after the previous one ends. All periods must be of the same kind.
    /// An empty series or a single datapoint is contiguous.
    pub fn is_contiguous(&self) -> qm::Result<bool> {
        let mut periods: Vec<ReportingPeriod> = Vec::with_capacity(self.datapoints.len());
        for datapoint in &self.datapoints {
            let period = &datapoint.reporting_period;
            if let Some(first) = periods.first() {
                first.kind().check_same(period.kind())?;
            }
            periods.push(period.to_most_granular()?);
        }
        // sortable strings order chronologically within a variant, and
        // every bounded start is now of the same variant
        periods.sort_by_key(|p| start_key(p.start()));
        for pair in periods.windows(2) {
            if !pair[1].is_greater_than_and_adjacent_to(&pair[0])? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn start_key(start: &UnitOfTime) -> (bool, String) {
    if start.is_bounded() {
        (true, start.to_sortable_string())
    } else {
        (false, String::new())
    }
}

impl<T> Default for Timeseries<T> {
    fn default() -> Timeseries<T> {
        Timeseries::new(Vec::new())
    }
}

impl<T> std::iter::FromIterator<Datapoint<T>> for Timeseries<T> {
    fn from_iter<I: IntoIterator<Item = Datapoint<T>>>(iter: I) -> Timeseries<T> {
        Timeseries::new(iter.into_iter().collect())
    }
}
