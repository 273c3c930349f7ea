use crate::core::qm;
use derive_more::Display;

/// The size of a unit of time. Granularities are totally ordered by
/// fineness: a day is the most granular, unbounded the least. The `Invalid`
/// sentinel never appears in a valid value and takes part in no comparison.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfTimeGranularity {
    Invalid,
    Day,
    Month,
    Quarter,
    Year,
    Unbounded,
}

impl UnitOfTimeGranularity {
    /// Position in the lattice, finest first.
    fn rank(self) -> qm::Result<u8> {
        match self {
            UnitOfTimeGranularity::Invalid => Err(qm::Error::invalid_enum("granularity")),
            UnitOfTimeGranularity::Day => Ok(1),
            UnitOfTimeGranularity::Month => Ok(2),
            UnitOfTimeGranularity::Quarter => Ok(3),
            UnitOfTimeGranularity::Year => Ok(4),
            UnitOfTimeGranularity::Unbounded => Ok(5),
        }
    }

    pub fn validate(self) -> qm::Result<UnitOfTimeGranularity> {
        self.rank().map(|_| self)
    }

    pub fn is_more_granular_than(self, other: UnitOfTimeGranularity) -> qm::Result<bool> {
        Ok(self.rank()? < other.rank()?)
    }

    pub fn is_as_or_more_granular_than(self, other: UnitOfTimeGranularity) -> qm::Result<bool> {
        Ok(self.rank()? <= other.rank()?)
    }

    pub fn is_less_granular_than(self, other: UnitOfTimeGranularity) -> qm::Result<bool> {
        Ok(self.rank()? > other.rank()?)
    }

    pub fn is_as_or_less_granular_than(self, other: UnitOfTimeGranularity) -> qm::Result<bool> {
        Ok(self.rank()? >= other.rank()?)
    }

    /// The next coarser granularity: Day to Month to Quarter to Year to
    /// Unbounded. There is nothing coarser than Unbounded.
    pub fn one_notch_less_granular(self) -> qm::Result<UnitOfTimeGranularity> {
        match self {
            UnitOfTimeGranularity::Invalid => Err(qm::Error::invalid_enum("granularity")),
            UnitOfTimeGranularity::Day => Ok(UnitOfTimeGranularity::Month),
            UnitOfTimeGranularity::Month => Ok(UnitOfTimeGranularity::Quarter),
            UnitOfTimeGranularity::Quarter => Ok(UnitOfTimeGranularity::Year),
            UnitOfTimeGranularity::Year => Ok(UnitOfTimeGranularity::Unbounded),
            UnitOfTimeGranularity::Unbounded => Err(qm::Error::new(
                qm::ErrorKind::NotSupported,
                "there is no granularity less granular than Unbounded",
            )),
        }
    }

    /// The next finer granularity. Nothing is finer than Day; Unbounded has
    /// no single finer notch because it is not made of bounded units.
    pub fn one_notch_more_granular(self) -> qm::Result<UnitOfTimeGranularity> {
        match self {
            UnitOfTimeGranularity::Invalid => Err(qm::Error::invalid_enum("granularity")),
            UnitOfTimeGranularity::Year => Ok(UnitOfTimeGranularity::Quarter),
            UnitOfTimeGranularity::Quarter => Ok(UnitOfTimeGranularity::Month),
            UnitOfTimeGranularity::Month => Ok(UnitOfTimeGranularity::Day),
            UnitOfTimeGranularity::Day => Err(qm::Error::new(
                qm::ErrorKind::NotSupported,
                "there is no granularity more granular than Day",
            )),
            UnitOfTimeGranularity::Unbounded => Err(qm::Error::new(
                qm::ErrorKind::CannotAdjustUnbounded,
                "Unbounded cannot be broken into finer units",
            )),
        }
    }
}

/// The interpretive context of a unit of time. Calendar time is aligned to
/// the Gregorian calendar, fiscal time to a company's fiscal year, generic
/// time to no particular context.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfTimeKind {
    Calendar,
    Fiscal,
    Generic,
}

impl UnitOfTimeKind {
    /// The finest granularity this kind supports. Only calendar time knows
    /// about days.
    pub fn most_granular(self) -> UnitOfTimeGranularity {
        match self {
            UnitOfTimeKind::Calendar => UnitOfTimeGranularity::Day,
            UnitOfTimeKind::Fiscal | UnitOfTimeKind::Generic => UnitOfTimeGranularity::Month,
        }
    }

    /// The one-letter tag that prefixes every sortable string of this kind.
    pub fn tag(self) -> char {
        match self {
            UnitOfTimeKind::Calendar => 'c',
            UnitOfTimeKind::Fiscal => 'f',
            UnitOfTimeKind::Generic => 'g',
        }
    }

    /// Fails with `NotSupported` if this kind cannot express the granularity.
    pub fn supports(self, granularity: UnitOfTimeGranularity) -> qm::Result<()> {
        if granularity.is_more_granular_than(self.most_granular())? {
            return Err(qm::Error::new(
                qm::ErrorKind::NotSupported,
                &format!("{} time has no {} granularity", self, granularity),
            ));
        }
        Ok(())
    }

    pub(crate) fn check_same(self, other: UnitOfTimeKind) -> qm::Result<()> {
        if self != other {
            return Err(qm::Error::new(
                qm::ErrorKind::KindMismatch,
                &format!("expected {} time but got {} time", self, other),
            ));
        }
        Ok(())
    }
}

/// A kind and a granularity with no data, such as "calendar quarter". Used
/// to classify units of time and reporting periods independently of the
/// values inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    kind: UnitOfTimeKind,
    granularity: UnitOfTimeGranularity,
}

impl Unit {
    pub fn new(kind: UnitOfTimeKind, granularity: UnitOfTimeGranularity) -> qm::Result<Unit> {
        granularity.validate()?;
        kind.supports(granularity)?;
        Ok(Unit { kind, granularity })
    }

    /// For pairs already known to be valid, such as those read off a unit
    /// of time.
    pub(crate) fn of(kind: UnitOfTimeKind, granularity: UnitOfTimeGranularity) -> Unit {
        Unit { kind, granularity }
    }

    pub fn kind(&self) -> UnitOfTimeKind {
        self.kind
    }

    pub fn granularity(&self) -> UnitOfTimeGranularity {
        self.granularity
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.granularity)
    }
}
