use crate::core::qm;

/// A month of the Gregorian calendar. Only calendar months carry a month of
/// year; fiscal and generic months are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MonthOfYear {
    Invalid,
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS_OF_YEAR: [MonthOfYear; 12] = [
    MonthOfYear::January,
    MonthOfYear::February,
    MonthOfYear::March,
    MonthOfYear::April,
    MonthOfYear::May,
    MonthOfYear::June,
    MonthOfYear::July,
    MonthOfYear::August,
    MonthOfYear::September,
    MonthOfYear::October,
    MonthOfYear::November,
    MonthOfYear::December,
];

impl MonthOfYear {
    /// One-based month number, January being 1.
    pub fn number(self) -> qm::Result<u32> {
        if self == MonthOfYear::Invalid {
            return Err(qm::Error::invalid_enum("month of year"));
        }
        Ok(self as u32)
    }

    pub fn from_number(number: u32) -> qm::Result<MonthOfYear> {
        if number < 1 || number > 12 {
            return Err(qm::Error::out_of_range("month of year", number, 1, 12));
        }
        Ok(MONTHS_OF_YEAR[number as usize - 1])
    }

    pub(crate) fn from_month0(month0: u32) -> MonthOfYear {
        MONTHS_OF_YEAR[month0 as usize % 12]
    }

    pub fn to_month_number(self) -> qm::Result<MonthNumber> {
        MonthNumber::from_number(self.number()?)
    }
}

/// The position of a month within a fiscal or generic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MonthNumber {
    Invalid,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
}

const MONTH_NUMBERS: [MonthNumber; 12] = [
    MonthNumber::One,
    MonthNumber::Two,
    MonthNumber::Three,
    MonthNumber::Four,
    MonthNumber::Five,
    MonthNumber::Six,
    MonthNumber::Seven,
    MonthNumber::Eight,
    MonthNumber::Nine,
    MonthNumber::Ten,
    MonthNumber::Eleven,
    MonthNumber::Twelve,
];

impl MonthNumber {
    pub fn number(self) -> qm::Result<u32> {
        if self == MonthNumber::Invalid {
            return Err(qm::Error::invalid_enum("month number"));
        }
        Ok(self as u32)
    }

    pub fn from_number(number: u32) -> qm::Result<MonthNumber> {
        if number < 1 || number > 12 {
            return Err(qm::Error::out_of_range("month number", number, 1, 12));
        }
        Ok(MONTH_NUMBERS[number as usize - 1])
    }

    pub(crate) fn from_month0(month0: u32) -> MonthNumber {
        MONTH_NUMBERS[month0 as usize % 12]
    }

    pub fn to_month_of_year(self) -> qm::Result<MonthOfYear> {
        MonthOfYear::from_number(self.number()?)
    }
}

/// A quarter of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuarterNumber {
    Invalid,
    Q1,
    Q2,
    Q3,
    Q4,
}

const QUARTER_NUMBERS: [QuarterNumber; 4] = [
    QuarterNumber::Q1,
    QuarterNumber::Q2,
    QuarterNumber::Q3,
    QuarterNumber::Q4,
];

impl QuarterNumber {
    pub fn number(self) -> qm::Result<u32> {
        if self == QuarterNumber::Invalid {
            return Err(qm::Error::invalid_enum("quarter number"));
        }
        Ok(self as u32)
    }

    pub fn from_number(number: u32) -> qm::Result<QuarterNumber> {
        if number < 1 || number > 4 {
            return Err(qm::Error::out_of_range("quarter number", number, 1, 4));
        }
        Ok(QUARTER_NUMBERS[number as usize - 1])
    }

    /// The quarter that contains the given one-based month number.
    pub fn containing_month(month: u32) -> qm::Result<QuarterNumber> {
        if month < 1 || month > 12 {
            return Err(qm::Error::out_of_range("month", month, 1, 12));
        }
        QuarterNumber::from_number((month - 1) / 3 + 1)
    }

    /// One-based numbers of the first and last month in this quarter.
    pub fn month_range(self) -> qm::Result<(u32, u32)> {
        let q = self.number()?;
        Ok((3 * q - 2, 3 * q))
    }
}

/// English ordinal suffix, as in "1st month of FY2017".
pub(crate) fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
