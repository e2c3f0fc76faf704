//! Calendar Builder: month grids and month navigation.
//!
//! Months are 0-based throughout (0 = January, 11 = December). Weekdays are
//! numbered from Sunday (0) to Saturday (6), and the grid's first column is
//! Sunday.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::aggregate::{classify, DayClassification, DayIndex};
use crate::domain::InvalidDateError;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Proleptic Gregorian leap year: divisible by 4, except centuries not
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a 0-based month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, InvalidDateError> {
    let days = match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => return Err(InvalidDateError::Month { month: month as i64 }),
    };
    Ok(days)
}

/// Shift a 0-based `(year, month)` by `delta` months, carrying into the year.
///
/// Works for any delta, including ones spanning many years.
pub fn advance_month(year: i32, month: u32, delta: i32) -> Result<(i32, u32), InvalidDateError> {
    if month > 11 {
        return Err(InvalidDateError::Month { month: month as i64 });
    }
    let total = i64::from(year) * 12 + i64::from(month) + i64::from(delta);
    let new_year = total.div_euclid(12);
    let new_month = total.rem_euclid(12) as u32;
    let new_year = i32::try_from(new_year).map_err(|_| InvalidDateError::Year { year: new_year })?;
    Ok((new_year, new_month))
}

/// A calendar month, the only piece of navigation state a calendar view holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build a month, rejecting month indices above 11 and years chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidDateError> {
        if month > 11 {
            return Err(InvalidDateError::Month { month: month as i64 });
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(InvalidDateError::Year {
            year: i64::from(year),
        })?;
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// 0-based month index.
    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> Result<NaiveDate, InvalidDateError> {
        self.date(1)
    }

    /// Date of a day-of-month (1-based) within this month.
    pub fn date(self, day: u32) -> Result<NaiveDate, InvalidDateError> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day).ok_or_else(|| {
            InvalidDateError::Parse {
                input: format!("{}-{:02}-{:02}", self.year, self.month + 1, day),
            }
        })
    }

    /// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday(self) -> Result<u32, InvalidDateError> {
        Ok(self.first_day()?.weekday().num_days_from_sunday())
    }

    pub fn days_in_month(self) -> u32 {
        // month is validated on construction
        days_in_month(self.year, self.month).unwrap_or(31)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    /// Move by `delta` months.
    pub fn advance(self, delta: i32) -> Result<Self, InvalidDateError> {
        let (year, month) = advance_month(self.year, self.month, delta)?;
        Self::new(year, month)
    }

    pub fn next(self) -> Result<Self, InvalidDateError> {
        self.advance(1)
    }

    pub fn prev(self) -> Result<Self, InvalidDateError> {
        self.advance(-1)
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Heading such as "January 2024".
    pub fn title(self) -> String {
        format!("{} {}", self.name(), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

/// Parses `YYYY-MM` with a 1-based month, as typed on the command line.
impl FromStr for YearMonth {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || InvalidDateError::ParseMonth {
            input: s.to_string(),
        };
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(parse_err)?;
        let year: i32 = year.parse().map_err(|_| parse_err())?;
        let month: u32 = month.parse().map_err(|_| parse_err())?;
        if !(1..=12).contains(&month) {
            return Err(parse_err());
        }
        Self::new(year, month - 1)
    }
}

/// A day with its classification and trade count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day of month, 1-based.
    pub day: u32,
    pub classification: DayClassification,
    pub trade_count: usize,
}

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    /// Leading filler aligning day 1 to its weekday column. Not selectable.
    Padding,
    Day(DayCell),
}

impl CalendarCell {
    pub fn is_padding(&self) -> bool {
        matches!(self, CalendarCell::Padding)
    }

    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            CalendarCell::Padding => None,
            CalendarCell::Day(day) => Some(day),
        }
    }
}

/// Build the cells for a month: `first_weekday` padding cells, then one cell
/// per day. Days missing from `index` are `Empty`.
pub fn build_month_grid(
    year: i32,
    month: u32,
    index: &DayIndex,
) -> Result<Vec<CalendarCell>, InvalidDateError> {
    let ym = YearMonth::new(year, month)?;
    let padding = ym.first_weekday()? as usize;
    let days = ym.days_in_month();

    let mut cells = Vec::with_capacity(padding + days as usize);
    cells.extend(std::iter::repeat(CalendarCell::Padding).take(padding));

    for day in 1..=days {
        let date = ym.date(day)?;
        let trade_count = index.get(&date).map(|d| d.trade_count).unwrap_or(0);
        cells.push(CalendarCell::Day(DayCell {
            date,
            day,
            classification: classify(index, date),
            trade_count,
        }));
    }

    Ok(cells)
}

/// Split a grid into rows of seven for rendering. The last row may be short.
pub fn weeks(cells: &[CalendarCell]) -> Vec<&[CalendarCell]> {
    cells.chunks(7).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::DayAggregate;

    fn day_count(cells: &[CalendarCell]) -> usize {
        cells.iter().filter(|c| !c.is_padding()).count()
    }

    fn padding_count(cells: &[CalendarCell]) -> usize {
        cells.iter().take_while(|c| c.is_padding()).count()
    }

    #[test]
    fn february_2024_leap_year_grid() {
        let cells = build_month_grid(2024, 1, &DayIndex::new()).unwrap();
        assert_eq!(padding_count(&cells), 4);
        assert_eq!(day_count(&cells), 29);
        assert_eq!(cells.len(), 33);
        let last = cells.last().unwrap().as_day().unwrap();
        assert_eq!(last.day, 29);
        assert_eq!(last.classification, DayClassification::Empty);
    }

    #[test]
    fn grid_padding_matches_weekday() {
        // 2024-01-01 is a Monday, 2024-09-01 a Sunday, 2023-07-01 a Saturday.
        assert_eq!(padding_count(&build_month_grid(2024, 0, &DayIndex::new()).unwrap()), 1);
        assert_eq!(padding_count(&build_month_grid(2024, 8, &DayIndex::new()).unwrap()), 0);
        assert_eq!(padding_count(&build_month_grid(2023, 6, &DayIndex::new()).unwrap()), 6);
    }

    #[test]
    fn grid_looks_up_classification() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        let mut index = DayIndex::new();
        index.insert(
            date,
            DayAggregate {
                date,
                trade_count: 2,
                win_count: 1,
                loss_count: 1,
                net_pnl: 10.0,
                classification: DayClassification::Mixed,
            },
        );
        let cells = build_month_grid(2024, 0, &index).unwrap();
        let day11 = cells
            .iter()
            .filter_map(CalendarCell::as_day)
            .find(|d| d.day == 11)
            .unwrap();
        assert_eq!(day11.classification, DayClassification::Mixed);
        assert_eq!(day11.trade_count, 2);
        assert_eq!(day11.date, date);

        let empty = cells
            .iter()
            .filter_map(CalendarCell::as_day)
            .filter(|d| d.day != 11)
            .all(|d| d.classification == DayClassification::Empty && d.trade_count == 0);
        assert!(empty);
    }

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
        assert_eq!(days_in_month(2024, 3).unwrap(), 30);
        assert_eq!(days_in_month(2024, 11).unwrap(), 31);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert_eq!(
            build_month_grid(2024, 12, &DayIndex::new()),
            Err(InvalidDateError::Month { month: 12 })
        );
        assert!(days_in_month(2024, 12).is_err());
        assert!(advance_month(2024, 12, 1).is_err());
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        assert!(matches!(
            YearMonth::new(i32::MAX, 0),
            Err(InvalidDateError::Year { .. })
        ));
    }

    #[test]
    fn advance_month_single_steps() {
        assert_eq!(advance_month(2024, 0, -1).unwrap(), (2023, 11));
        assert_eq!(advance_month(2024, 11, 1).unwrap(), (2025, 0));
        assert_eq!(advance_month(2024, 5, 1).unwrap(), (2024, 6));
        assert_eq!(advance_month(2024, 5, 0).unwrap(), (2024, 5));
    }

    #[test]
    fn advance_month_multi_year() {
        assert_eq!(advance_month(2024, 0, 25).unwrap(), (2026, 1));
        assert_eq!(advance_month(2024, 0, -25).unwrap(), (2021, 11));
        assert_eq!(advance_month(2024, 3, -12).unwrap(), (2023, 3));
        assert_eq!(advance_month(0, 0, -1).unwrap(), (-1, 11));
    }

    #[test]
    fn advance_month_year_overflow() {
        assert!(matches!(
            advance_month(i32::MAX, 11, 1),
            Err(InvalidDateError::Year { .. })
        ));
    }

    #[test]
    fn year_month_navigation_and_labels() {
        let jan = YearMonth::new(2024, 0).unwrap();
        assert_eq!(jan.prev().unwrap(), YearMonth::new(2023, 11).unwrap());
        assert_eq!(jan.next().unwrap().title(), "February 2024");
        assert_eq!(jan.title(), "January 2024");
        assert_eq!(jan.to_string(), "2024-01");
        assert_eq!(jan.first_weekday().unwrap(), 1);
        assert_eq!(jan.days_in_month(), 31);
    }

    #[test]
    fn year_month_parse() {
        assert_eq!("2024-02".parse::<YearMonth>().unwrap(), YearMonth::new(2024, 1).unwrap());
        assert_eq!("1999-12".parse::<YearMonth>().unwrap(), YearMonth::new(1999, 11).unwrap());
        assert!("2024-00".parse::<YearMonth>().is_err());
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("January".parse::<YearMonth>().is_err());
    }

    #[test]
    fn year_month_contains() {
        let feb = YearMonth::new(2024, 1).unwrap();
        assert!(feb.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!feb.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(!feb.contains(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
        assert_eq!(
            YearMonth::from_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
            feb
        );
    }

    #[test]
    fn weeks_split_into_rows_of_seven() {
        let cells = build_month_grid(2024, 1, &DayIndex::new()).unwrap();
        let rows = weeks(&cells);
        assert_eq!(rows.len(), 5);
        assert!(rows[..4].iter().all(|r| r.len() == 7));
        assert_eq!(rows[4].len(), 5);
    }
}
