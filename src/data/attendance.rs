use serde::Serialize;

use super::{mean, round1};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayAttendance {
    pub day: &'static str,
    pub present: u32,
    pub absent: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthTrend {
    pub month: &'static str,
    pub attendance: f64,
}

pub static WEEKLY_ATTENDANCE: [DayAttendance; 6] = [
    DayAttendance { day: "Mon", present: 145, absent: 11, percentage: 92.9 },
    DayAttendance { day: "Tue", present: 142, absent: 14, percentage: 91.0 },
    DayAttendance { day: "Wed", present: 148, absent: 8, percentage: 94.9 },
    DayAttendance { day: "Thu", present: 143, absent: 13, percentage: 91.7 },
    DayAttendance { day: "Fri", present: 149, absent: 7, percentage: 95.5 },
    DayAttendance { day: "Sat", present: 138, absent: 18, percentage: 88.5 },
];

pub static MONTHLY_TRENDS: [MonthTrend; 5] = [
    MonthTrend { month: "Aug", attendance: 89.2 },
    MonthTrend { month: "Sep", attendance: 91.5 },
    MonthTrend { month: "Oct", attendance: 88.7 },
    MonthTrend { month: "Nov", attendance: 92.8 },
    MonthTrend { month: "Dec", attendance: 90.3 },
];

/// Mean of the daily percentages, one decimal.
pub fn weekly_average(days: &[DayAttendance]) -> f64 {
    round1(mean(days.iter().map(|d| d.percentage)))
}

pub fn monthly_average(months: &[MonthTrend]) -> f64 {
    round1(mean(months.iter().map(|m| m.attendance)))
}

/// Largest head count, the scale every weekly bar is drawn against.
pub fn max_present(days: &[DayAttendance]) -> u32 {
    days.iter().map(|d| d.present).max().unwrap_or(0)
}

/// First day with the highest head count.
pub fn best_day(days: &[DayAttendance]) -> Option<&DayAttendance> {
    days.iter().fold(None, |best: Option<&DayAttendance>, day| match best {
        Some(b) if b.present >= day.present => Some(b),
        _ => Some(day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_average() {
        assert_eq!(weekly_average(&WEEKLY_ATTENDANCE), 92.4);
    }

    #[test]
    fn test_friday_is_the_best_day() {
        assert_eq!(max_present(&WEEKLY_ATTENDANCE), 149);
        assert_eq!(best_day(&WEEKLY_ATTENDANCE).map(|d| d.day), Some("Fri"));
    }

    #[test]
    fn test_monthly_average() {
        assert_eq!(monthly_average(&MONTHLY_TRENDS), 90.5);
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(max_present(&[]), 0);
        assert!(best_day(&[]).is_none());
        assert_eq!(weekly_average(&[]), 0.0);
    }

    #[test]
    fn test_head_counts_add_up() {
        for day in &WEEKLY_ATTENDANCE {
            assert_eq!(day.present + day.absent, 156, "{}", day.day);
        }
    }
}
