use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::models::booking::{Booking, BookingStatus, BookingType};

const TYPES: [BookingType; 3] = [
    BookingType::Arrival,
    BookingType::Departure,
    BookingType::Transfer,
];

const STATUSES: [BookingStatus; 4] = [
    BookingStatus::Pending,
    BookingStatus::Confirmed,
    BookingStatus::Completed,
    BookingStatus::Cancelled,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Week,
    Month,
    Year,
}

impl TimeRange {
    fn cutoff(self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date();
        let start = match self {
            TimeRange::Week => today - Duration::days(7),
            TimeRange::Month => today.checked_sub_months(Months::new(1)).unwrap_or(today),
            TimeRange::Year => today.checked_sub_months(Months::new(12)).unwrap_or(today),
        };
        start.and_time(NaiveTime::MIN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
}

/// Booking aggregation for the reports page. Buckets with a zero count are
/// kept so chart axes stay stable across renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingStats {
    pub total: usize,
    pub by_type: Vec<(BookingType, usize)>,
    pub by_status: Vec<(BookingStatus, usize)>,
    pub series: Vec<Bucket>,
}

pub fn booking_stats(bookings: &[Booking], range: TimeRange) -> BookingStats {
    booking_stats_at(bookings, range, Utc::now().naive_utc())
}

/// Same as [`booking_stats`] with an explicit evaluation instant, since the
/// window is measured against "now".
pub fn booking_stats_at(bookings: &[Booking], range: TimeRange, now: NaiveDateTime) -> BookingStats {
    let cutoff = range.cutoff(now);
    let windowed: Vec<&Booking> = bookings
        .iter()
        .filter(|booking| booking.created_at >= cutoff)
        .collect();

    let by_type = TYPES
        .iter()
        .map(|ty| {
            let count = windowed.iter().filter(|b| b.booking_type == *ty).count();
            (*ty, count)
        })
        .collect();

    let by_status = STATUSES
        .iter()
        .map(|status| {
            let count = windowed.iter().filter(|b| b.status == *status).count();
            (*status, count)
        })
        .collect();

    let series = match range {
        TimeRange::Week => day_series(&windowed, now.date(), 7),
        TimeRange::Month => day_series(&windowed, now.date(), 30),
        TimeRange::Year => month_series(&windowed, now.date()),
    };

    BookingStats {
        total: windowed.len(),
        by_type,
        by_status,
        series,
    }
}

fn day_series(bookings: &[&Booking], today: NaiveDate, days: i64) -> Vec<Bucket> {
    (0..days)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let count = bookings
                .iter()
                .filter(|b| b.created_at.date() == day)
                .count();
            Bucket {
                label: day.format("%d/%m").to_string(),
                count,
            }
        })
        .collect()
}

fn month_series(bookings: &[&Booking], today: NaiveDate) -> Vec<Bucket> {
    (0..12u32)
        .rev()
        .map(|offset| {
            let month = today
                .checked_sub_months(Months::new(offset))
                .unwrap_or(today);
            let count = bookings
                .iter()
                .filter(|b| {
                    let created = b.created_at.date();
                    created.year() == month.year() && created.month() == month.month()
                })
                .count();
            Bucket {
                label: month.format("%b").to_string(),
                count,
            }
        })
        .collect()
}
