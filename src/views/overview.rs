use crate::models::booking::{Booking, BookingStatus};
use crate::store::AppState;

/// Counters and the recent-activity list shown on the dashboard landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub total_bookings: usize,
    pub confirmed_bookings: usize,
    pub total_hotels: usize,
    pub total_drivers: usize,
    pub recent_bookings: Vec<Booking>,
}

const RECENT_LIMIT: usize = 5;

pub fn overview(state: &AppState) -> Overview {
    let mut recent: Vec<Booking> = state.bookings.clone();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_LIMIT);

    Overview {
        total_bookings: state.bookings.len(),
        confirmed_bookings: state
            .bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Confirmed)
            .count(),
        total_hotels: state.hotels.len(),
        total_drivers: state.drivers.len(),
        recent_bookings: recent,
    }
}
