use chrono::Utc;
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::booking::Booking;
use crate::models::notification::{Notification, NotificationKind};
use crate::storage::KeyValueStorage;

pub const NOTIFICATIONS_KEY: &str = "taxiAppNotifications";
pub const DEFAULT_CAP: usize = 20;

/// Capped activity feed derived from the booking table.
///
/// Persisted under its own slot, separate from the entity snapshot. Only
/// booking creation is observed; status changes, driver assignments and
/// deletions never produce entries.
pub struct NotificationFeed {
    entries: Vec<Notification>,
    cap: usize,
    storage: Box<dyn KeyValueStorage>,
}

impl NotificationFeed {
    pub fn open(storage: Box<dyn KeyValueStorage>, cap: usize) -> Result<Self, AppError> {
        let entries = match storage.load(NOTIFICATIONS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            entries,
            cap,
            storage,
        })
    }

    /// Synthesizes an entry for every booking not yet represented, then
    /// re-sorts newest-first, truncates to the cap and persists.
    pub fn sync(&mut self, bookings: &[Booking]) -> Result<(), AppError> {
        let mut created = 0usize;

        for booking in bookings {
            let seen = self.entries.iter().any(|entry| {
                entry.kind == NotificationKind::BookingCreated && entry.booking_id == booking.id
            });
            if seen {
                continue;
            }

            self.entries.push(Notification {
                id: format!(
                    "notification_{}_{}",
                    Utc::now().timestamp_millis(),
                    booking.id
                ),
                kind: NotificationKind::BookingCreated,
                message: format!(
                    "Νέα κράτηση από {} ({} → {})",
                    booking.client.name, booking.origin, booking.destination
                ),
                timestamp: booking.created_at,
                read: false,
                booking_id: booking.id.clone(),
            });
            created += 1;
        }

        self.entries
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.entries.truncate(self.cap);

        if created > 0 {
            info!(created, unread = self.unread_count(), "notification feed updated");
        }
        self.persist()
    }

    pub fn mark_as_read(&mut self, id: &str) -> Result<(), AppError> {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.read = true,
            None => debug!(notification_id = %id, "mark-as-read for unknown notification ignored"),
        }
        self.persist()
    }

    pub fn mark_all_as_read(&mut self) -> Result<(), AppError> {
        for entry in &mut self.entries {
            entry.read = true;
        }
        self.persist()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.read).count()
    }

    fn persist(&self) -> Result<(), AppError> {
        let payload = serde_json::to_string(&self.entries)?;
        self.storage.save(NOTIFICATIONS_KEY, &payload)
    }
}
