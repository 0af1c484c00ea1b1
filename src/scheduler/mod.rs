//! Cron jobs for automated tasks.

pub mod event_reminders;
