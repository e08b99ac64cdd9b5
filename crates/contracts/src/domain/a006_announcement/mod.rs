pub mod aggregate;
pub mod feed;

pub use aggregate::{Announcement, AnnouncementCategory, AnnouncementsData};
