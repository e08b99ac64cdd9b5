pub mod common;

pub mod a001_deal;
pub mod a002_customer;
pub mod a003_quote;
pub mod a004_commission;
pub mod a005_ticket;
pub mod a006_announcement;
pub mod a007_training;
pub mod a008_resource;
pub mod a009_settings;
