//! Common helpers for all domain records

mod string_enum;
