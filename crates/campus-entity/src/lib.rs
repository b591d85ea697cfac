//! # campus-entity
//!
//! Domain entity models for the Campus ERP backend: roster, attendance,
//! fees, timetable, interviews, announcements, notifications, admissions,
//! and the principal/role types shared by the auth layer.

pub mod admission;
pub mod announcement;
pub mod attendance;
pub mod fee;
pub mod interview;
pub mod notification;
pub mod principal;
pub mod student;
pub mod timetable;

pub use principal::Role;
