//! Repository implementations, one per table.

pub mod admission;
pub mod announcement;
pub mod attendance;
pub mod fee;
pub mod interview;
pub mod notification;
pub mod student;
pub mod timetable;
