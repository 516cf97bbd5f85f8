//! 工具函数

pub mod datetime;
pub mod text;
