//! Platform plumbing shared by every part of the site.

pub mod config;
pub mod platform;
pub mod storage;
