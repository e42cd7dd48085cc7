//! Platform-agnostic building blocks shared by the page components.

pub mod config;
pub mod format;
pub mod platform;
pub mod storage;
pub mod timing;
pub mod whatsapp;
