//! HTTP handlers for the interface service.

pub mod home;
