//! Billable services.
//!
//! Each variant (data, voice, SMS) carries its pricing inputs and prices itself under a
//! [`Tariff`](packforge_core::Tariff). Services are plain values: cloning one yields an
//! independent copy.

pub mod data;
pub mod kind;
pub mod service;
pub mod sms;
pub mod voice;

pub use data::DataService;
pub use kind::ServiceKind;
pub use service::{BillableService, MAX_AMOUNT, Service};
pub use sms::SmsService;
pub use voice::VoiceService;
