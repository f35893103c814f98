//! Contact desk for the Aerofast site.
//!
//! Validates RFQ inquiries and drives the submit control through its
//! acknowledgment cycle (idle, submitting, sent, idle). Inquiries are not
//! transmitted anywhere; the cycle is a front-end affordance.

pub mod desk;
pub mod error;
pub mod form;
pub mod state;

pub use desk::{ContactDesk, InquiryReceipt};
pub use error::ContactError;
pub use form::{ContactInquiry, InquiryForm};
pub use state::StateMachine;
