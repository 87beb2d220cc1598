//! Frame counter and cadence gating for the OpenCarControl cycle driver.
//!
//! The controller runs off an external fixed-rate tick; this crate owns the
//! monotonic frame counter and decides, per message class, whether the
//! current frame is a send frame. It deliberately has no notion of wall
//! time: the surrounding tick loop owns time, and a missed tick simply means
//! the next tick proceeds from the persisted frame count.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cadence;
pub mod frame;

pub use cadence::{CadenceError, MessageCadences};
pub use frame::FrameScheduler;
