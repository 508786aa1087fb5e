//! Platform-independent model of the admin tab widget.
//!
//! Everything in here compiles for the host target so the state machine can be
//! tested without a browser. The `frontend` crate binds it to the DOM.

pub mod shared;
