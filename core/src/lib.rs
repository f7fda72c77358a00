//! # safedial
//!
//! A pre-connection address-safety gate that blocks server-side request
//! forgery. Given the network family and the resolved `host:port` a connector
//! is about to dial, [`AddressGate`] decides whether the connection may
//! proceed: only TCP, only ports 80 and 443, only public addresses.
//!
//! * **[`gate`]**: the stateless decision predicate and its range tables.
//! * **[`network`]**: [`SafeDialer`], a tokio connector that runs a
//!   [`DialControl`] hook after name resolution and before every handshake.
//! * **[`error`]**: the closed denial taxonomy and dial failures.

pub mod error;
pub mod gate;
pub mod network;

pub use error::{DialError, GateError};
pub use gate::{AddressGate, DialControl, Verdict, evaluate};
pub use network::tcp::{Family, SafeDialer};
