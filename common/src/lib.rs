//! Types shared between the gate, the dialer and the command line front end.

pub mod config;
pub mod network;
