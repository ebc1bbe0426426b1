//! Network Module
//!
//! Socket ownership and the synchronous round trip.
//!
//! ## Model
//! - One socket per client, one command in flight
//! - Blocking reads and writes
//! - Socket dropped on transport failure, reopened before the next command

mod connection;

pub use connection::Connection;
