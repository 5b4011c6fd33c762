//! Deployment Profile Loading for HomeLink
//!
//! ## Overview
//!
//! The core crate defines *what* a valid configuration bundle is; this
//! crate defines *where it comes from* in a deployment. Secrets never live
//! in source: a checked-in profile names the non-secret structure, and
//! credentials arrive through the environment at startup. The only thing
//! the repository carries is the list of key names to read.
//!
//! ## Sources, in precedence order
//!
//! 1. **Environment variables** ([`env`]) - always win. This is where
//!    secrets belong.
//! 2. **TOML profile document** - non-secret structure (namespace, board,
//!    pins, cadence) plus, for closed-network labs, optionally the
//!    credentials themselves.
//! 3. **Built-in defaults** - port, cadence, namespace, board and wiring
//!    of the reference deployment. Identity and credentials have no
//!    defaults on purpose.
//!
//! A profile that still misses a value after all three sources fails with
//! an error naming the exact environment variable that would satisfy it.
//!
//! ## Example
//!
//! ```no_run
//! use homelink_profile::Profile;
//!
//! let profile = Profile::load("deploy/kitchen.toml")?;
//! let config = profile.into_config()?;   // env overlay + validation
//! # Ok::<(), homelink_profile::ProfileError>(())
//! ```
//!
//! ```toml
//! # deploy/kitchen.toml
//! [device]
//! id = "kitchen_node_1"
//! update-interval-ms = 5000
//!
//! [broker]
//! host = "mqtt.example.net"
//! port = 8883
//!
//! [topics]
//! namespace = "home"
//!
//! [pins]
//! board = "esp8266"
//! light = 2
//! fan = 4
//! ```
//!
//! ## Fleet registry
//!
//! [`FleetRegistry`] accepts validated bundles and refuses a second
//! registration under an already-taken device identifier - the
//! fleet-uniqueness rule made operational for controllers that manage
//! many nodes.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod profile;
pub mod registry;

pub use error::ProfileError;
pub use profile::Profile;
pub use registry::FleetRegistry;
