//! Infrastructure Layer
//!
//! Contains all external concerns: driven adapters (photo API gateways,
//! configuration).

pub mod driven_adapters;
