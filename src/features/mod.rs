//! Domain-level frontend features and their shared logic. Routes and widgets
//! import these modules to keep view code focused while request handling,
//! validation and display rules live in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod battles;
pub(crate) mod payments;
pub(crate) mod profile;
