//! Response middleware.

pub(crate) mod route_policy;
