pub mod dashboards;
pub mod domain;
pub mod error;
pub mod shared;
