pub mod aggregate;
pub mod samples;
