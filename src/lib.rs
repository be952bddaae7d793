pub mod configuration;
pub mod routes;
pub mod startup;
pub mod storage;
pub mod telemetry;
pub mod util;
