pub mod ingest_service;
pub mod projection_service;
pub mod series_service;
pub mod stats_service;
