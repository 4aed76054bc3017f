pub mod chart;
pub mod record;
pub mod series;
pub mod stats;
pub mod view;
