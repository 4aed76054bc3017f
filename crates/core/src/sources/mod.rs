pub mod sheet;
pub mod traits;
