pub mod backup;
pub mod due;
pub mod practice;
pub mod preview;
pub mod rate;
pub mod stats;
pub mod study;
