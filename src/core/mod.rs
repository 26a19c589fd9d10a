pub mod calculator;
pub mod now_marker;
pub mod planner;
pub mod store;
pub mod validation;
