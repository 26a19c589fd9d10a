pub mod api_error;
pub mod clock_time;
pub mod duty_status;
pub mod segment;
pub mod trip;
