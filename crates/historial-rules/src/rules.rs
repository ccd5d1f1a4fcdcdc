pub mod blood_pressure;
pub mod pulse;
pub mod respiratory_rate;
pub mod temperature;
