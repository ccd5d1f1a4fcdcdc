use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid reference range for {measure}: [{min}, {max}]")]
    InvalidRange { measure: String, min: f64, max: f64 },
}
