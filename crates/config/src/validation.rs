use crate::ConfigResult;

/// Implemented by every configuration section.
pub trait ConfigValidator {
    fn validate(&self) -> ConfigResult<()>;
}
