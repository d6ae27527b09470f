use std::path::PathBuf;
use super::ValueValidator;

#[derive(Clone, Debug)]
pub struct NonEmptyValidator { }

impl ValueValidator<String> for self::NonEmptyValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        if value.is_empty() {
            Err("value must not be empty".to_owned())
        } else {
            Ok(())
        }
    }
}

impl ValueValidator<PathBuf> for self::NonEmptyValidator {
    fn validate(&self, value: &PathBuf) -> Result<(), String> {
        if value.as_os_str().is_empty() {
            Err("path must not be empty".to_owned())
        } else {
            Ok(())
        }
    }
}

pub const NON_EMPTY: &NonEmptyValidator = &NonEmptyValidator {};
