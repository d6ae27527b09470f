use std::path::PathBuf;
use super::ValueParser;

#[derive(Clone, Debug)]
pub struct StringParser { }

impl ValueParser<String> for self::StringParser {
    fn parse(&self, value: &str) -> Result<String, String> {
        Ok(value.to_owned())
    }
}

pub const STRING: StringParser = StringParser {};

#[derive(Clone, Debug)]
pub struct FilePathParser { }

impl ValueParser<PathBuf> for self::FilePathParser {
    fn parse(&self, value: &str) -> Result<PathBuf, String> {
        Ok(PathBuf::from(shellexpand::tilde(value).into_owned()))
    }
}

pub const FILE_PATH: FilePathParser = FilePathParser {};

#[derive(Clone, Debug)]
pub struct PositiveU16Parser { }

impl ValueParser<u16> for self::PositiveU16Parser {
    fn parse(&self, value: &str) -> Result<u16, String> {
        match value.trim().parse::<u16>() {
            Ok(0) | Err(_) =>
                Err(format!("expected a positive whole number: {value}")),
            Ok(n) => Ok(n),
        }
    }
}

pub const POSITIVE_U16: PositiveU16Parser = PositiveU16Parser {};
