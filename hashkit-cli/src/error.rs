use hashkit_lib::HashError;

#[derive(Debug, PartialEq, Eq)]
pub enum CliError {
    InvalidArguments(String),
    IoError(String),
    FailedHash(HashError),
    ClipboardError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::InvalidArguments(msg) => {
                f.write_fmt(std::format_args!("Invalid arguments: {}", msg))
            }
            Self::IoError(msg) => f.write_fmt(std::format_args!("Io error: {}", msg)),
            Self::FailedHash(error) => f.write_fmt(std::format_args!("Failed hash: {}", error)),
            Self::ClipboardError(msg) => {
                f.write_fmt(std::format_args!("Clipboard error: {}", msg))
            }
        };
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::IoError(value.to_string())
    }
}

impl From<HashError> for CliError {
    fn from(value: HashError) -> Self {
        Self::FailedHash(value)
    }
}

impl From<arboard::Error> for CliError {
    fn from(value: arboard::Error) -> Self {
        Self::ClipboardError(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use hashkit_lib::HashError;

    use super::CliError;

    #[test]
    fn test_display() {
        let error = CliError::InvalidArguments("md5".to_string());
        assert_eq!(error.to_string(), "Invalid arguments: md5");

        let error = CliError::ClipboardError("no display".to_string());
        assert_eq!(error.to_string(), "Clipboard error: no display");
    }

    #[test]
    fn test_conversions() {
        let error: CliError = HashError::PrimitiveFailure(-1).into();
        assert_eq!(error, CliError::FailedHash(HashError::PrimitiveFailure(-1)));

        let error: CliError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing.bin").into();
        assert_eq!(error.to_string(), "Io error: missing.bin");
    }
}
