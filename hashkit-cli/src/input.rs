use std::io::{Read, Write};

use hashkit_lib::zeroize::Zeroizing;
use log::info;

use crate::error::CliError;

#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Text(String),
    File(String),
}

impl Source {
    pub fn name(&self) -> &str {
        match self {
            Self::Stdin => "-",
            Self::Text(_) => "<string>",
            Self::File(path) => path.as_str(),
        }
    }

    pub fn read(&self) -> Result<Vec<u8>, CliError> {
        return match self {
            Self::Stdin => {
                let mut contents = Vec::new();
                std::io::stdin().lock().read_to_end(&mut contents)?;
                Ok(contents)
            }
            Self::Text(text) => Ok(text.as_bytes().to_vec()),
            Self::File(path) => {
                info!("reading from file \"{}\"", path);
                Ok(std::fs::read(path)?)
            }
        };
    }
}

pub fn select_sources(files: &[String], text: Option<String>) -> Result<Vec<Source>, CliError> {
    match text {
        Some(_) if !files.is_empty() => Err(CliError::InvalidArguments(
            "provide either a string or files, not both".to_string(),
        )),
        Some(text) => Ok(vec![Source::Text(text)]),
        None if files.is_empty() => Ok(vec![Source::Stdin]),
        None => Ok(files
            .iter()
            .map(|file| match file.as_str() {
                "-" => Source::Stdin,
                _ => Source::File(file.clone()),
            })
            .collect()),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum KeySource {
    Literal(Zeroizing<String>),
    File(String),
    Prompt,
}

pub fn select_key_source(
    key: Option<String>,
    key_file: Option<String>,
    key_prompt: bool,
) -> Result<Option<KeySource>, CliError> {
    let count = key.is_some() as usize + key_file.is_some() as usize + key_prompt as usize;
    if count > 1 {
        return Err(CliError::InvalidArguments(
            "only provide one of key, key-file or key-prompt".to_string(),
        ));
    }

    if let Some(key) = key {
        return Ok(Some(KeySource::Literal(Zeroizing::new(key))));
    }
    if let Some(path) = key_file {
        return Ok(Some(KeySource::File(path)));
    }
    if key_prompt {
        return Ok(Some(KeySource::Prompt));
    }

    Ok(None)
}

/// Writes `prompt` to `prompt_out` and reads the key with `read_key`.
///
/// Results go to stdout, so the prompt must not.
pub fn request_key<W, R>(
    prompt: &str,
    prompt_out: &mut W,
    read_key: R,
) -> Result<Zeroizing<String>, std::io::Error>
where
    W: Write,
    R: FnOnce() -> Result<String, std::io::Error>,
{
    prompt_out.write_all(prompt.as_bytes())?;
    prompt_out.flush()?;

    Ok(Zeroizing::new(read_key()?))
}

impl KeySource {
    pub fn read(&self) -> Result<Zeroizing<Vec<u8>>, CliError> {
        self.read_with(&mut std::io::stderr(), rpassword::read_password)
    }

    pub fn read_with<W, R>(
        &self,
        prompt_out: &mut W,
        read_key: R,
    ) -> Result<Zeroizing<Vec<u8>>, CliError>
    where
        W: Write,
        R: FnOnce() -> Result<String, std::io::Error>,
    {
        return match self {
            Self::Literal(key) => Ok(Zeroizing::new(key.as_bytes().to_vec())),
            Self::File(path) => {
                info!("reading key from file \"{}\"", path);
                Ok(Zeroizing::new(std::fs::read(path)?))
            }
            Self::Prompt => {
                let key = request_key("Enter HMAC key: ", prompt_out, read_key)?;
                Ok(Zeroizing::new(key.as_bytes().to_vec()))
            }
        };
    }
}

#[cfg(test)]
mod test {
    use hashkit_lib::zeroize::Zeroizing;

    use super::{select_key_source, select_sources, KeySource, Source};
    use crate::error::CliError;

    #[test]
    fn test_select_sources() {
        assert_eq!(select_sources(&[], None).unwrap(), vec![Source::Stdin]);
        assert_eq!(
            select_sources(&[], Some("abc".to_string())).unwrap(),
            vec![Source::Text("abc".to_string())]
        );

        let files = vec!["a.bin".to_string(), "b.bin".to_string()];
        let sources = select_sources(&files, None).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[1].name(), "b.bin");

        assert!(matches!(
            select_sources(&files, Some("abc".to_string())),
            Err(CliError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_dash_is_stdin() {
        let files = vec!["a.bin".to_string(), "-".to_string()];
        let sources = select_sources(&files, None).unwrap();

        assert_eq!(
            sources,
            vec![Source::File("a.bin".to_string()), Source::Stdin]
        );
        assert_eq!(sources[1].name(), "-");
    }

    #[test]
    fn test_select_key_source() {
        assert_eq!(select_key_source(None, None, false).unwrap(), None);
        assert_eq!(
            select_key_source(None, None, true).unwrap(),
            Some(KeySource::Prompt)
        );
        assert_eq!(
            select_key_source(Some("Jefe".to_string()), None, false).unwrap(),
            Some(KeySource::Literal(Zeroizing::new("Jefe".to_string())))
        );
        assert!(matches!(
            select_key_source(Some("Jefe".to_string()), Some("key.bin".to_string()), false),
            Err(CliError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_read_text_and_literal_key() {
        let source = Source::Text("abc".to_string());
        assert_eq!(source.read().unwrap(), b"abc".to_vec());

        let key = KeySource::Literal(Zeroizing::new(String::new()));
        assert!(key.read().unwrap().is_empty());
    }

    #[test]
    fn test_prompt_goes_to_prompt_writer() {
        let mut prompt_out = Vec::new();
        let key = KeySource::Prompt
            .read_with(&mut prompt_out, || Ok("Jefe".to_string()))
            .unwrap();

        assert_eq!(key.as_slice(), b"Jefe");
        assert_eq!(prompt_out, b"Enter HMAC key: ".to_vec());
    }

    #[test]
    fn test_prompt_read_error() {
        let mut prompt_out = Vec::new();
        let result = KeySource::Prompt
            .read_with(&mut prompt_out, || Err(std::io::Error::other("no tty")));

        assert_eq!(result, Err(CliError::IoError("no tty".to_string())));
    }

    #[test]
    fn test_literal_key_writes_no_prompt() {
        let mut prompt_out = Vec::new();
        let key = KeySource::Literal(Zeroizing::new("Jefe".to_string()))
            .read_with(&mut prompt_out, || panic!("literal keys are never prompted"))
            .unwrap();

        assert_eq!(key.as_slice(), b"Jefe");
        assert!(prompt_out.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let source = Source::File("/nonexistent/hashkit/input.bin".to_string());
        assert!(matches!(source.read(), Err(CliError::IoError(_))));
    }
}
