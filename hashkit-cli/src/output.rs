use hashkit_lib::HashValue;

/// `<hex>  <name>`, the layout of the coreutils *sum tools.
pub fn format_line(value: &HashValue, name: &str) -> String {
    format!("{}  {}", value, name)
}

pub fn format_json(value: &HashValue, name: &str, keyed: bool) -> String {
    let object = json::object! {
        name: name,
        algorithm: value.algorithm().name(),
        hash: value.to_hex(),
        hmac: keyed
    };

    object.dump()
}

pub fn format_version(primitive: &str, library: &str) -> String {
    format!("hashkit-lib {}\n{}", library, primitive)
}

#[cfg(test)]
mod test {
    use hashkit_lib::{sha224, Algorithm, HashValue};

    use super::{format_json, format_line};

    #[test]
    fn test_format_line() {
        let value = sha224(b"abc").unwrap();

        assert_eq!(
            format_line(&value, "<string>"),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7  <string>"
        );
    }

    #[test]
    fn test_format_json() {
        let hex = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        let value = HashValue::from_hex(Algorithm::Sha256, hex).unwrap();

        let parsed = json::parse(&format_json(&value, "empty.bin", false)).unwrap();
        assert_eq!(parsed["name"], "empty.bin");
        assert_eq!(parsed["algorithm"], "sha256");
        assert_eq!(parsed["hash"], hex);
        assert_eq!(parsed["hmac"], false);
    }
}
