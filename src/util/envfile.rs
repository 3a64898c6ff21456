use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse `KEY=VALUE` lines; blank lines and `#` comments are skipped and
/// surrounding single or double quotes are stripped from values.
pub fn parse_env_content(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (idx, line) in content.lines().enumerate() {
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }
        let Some((key, val)) = s.split_once('=') else {
            log::warn!("ignoring .env line {} without '=': {}", idx + 1, line);
            continue;
        };
        let val = val.trim();
        let unquoted = ['"', '\'']
            .iter()
            .find_map(|q| val.strip_prefix(*q).and_then(|v| v.strip_suffix(*q)))
            .unwrap_or(val);
        map.insert(key.trim().to_string(), unquoted.to_string());
    }
    map
}

/// Load a `.env`-style file into the process environment without overriding
/// variables that are already set. A missing file is not an error.
pub fn load_env_file_from(path: &str) -> Result<HashMap<String, String>> {
    let p = Path::new(path);
    if !p.exists() {
        return Ok(HashMap::new());
    }
    let map = parse_env_content(&fs::read_to_string(p)?);
    for (k, v) in &map {
        if std::env::var_os(k).is_none() {
            unsafe {
                std::env::set_var(k, v);
            }
        }
    }
    Ok(map)
}

/// Load an env file the user named explicitly. Unlike `.env`, a missing file is
/// reported with a warning; `Ok(None)` tells the caller it was absent.
pub fn load_explicit_env_file(path: &str) -> Result<Option<HashMap<String, String>>> {
    if !Path::new(path).exists() {
        log::warn!("env file {} not found; continuing without it", path);
        return Ok(None);
    }
    load_env_file_from(path).map(Some)
}

/// Load `.env` from the current working directory, if present.
pub fn load_dotenv_if_present() -> Result<()> {
    load_env_file_from(".env").map(|_| ())
}

/// Generate a .env.template file with placeholder values and comments.
pub fn write_env_template(path: &str) -> Result<()> {
    let template = r#"# handle_matcher environment configuration template
# Copy this file to .env and adjust. Process environment always wins over .env.

# Batch input/output (used by `handle_matcher batch` when paths are omitted)
#HANDLE_MATCHER_INPUT=candidates.csv
#HANDLE_MATCHER_OUT=matches.csv
#HANDLE_MATCHER_SUMMARY=summary.csv

# Parallelism (defaults to rayon's choice, one thread per core)
#HANDLE_MATCHER_THREADS=8

# Logging: RUST_LOG filter, and tracing subscriber instead of env_logger
#RUST_LOG=info
#HANDLE_MATCHER_TRACING=1
"#;
    fs::write(path, template)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_comments_and_bad_lines() {
        let map = parse_env_content(
            "# comment\n\nA=1\nB = \"two words\"\nC='x'\nnot a pair\nD=a=b\nE=\"unterminated\n",
        );
        assert_eq!(map.get("A").map(String::as_str), Some("1"));
        assert_eq!(map.get("B").map(String::as_str), Some("two words"));
        assert_eq!(map.get("C").map(String::as_str), Some("x"));
        assert_eq!(map.get("D").map(String::as_str), Some("a=b"));
        assert_eq!(map.get("E").map(String::as_str), Some("\"unterminated"));
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn existing_variables_are_not_overridden() {
        let path = std::env::temp_dir().join(format!("handle_matcher_env_{}", std::process::id()));
        let path = path.to_string_lossy().to_string();
        fs::write(
            &path,
            "HANDLE_MATCHER_TEST_PRESET=file\nHANDLE_MATCHER_TEST_FRESH=file\n",
        )
        .unwrap();
        unsafe {
            std::env::set_var("HANDLE_MATCHER_TEST_PRESET", "process");
        }
        let map = load_env_file_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(map.len(), 2);
        assert_eq!(std::env::var("HANDLE_MATCHER_TEST_PRESET").unwrap(), "process");
        assert_eq!(std::env::var("HANDLE_MATCHER_TEST_FRESH").unwrap(), "file");
    }

    #[test]
    fn missing_file_is_empty() {
        assert!(load_env_file_from("/definitely/not/here/.env").unwrap().is_empty());
    }

    #[test]
    fn explicit_missing_file_is_reported() {
        assert!(load_explicit_env_file("/definitely/not/here/app.env").unwrap().is_none());
        let path = std::env::temp_dir().join(format!("handle_matcher_explicit_{}", std::process::id()));
        let path = path.to_string_lossy().to_string();
        fs::write(&path, "HANDLE_MATCHER_TEST_EXPLICIT=1\n").unwrap();
        let loaded = load_explicit_env_file(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded.map(|m| m.len()), Some(1));
    }

    #[test]
    fn template_round_trips_as_comments() {
        let path = std::env::temp_dir().join(format!("handle_matcher_tpl_{}", std::process::id()));
        let path = path.to_string_lossy().to_string();
        write_env_template(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert!(text.contains("HANDLE_MATCHER_THREADS"));
        assert!(parse_env_content(&text).is_empty());
    }
}
