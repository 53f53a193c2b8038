use std::path::{Path, PathBuf};
use std::{fs, io};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("empty user agent pool")]
    EmptyUserAgentPool,
}

/// One scrape target: where to fetch and what marks the wanted elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    pub url: String,
    pub tag: String,
    pub style: String,
}

impl PageSpec {
    /// Parses a `URL|TAG|STYLE` line. Lines that don't split into exactly
    /// three non-empty fields after trimming are rejected.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split('|').map(str::trim);
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(url), Some(tag), Some(style), None)
                if !url.is_empty() && !tag.is_empty() && !style.is_empty() =>
            {
                Some(Self {
                    url: url.to_string(),
                    tag: tag.to_string(),
                    style: style.to_string(),
                })
            }
            _ => None,
        }
    }
}

/// One trimmed entry per non-blank line.
pub fn load_lines(path: &Path) -> Result<Vec<String>, ConfigError> {
    let text = read(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

pub fn load_user_agents(path: &Path) -> Result<Vec<String>, ConfigError> {
    let pool = load_lines(path)?;
    if pool.is_empty() {
        return Err(ConfigError::EmptyUserAgentPool);
    }
    Ok(pool)
}

/// Page specs in file order, silently skipping lines that don't parse.
pub fn load_page_specs(path: &Path) -> Result<Vec<PageSpec>, ConfigError> {
    let text = read(path)?;
    Ok(text.lines().filter_map(PageSpec::parse).collect())
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn page_spec_parses_three_trimmed_fields() {
        let spec = PageSpec::parse(" https://e.com/a | div | color: red ").unwrap();
        assert_eq!(spec.url, "https://e.com/a");
        assert_eq!(spec.tag, "div");
        assert_eq!(spec.style, "color: red");
    }

    #[test]
    fn page_spec_rejects_wrong_field_counts() {
        assert!(PageSpec::parse("https://e.com|div").is_none());
        assert!(PageSpec::parse("https://e.com|div|style|extra").is_none());
        assert!(PageSpec::parse("").is_none());
    }

    #[test]
    fn page_spec_rejects_empty_fields() {
        assert!(PageSpec::parse("https://e.com||color").is_none());
        assert!(PageSpec::parse(" |div|color").is_none());
    }

    #[test]
    fn load_page_specs_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.txt");
        fs::write(
            &path,
            "https://e.com/a|div|red\n\nbroken|line\nhttps://e.com/b|span|blue\n",
        )
        .unwrap();

        let specs = load_page_specs(&path).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].url, "https://e.com/a");
        assert_eq!(specs[1].tag, "span");
    }

    #[test]
    fn load_lines_trims_and_drops_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proxies.txt");
        fs::write(&path, "10.0.0.1:8080\n\n  10.0.0.2:3128  \n").unwrap();

        let lines = load_lines(&path).unwrap();
        assert_eq!(lines, vec!["10.0.0.1:8080", "10.0.0.2:3128"]);
    }

    #[test]
    fn load_user_agents_requires_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_agents.txt");
        fs::write(&path, "\n  \n").unwrap();

        let err = load_user_agents(&path).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyUserAgentPool));
    }

    #[test]
    fn load_lines_missing_file_is_an_error() {
        let err = load_lines(Path::new("no/such/file.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
