//! Parse the YAML frontmatter block at the top of a skill's metadata file.

use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// Outcome of looking for a frontmatter block in file content.
#[derive(Debug)]
pub enum Frontmatter {
    /// No `---` delimited block at the top of the file
    Missing,
    /// A block was found but is not a YAML mapping
    Invalid(String),
    /// A YAML mapping (or an empty block)
    Parsed(Value),
}

/// Return the raw text between the opening `---` line and the next `---` line.
///
/// The opening delimiter must be the first line of the file (a leading byte
/// order mark is ignored). Returns `None` if either delimiter is missing.
pub fn header_block(content: &str) -> Option<String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines();
    if lines.next()?.trim() != "---" {
        return None;
    }
    let mut block = Vec::new();
    for line in lines {
        if line.trim() == "---" {
            return Some(block.join("\n"));
        }
        block.push(line);
    }
    None
}

/// Parse content into its frontmatter mapping.
pub fn parse(content: &str) -> Frontmatter {
    let Some(block) = header_block(content) else {
        return Frontmatter::Missing;
    };
    match serde_yaml::from_str::<Value>(&block) {
        Ok(value) if value.is_mapping() || value.is_null() => Frontmatter::Parsed(value),
        Ok(_) => Frontmatter::Invalid("frontmatter is not a key-value mapping".to_string()),
        Err(e) => Frontmatter::Invalid(e.to_string()),
    }
}

/// Deserialize the header block into `T`.
///
/// Plain scalars reach `String` fields with their text as written, so
/// `version: 1.10` stays `1.10`. Returns `None` without a header block.
pub fn deserialize<T: DeserializeOwned>(content: &str) -> Option<Result<T, String>> {
    let block = header_block(content)?;
    Some(serde_yaml::from_str(&block).map_err(|e| e.to_string()))
}
