//! LDIF record parser with encoding auto-detection.
//!
//! Splits a line-oriented directory export into records and keeps only the
//! attributes named by the caller. No CSV logic here.
//!
//! Records are blocks of non-blank lines separated by blank lines. Within a
//! block, a line is retained when it starts with one of the caller's
//! attribute names; its value is the text after the `name: ` separator.
//! Repeated names within one block merge into a single newline-joined value.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::LdifResult;
use crate::models::Record;

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records in input order
    pub records: Vec<Record>,
    /// Detected or used encoding
    pub encoding: String,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> LdifResult<String> {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => Ok(String::from_utf8(bytes.to_vec())
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).to_string())),
        "iso-8859-1" | "latin-1" | "latin1" => {
            Ok(encoding_rs::ISO_8859_15.decode(bytes).0.to_string())
        }
        "windows-1252" | "cp1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()),
        _ => {
            // Fallback: UTF-8 with lossy conversion
            Ok(String::from_utf8_lossy(bytes).to_string())
        }
    }
}

/// Test one line against every allow-list name, in allow-list order.
///
/// Every name whose prefix the line satisfies fires an insert, not just the
/// first. The value starts two characters past the matched name, skipping the
/// `:` and one space; a line too short for that slice yields an empty value.
fn scan_line(line: &str, attributes: &[String], current: &mut Record) {
    for name in attributes {
        if line.starts_with(name.as_str()) {
            let value = line.get(name.len() + 2..).unwrap_or("");
            current.insert(name, value);
        }
    }
}

/// Parse in-memory LDIF text.
///
/// # Example
/// ```ignore
/// use ldif2csv::parse_str;
///
/// let ldif = "cn: test-group\nowner: uid=bob,ou=users,dc=example,dc=com\n";
/// let attributes = vec!["cn".to_string(), "owner".to_string()];
/// let records = parse_str(ldif, &attributes);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].get("cn"), Some("test-group"));
/// ```
pub fn parse_str(content: &str, attributes: &[String]) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current = Record::new();

    for line in content.lines() {
        if line.is_empty() {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
        } else {
            scan_line(line, attributes, &mut current);
        }
    }

    // ensure the final record gets recorded
    if !current.is_empty() {
        records.push(current);
    }

    records
}

/// Parse LDIF from a reader.
///
/// A read error aborts the whole parse; no partial records are returned.
pub fn parse_reader<R: Read>(reader: R, attributes: &[String]) -> LdifResult<Vec<Record>> {
    let buf = BufReader::new(reader);
    let mut records = Vec::new();
    let mut current = Record::new();

    for line in buf.lines() {
        let line = line?;
        if line.is_empty() {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
        } else {
            scan_line(&line, attributes, &mut current);
        }
    }

    if !current.is_empty() {
        records.push(current);
    }

    Ok(records)
}

/// Parse LDIF bytes with encoding auto-detection.
pub fn parse_bytes_auto(bytes: &[u8], attributes: &[String]) -> LdifResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let records = parse_str(&content, attributes);

    Ok(ParseResult { records, encoding })
}

/// Parse an LDIF file with encoding auto-detection.
///
/// # Example
/// ```ignore
/// let result = parse_file_auto("/path/to/groups.ldif", &attributes)?;
/// println!("Encoding: {}", result.encoding);
/// println!("Records: {}", result.records.len());
/// ```
pub fn parse_file_auto<P: AsRef<Path>>(path: P, attributes: &[String]) -> LdifResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes, attributes)
}

/// Parse an LDIF file as a raw byte stream, without encoding detection.
pub fn parse_file<P: AsRef<Path>>(path: P, attributes: &[String]) -> LdifResult<Vec<Record>> {
    let file = std::fs::File::open(path.as_ref())?;
    parse_reader(file, attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cn_owner() -> Vec<String> {
        vec!["cn".to_string(), "owner".to_string()]
    }

    const SINGLE_RECORD: &str = "\
# extended LDIF
#
# LDAPv3
# base <ou=groups,dc=example,dc=com> with scope subtree
# filter: (objectclass=*)
# requesting: cn owner
#

# test-group, groups, example.com
dn: cn=test-group,ou=groups,dc=example,dc=com
cn: test-group
owner: uid=bob,ou=users,dc=example,dc=com
";

    #[test]
    fn test_single_record() {
        let records = parse_str(SINGLE_RECORD, &cn_owner());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("cn"), Some("test-group"));
        assert_eq!(
            records[0].get("owner"),
            Some("uid=bob,ou=users,dc=example,dc=com")
        );
    }

    #[test]
    fn test_multiple_records() {
        let ldif = "\
# test-group, groups, example.com
dn: cn=test-group,ou=groups,dc=example,dc=com
cn: test-group
owner: uid=bob,ou=users,dc=example,dc=com

# test-group-2, groups, example.com
dn: cn=test-group-2,ou=groups,dc=example,dc=com
cn: test-group-2
owner: uid=bob,ou=users,dc=example,dc=com
";

        let records = parse_str(ldif, &cn_owner());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("cn"), Some("test-group"));
        assert_eq!(records[1].get("cn"), Some("test-group-2"));
    }

    #[test]
    fn test_multiple_values_in_single_field() {
        let ldif = "\
cn: test-group
owner: uid=bob,ou=users,dc=example,dc=com
owner: uid=frank,ou=users,dc=example,dc=com
";

        let records = parse_str(ldif, &cn_owner());

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get("owner"),
            Some("uid=bob,ou=users,dc=example,dc=com\nuid=frank,ou=users,dc=example,dc=com")
        );

        let owners: Vec<&str> = records[0].get("owner").unwrap().split('\n').collect();
        assert_eq!(owners.len(), 2);
        assert_eq!(owners[0], "uid=bob,ou=users,dc=example,dc=com");
        assert_eq!(owners[1], "uid=frank,ou=users,dc=example,dc=com");
    }

    #[test]
    fn test_trailing_record_without_blank_line() {
        let ldif = "cn: first\n\ncn: last";
        let records = parse_str(ldif, &cn_owner());

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("cn"), Some("last"));
    }

    #[test]
    fn test_consecutive_blank_lines_produce_no_empty_records() {
        let ldif = "cn: a\n\n\n\ncn: b\n\n";
        let records = parse_str(ldif, &cn_owner());

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_leading_comment_block_is_not_a_record() {
        let ldif = "\
# extended LDIF
# requesting: cn owner

cn: a
";
        let records = parse_str(ldif, &cn_owner());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("cn"), Some("a"));
    }

    #[test]
    fn test_unlisted_attributes_ignored() {
        let ldif = "\
dn: cn=a,ou=groups,dc=example,dc=com
cn: a
description: not requested
";
        let records = parse_str(ldif, &cn_owner());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("description"), None);
    }

    #[test]
    fn test_column_order_follows_input_not_allow_list() {
        let ldif = "owner: bob\ncn: test-group\n";
        let records = parse_str(ldif, &cn_owner());

        let names: Vec<&str> = records[0]
            .attributes()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["owner", "cn"]);
    }

    #[test]
    fn test_prefix_sharing_names_both_fire() {
        let attributes = vec!["cn".to_string(), "c".to_string()];
        let records = parse_str("cn: x\n", &attributes);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("cn"), Some("x"));
        assert_eq!(records[0].get("c"), Some(" x"));
    }

    #[test]
    fn test_short_matching_line_yields_empty_value() {
        // "cn" and "cn:" are too short for the `name: ` slice
        let records = parse_str("cn\n\ncn:\n", &cn_owner());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("cn"), Some(""));
        assert_eq!(records[1].get("cn"), Some(""));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_str("", &cn_owner()).is_empty());
        assert!(parse_str("\n\n\n", &cn_owner()).is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let ldif = "cn: a\r\n\r\ncn: b\r\n";
        let records = parse_str(ldif, &cn_owner());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("cn"), Some("a"));
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let records = parse_reader(SINGLE_RECORD.as_bytes(), &cn_owner()).unwrap();

        assert_eq!(records, parse_str(SINGLE_RECORD, &cn_owner()));
    }

    #[test]
    fn test_detect_encoding_normalizes_utf8() {
        assert_eq!(detect_encoding(b"cn: test-group\n"), "utf-8");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Societe" with accented e in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert!(decoded.contains("Soci"));
    }

    #[test]
    fn test_parse_bytes_auto() {
        let result = parse_bytes_auto(SINGLE_RECORD.as_bytes(), &cn_owner()).unwrap();

        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_parse_file_auto() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SINGLE_RECORD.as_bytes()).unwrap();

        let result = parse_file_auto(file.path(), &cn_owner()).unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].get("cn"), Some("test-group"));
    }

    #[test]
    fn test_parse_file_missing_path_is_an_error() {
        let err = parse_file("/no/such/file.ldif", &cn_owner()).unwrap_err();
        assert!(err.to_string().contains("Failed to read input"));
    }
}
