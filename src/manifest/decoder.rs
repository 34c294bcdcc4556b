//! Manifest text decoder
//!
//! Format: UTF-8 lines (`\r\n` or `\n`), first non-blank line is the header
//! row, fields split on `,` with no quoting. Blank lines are skipped.

/// Separates fields within a line
pub const FIELD_SEPARATOR: char = ',';

const BOM: char = '\u{feff}';

/// Header labels and raw rows, before record construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedManifest {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Decodes manifest text into headers and raw rows
pub fn decode(text: &str) -> DecodedManifest {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let headers = match lines.next() {
        Some(line) => split_fields(line),
        None => return DecodedManifest::default(),
    };

    DecodedManifest {
        headers,
        rows: lines.map(split_fields).collect(),
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(FIELD_SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_crlf() {
        let text = "Name,Age,Class,Passenger or Crew,Role,Survivor\r\n\
                    BROWN/ Mrs Margaret ,44,1st Class,Passenger,,T\r\n";
        let decoded = decode(text);

        assert_eq!(decoded.headers.len(), 6);
        assert_eq!(decoded.headers[3], "Passenger or Crew");
        assert_eq!(decoded.rows.len(), 1);
        assert_eq!(
            decoded.rows[0],
            vec!["BROWN/ Mrs Margaret ", "44", "1st Class", "Passenger", "", "T"]
        );
    }

    #[test]
    fn test_decode_lf_and_blank_lines() {
        let text = "A,B\n\nx,y\n   \nz,w\n";
        let decoded = decode(text);
        assert_eq!(decoded.headers, vec!["A", "B"]);
        assert_eq!(decoded.rows, vec![vec!["x", "y"], vec!["z", "w"]]);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), DecodedManifest::default());
        assert_eq!(decode("\r\n\r\n"), DecodedManifest::default());
    }

    #[test]
    fn test_decode_header_only() {
        let decoded = decode("Name,Age\n");
        assert_eq!(decoded.headers, vec!["Name", "Age"]);
        assert!(decoded.rows.is_empty());
    }

    #[test]
    fn test_decode_strips_bom() {
        let decoded = decode("\u{feff}Name,Age\nX,1");
        assert_eq!(decoded.headers[0], "Name");
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let decoded = decode("H\n a , b ,");
        assert_eq!(decoded.rows[0], vec![" a ", " b ", ""]);
    }
}
