use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, Result};

/// Read a FASTA-like record: an optional `>` header line followed by one
/// sequence line. Anything after the first whitespace on the sequence line
/// is ignored.
pub fn read_fasta_like<R: BufRead>(reader: R) -> Result<(Option<String>, String)> {
    let mut header: Option<String> = None;
    let mut sequence: Option<String> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            if sequence.is_some() {
                break;
            } else {
                continue;
            }
        }

        if line.starts_with('>') {
            header = Some(line.to_string());
        } else {
            let token = line.split_whitespace().next().unwrap();
            sequence = Some(token.to_string());
            break;
        }
    }

    let sequence = sequence.ok_or_else(|| anyhow!("Missing sequence line"))?;
    Ok((header, sequence))
}

pub fn read_fasta_like_string(s: &str) -> Result<(Option<String>, String)> {
    read_fasta_like(Cursor::new(s))
}

pub fn read_fasta_like_file<P: AsRef<Path>>(path: P) -> Result<(Option<String>, String)> {
    let reader = BufReader::new(File::open(path)?);
    read_fasta_like(reader)
}

pub fn read_fasta_like_stdin() -> Result<(Option<String>, String)> {
    let reader = BufReader::new(stdin());
    read_fasta_like(reader)
}

/// Read either from stdin ("-") or a file path.
pub fn read_fasta_like_input(s: &str) -> Result<(Option<String>, String)> {
    if s == "-" {
        read_fasta_like_stdin()
    } else {
        read_fasta_like_file(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_with_header() {
        let (hdr, seq) = read_fasta_like_string(">test\nACGU\n").unwrap();
        assert_eq!(hdr, Some(">test".into()));
        assert_eq!(seq, "ACGU");
    }

    #[test]
    fn test_read_bare_sequence() {
        let (hdr, seq) = read_fasta_like_string("ACGU extra tokens\n").unwrap();
        assert_eq!(hdr, None);
        assert_eq!(seq, "ACGU");
    }

    #[test]
    fn test_missing_sequence() {
        assert!(read_fasta_like_string(">only a header\n").is_err());
        assert!(read_fasta_like_string("").is_err());
    }
}
