use eyre::{ensure, Result};

fn identifier(kind: &str, s: &str) -> Result<()> {
    ensure!(!s.is_empty(), "BED {} can't be empty", kind);
    ensure!(
        s.len() <= 255,
        "BED {} can't be longer than 255 characters",
        kind
    );

    for c in s.chars() {
        ensure!(
            c.is_ascii() && !c.is_ascii_whitespace() && !c.is_ascii_control(),
            "BED {} can only contain printable non-whitespace ASCII characters, got: {:?}",
            kind,
            s
        );
    }

    Ok(())
}

pub fn seqid(s: &str) -> Result<()> {
    identifier("seqid", s)
}

pub fn name(s: &str) -> Result<()> {
    identifier("name", s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(seqid("000000F").is_ok());
        assert!(name("000123F-001-01").is_ok());
        assert!(seqid("").is_err());
        assert!(seqid("ctg 1").is_err());
        assert!(name("ctg\t1").is_err());
        assert!(name(&"x".repeat(256)).is_err());
        assert!(name("контиг").is_err());
    }
}
