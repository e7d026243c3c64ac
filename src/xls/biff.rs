//! BIFF record framing.
//!
//! Each BIFF record consists of:
//! - Record type (2 bytes) - identifies the record
//! - Record length (2 bytes) - length of data in bytes
//! - Record data (variable length)
//!
//! Layouts follow "[MS-XLS]: Excel Binary File Format (.xls) Structure".

use crate::common::Result;
use crate::style::SheetPassword;
use std::io::Write;

/// PROTECT: sheet or workbook protection flag
pub const RECORD_PROTECT: u16 = 0x0012;
/// PASSWORD: 16-bit password verifier
pub const RECORD_PASSWORD: u16 = 0x0013;
/// XF: extended format
pub const RECORD_XF: u16 = 0x00E0;

/// Write a BIFF record header
///
/// # Arguments
///
/// * `writer` - Output writer
/// * `record_type` - BIFF record type (e.g., 0x00E0 for XF)
/// * `data_len` - Length of record data in bytes
#[inline]
pub fn write_record_header<W: Write>(
    writer: &mut W,
    record_type: u16,
    data_len: u16,
) -> Result<()> {
    writer.write_all(&record_type.to_le_bytes())?;
    writer.write_all(&data_len.to_le_bytes())?;
    Ok(())
}

/// Write a complete record: header followed by `payload`.
pub fn write_record<W: Write>(writer: &mut W, record_type: u16, payload: &[u8]) -> Result<()> {
    let len = u16::try_from(payload.len()).map_err(|_| {
        crate::common::Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("record 0x{:04X} payload exceeds 65535 bytes", record_type),
        ))
    })?;
    write_record_header(writer, record_type, len)?;
    writer.write_all(payload)?;
    Ok(())
}

/// Write PASSWORD record (0x0013).
pub fn write_password_record<W: Write>(writer: &mut W, password: &SheetPassword) -> Result<()> {
    write_record(writer, RECORD_PASSWORD, &password.hash().to_le_bytes())
}

/// Write PROTECT (0x0012) and, when a password is set, PASSWORD.
pub fn write_protection<W: Write>(writer: &mut W, password: Option<&SheetPassword>) -> Result<()> {
    write_record(writer, RECORD_PROTECT, &0x0001u16.to_le_bytes())?;
    if let Some(password) = password {
        write_password_record(writer, password)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PasswordInput;

    #[test]
    fn test_record_header() {
        let mut out = Vec::new();
        write_record_header(&mut out, RECORD_XF, 0x0014).unwrap();
        assert_eq!(out, [0xE0, 0x00, 0x14, 0x00]);
    }

    #[test]
    fn test_password_record() {
        let password = SheetPassword::new("a", PasswordInput::Plain).unwrap();
        let mut out = Vec::new();
        write_password_record(&mut out, &password).unwrap();
        assert_eq!(out, [0x13, 0x00, 0x02, 0x00, 0x88, 0xCE]);
    }

    #[test]
    fn test_protection_records() {
        let password = SheetPassword::new("CF03", PasswordInput::Hashed).unwrap();
        let mut out = Vec::new();
        write_protection(&mut out, Some(&password)).unwrap();
        assert_eq!(
            out,
            [0x12, 0x00, 0x02, 0x00, 0x01, 0x00, 0x13, 0x00, 0x02, 0x00, 0x03, 0xCF]
        );

        let mut unprotected = Vec::new();
        write_protection(&mut unprotected, None).unwrap();
        assert_eq!(unprotected.len(), 6);
    }

    #[test]
    fn test_oversized_record() {
        let mut out = Vec::new();
        let payload = vec![0u8; 70_000];
        assert!(write_record(&mut out, 0x003C, &payload).is_err());
        assert!(out.is_empty());
    }
}
