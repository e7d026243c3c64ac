//! Cell protection flags and the legacy sheet password verifier.

use super::alignment::lookup_name;
use crate::common::{Error, Result};
use phf::phf_map;

/// Tri-state protection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProtectionState {
    /// Use the workbook default (locked, not hidden)
    #[default]
    Inherit,
    Protected,
    Unprotected,
}

static PROTECTION_NAMES: phf::Map<&'static str, ProtectionState> = phf_map! {
    "inherit" => ProtectionState::Inherit,
    "protected" => ProtectionState::Protected,
    "unprotected" => ProtectionState::Unprotected,
};

impl ProtectionState {
    /// Parse a protection state; unknown names fall back to [`ProtectionState::Inherit`].
    pub fn from_name(name: &str) -> Self {
        lookup_name(&PROTECTION_NAMES, name, "protection state")
    }
}

/// Cell protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Protection {
    pub locked: ProtectionState,
    pub hidden: ProtectionState,
}

impl Protection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether either flag differs from [`ProtectionState::Inherit`].
    #[inline]
    pub fn is_customized(&self) -> bool {
        self.locked != ProtectionState::Inherit || self.hidden != ProtectionState::Inherit
    }
}

/// How a password handed to [`SheetPassword::new`] is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordInput {
    /// Plain text, hashed internally
    Plain,
    /// Already hashed, given as a hexadecimal verifier (e.g. `"CE88"`)
    Hashed,
}

/// 16-bit sheet protection verifier as stored in the PASSWORD record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetPassword {
    hash: u16,
}

impl SheetPassword {
    /// Build a verifier from caller input, explicitly flagged as plain or hashed.
    pub fn new(password: &str, input: PasswordInput) -> Result<Self> {
        let hash = match input {
            PasswordInput::Plain => hash_password(password),
            PasswordInput::Hashed => u16::from_str_radix(password.trim(), 16).map_err(|_| {
                Error::configuration(format!("invalid hashed password {:?}", password))
            })?,
        };
        Ok(Self { hash })
    }

    #[inline]
    pub fn hash(&self) -> u16 {
        self.hash
    }

    /// Uppercase hexadecimal form of the verifier.
    pub fn to_hex(&self) -> String {
        format!("{:04X}", self.hash)
    }
}

/// Legacy XOR password hash used by sheet and workbook protection.
///
/// Note: This is NOT a secure hash! It only deters casual editing.
pub fn hash_password(password: &str) -> u16 {
    let mut hash: u16 = 0;

    for (position, &byte) in password.as_bytes().iter().enumerate() {
        let shift = (position as u32 + 1) % 15;
        let value = (byte as u32) << shift;
        let rotated = value >> 15;
        hash ^= ((value & 0x7FFF) | rotated) as u16;
    }

    hash ^= password.len() as u16;
    hash ^ 0xCE4B
}
