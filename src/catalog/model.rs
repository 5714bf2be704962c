use anyhow::{Error, bail};
use serde::{Deserialize, Serialize};

/// Which physical instance of a repeated key produced the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum KeyLocation {
    Standard,
    Left,
    Right,
    Numpad,
}

impl KeyLocation {
    pub fn as_u8(self) -> u8 {
        match self {
            KeyLocation::Standard => 0,
            KeyLocation::Left => 1,
            KeyLocation::Right => 2,
            KeyLocation::Numpad => 3,
        }
    }

    /// Human label shown next to the raw location value.
    pub fn label(self) -> &'static str {
        match self {
            KeyLocation::Standard => "General keys",
            KeyLocation::Left => "Left-side modifier keys",
            KeyLocation::Right => "Right-side modifier keys",
            KeyLocation::Numpad => "Numpad",
        }
    }
}

impl TryFrom<u8> for KeyLocation {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(KeyLocation::Standard),
            1 => Ok(KeyLocation::Left),
            2 => Ok(KeyLocation::Right),
            3 => Ok(KeyLocation::Numpad),
            other => bail!("unknown key location {other}"),
        }
    }
}

impl From<KeyLocation> for u8 {
    fn from(location: KeyLocation) -> Self {
        location.as_u8()
    }
}

/// One keyboard key as reported by a `KeyboardEvent`.
///
/// Every field is optional: the default value is the empty record, which the
/// resolver returns when nothing matches and which serializes as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEventRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub which: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<KeyLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode: Option<String>,
}

impl KeyEventRecord {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Non-empty `key` value.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }

    /// Non-empty `code` value.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }

    /// Non-zero `keyCode` value.
    pub fn key_code(&self) -> Option<u32> {
        self.key_code.filter(|code| *code != 0)
    }

    /// Non-empty `description` value.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }

    /// True when the record can be linked to a page of its own.
    pub fn is_linkable(&self) -> bool {
        self.code().is_some() || self.key_code().is_some()
    }
}

/// On-disk shape of the keycode dataset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyTableFile {
    pub schema_version: String,
    pub keys: Vec<KeyEventRecord>,
}
