/*!
Per-connection encoding policy.

A connection keeps four independent profiles, because drivers do not reliably tie the encoding of metadata or of `SQL_CHAR` data to whichever API variant was called:

| Role | Used for | Default |
| --- | --- | --- |
| `Write` | text parameters | UTF-16LE, `SQL_C_WCHAR` |
| `ReadChar` | `SQL_CHAR` columns | UTF-8, `SQL_C_CHAR` |
| `ReadWChar` | `SQL_WCHAR` columns | UTF-16LE, `SQL_C_WCHAR` |
| `Metadata` | column names and other catalog text | UTF-16LE, `SQL_C_WCHAR` |

Building and replacing a policy when the connection's settings change is the caller's job; a policy is a plain value.
*/
use log::debug;

use crate::encoding::OptEnc;
use crate::error::ProfileError;
use crate::ffi::{SQLSMALLINT, SQL_CHAR, SQL_WCHAR, SQL_WMETADATA};
use crate::profile::{ElementWidth, EncodingProfile};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Write,
    ReadChar,
    ReadWChar,
    Metadata,
}

impl Role {
    /**
    Maps the SQL type accepted by `set_decoding` to a read role.
    */
    pub fn from_sql_type(sql_type: SQLSMALLINT) -> Option<Role> {
        match sql_type {
            SQL_CHAR => Some(Role::ReadChar),
            SQL_WCHAR => Some(Role::ReadWChar),
            SQL_WMETADATA => Some(Role::Metadata),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingPolicy {
    write: EncodingProfile,
    read_char: EncodingProfile,
    read_wchar: EncodingProfile,
    metadata: EncodingProfile,
}

impl Default for EncodingPolicy {
    fn default() -> Self {
        let utf16 = EncodingProfile::optimized(OptEnc::Utf16Le, ElementWidth::Wide);
        EncodingPolicy {
            write: utf16.clone(),
            read_char: EncodingProfile::optimized(OptEnc::Utf8, ElementWidth::Narrow),
            read_wchar: utf16.clone(),
            metadata: utf16,
        }
    }
}

impl EncodingPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self, role: Role) -> &EncodingProfile {
        match role {
            Role::Write => &self.write,
            Role::ReadChar => &self.read_char,
            Role::ReadWChar => &self.read_wchar,
            Role::Metadata => &self.metadata,
        }
    }

    pub fn set_profile(&mut self, role: Role, profile: EncodingProfile) {
        debug!("{:?} encoding set to {}", role, profile);
        let slot = match role {
            Role::Write => &mut self.write,
            Role::ReadChar => &mut self.read_char,
            Role::ReadWChar => &mut self.read_wchar,
            Role::Metadata => &mut self.metadata,
        };
        *slot = profile;
    }

    /**
    Sets the encoding used for text parameters.

    See `EncodingProfile::from_label` for how `label` and `width` are interpreted.
    */
    pub fn set_encoding(&mut self, label: &str, width: Option<ElementWidth>) -> Result<(), ProfileError> {
        let profile = EncodingProfile::from_label(label, width)?;
        self.set_profile(Role::Write, profile);
        Ok(())
    }

    /**
    Sets the decoding used for `SQL_CHAR` data, `SQL_WCHAR` data, or metadata (`SQL_WMETADATA`).

    # Failure

    Fails if `sql_type` is none of those three, or if `label` is not a usable encoding.  On failure the policy is unchanged.
    */
    pub fn set_decoding(
        &mut self,
        sql_type: SQLSMALLINT,
        label: &str,
        width: Option<ElementWidth>,
    ) -> Result<(), ProfileError> {
        let role = Role::from_sql_type(sql_type).ok_or(ProfileError::UnknownSqlType(sql_type))?;
        let profile = EncodingProfile::from_label(label, width)?;
        self.set_profile(role, profile);
        Ok(())
    }
}
