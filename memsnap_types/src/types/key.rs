use crate::StoreError;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A non-empty byte sequence identifying an entry within a table.
///
/// Equality and hashing cover every byte, so a `Key` may be looked up by any `&[u8]`.
/// `Key` is not `Ord`; scans order keys explicitly by unsigned byte comparison.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct Key(Arc<[u8]>);

impl Key {
    /// Fails iff `bytes` cannot form a `Key`.
    pub fn check(bytes: &[u8]) -> Result<(), StoreError> {
        if bytes.is_empty() {
            return Err(StoreError::InvalidArgument("key must not be empty"));
        }
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = StoreError;
    fn try_from(bytes: &[u8]) -> Result<Self, StoreError> {
        Self::check(bytes)?;
        Ok(Self(Arc::from(bytes)))
    }
}
impl TryFrom<Vec<u8>> for Key {
    type Error = StoreError;
    fn try_from(bytes: Vec<u8>) -> Result<Self, StoreError> {
        Self::check(&bytes)?;
        Ok(Self(Arc::from(bytes)))
    }
}

impl Deref for Key {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

/* Key is look-up-able by &[u8]. */
impl Borrow<[u8]> for Key {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(")?;
        fmt_hex(&self.0, f)?;
        write!(f, ")")
    }
}

pub(crate) fn fmt_hex(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "0x")?;
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}
