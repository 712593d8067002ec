use crate::types::key::fmt_hex;
use derive_more::From;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A stored byte sequence. Empty values are legitimate and are not deletions.
#[derive(From, PartialEq, Eq, Clone)]
pub struct Value(Arc<[u8]>);

impl Value {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }
}
impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Arc::from(bytes))
    }
}

impl Deref for Value {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(")?;
        fmt_hex(&self.0, f)?;
        write!(f, ")")
    }
}
