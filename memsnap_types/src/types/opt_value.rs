/// A pending write: either a replacement value or a deletion marker.
///
/// "No pending write" is represented by the absence of an `OptValue`, never by `Tombstone`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum OptValue<T> {
    Tombstone,
    Some(T),
}

impl<T> OptValue<T> {
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Self::Tombstone)
    }

    pub fn as_ref(&self) -> OptValue<&T> {
        match self {
            Self::Tombstone => OptValue::Tombstone,
            Self::Some(t) => OptValue::Some(t),
        }
    }
}

impl<T> From<Option<T>> for OptValue<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => OptValue::Tombstone,
            Some(t) => OptValue::Some(t),
        }
    }
}
impl<T> From<OptValue<T>> for Option<T> {
    fn from(opt: OptValue<T>) -> Self {
        match opt {
            OptValue::Tombstone => None,
            OptValue::Some(t) => Some(t),
        }
    }
}
