use serde::{Serialize, de::DeserializeOwned};

/// Trait to define a family of types which can be recorded by any [recorder](crate::record::Recorder).
pub trait Record: Sized {
    /// Type of the serializable item.
    type Item: Serialize + DeserializeOwned;

    /// Convert the current record into the corresponding item.
    fn into_item(self) -> Self::Item;

    /// Convert the given item into a record.
    fn from_item(item: Self::Item) -> Self;
}
