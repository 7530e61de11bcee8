use std::collections::HashMap;

use super::Record;

impl Record for () {
    type Item = ();

    fn into_item(self) -> Self::Item {}

    fn from_item(_item: Self::Item) -> Self {}
}

impl<T: Record> Record for Vec<T> {
    type Item = Vec<T::Item>;

    fn into_item(self) -> Self::Item {
        self.into_iter().map(Record::into_item).collect()
    }

    fn from_item(item: Self::Item) -> Self {
        item.into_iter().map(Record::from_item).collect()
    }
}

impl<T: Record> Record for Option<T> {
    type Item = Option<T::Item>;

    fn into_item(self) -> Self::Item {
        self.map(Record::into_item)
    }

    fn from_item(item: Self::Item) -> Self {
        item.map(Record::from_item)
    }
}

impl<T: Record> Record for HashMap<String, T> {
    type Item = HashMap<String, T::Item>;

    fn into_item(self) -> Self::Item {
        self.into_iter()
            .map(|(name, record)| (name, record.into_item()))
            .collect()
    }

    fn from_item(item: Self::Item) -> Self {
        item.into_iter()
            .map(|(name, item)| (name, T::from_item(item)))
            .collect()
    }
}

/// Implement [Record] for primitive types that are their own item.
macro_rules! primitive {
    ($type:ty) => {
        impl Record for $type {
            type Item = $type;

            fn into_item(self) -> Self::Item {
                self
            }

            fn from_item(item: Self::Item) -> Self {
                item
            }
        }
    };
}

primitive!(String);
primitive!(bool);
primitive!(f64);
primitive!(f32);
primitive!(u64);
primitive!(u32);
primitive!(u16);
primitive!(u8);
primitive!(i64);
primitive!(i32);
primitive!(i16);
primitive!(i8);
primitive!(usize);
