use crate::*;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Any type that can be stored in a field of a reflected message.
///
/// [`Reflect`] is implemented for primitives and the standard containers, and by the derive macro for every
/// message. It tells the traversal whether a field is populated, and what kind of field it is.
pub trait Reflect {
    /// Returns true if the value differs from its default, following proto3 presence rules.
    fn is_populated(&self) -> bool;

    fn reflect_mut(&mut self) -> FieldMut<'_>;
}

/// An unset `Option` is never descended into.
impl<T: Reflect> Reflect for Option<T> {
    fn is_populated(&self) -> bool {
        self.is_some()
    }

    fn reflect_mut(&mut self) -> FieldMut<'_> {
        match self {
            Some(value) => value.reflect_mut(),
            None => FieldMut::Scalar,
        }
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn is_populated(&self) -> bool {
        self.as_ref().is_populated()
    }

    fn reflect_mut(&mut self) -> FieldMut<'_> {
        self.as_mut().reflect_mut()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }

    fn reflect_mut(&mut self) -> FieldMut<'_> {
        FieldMut::List(self)
    }
}

impl<T: Reflect> ListInstance for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn message_mut(&mut self, index: usize) -> Option<&mut dyn MessageInstance> {
        self.get_mut(index)?.reflect_mut().into_message()
    }
}

impl<K: MapKey + Eq + Hash, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }

    fn reflect_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Map(self)
    }
}

impl<K: MapKey + Eq + Hash, V: Reflect, S: BuildHasher> MapInstance for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn retain_entries(&mut self, f: &mut dyn FnMut(&str, Option<&mut dyn MessageInstance>) -> bool) {
        self.retain(|key, value| f(key.to_key_string().as_str(), value.reflect_mut().into_message()))
    }
}

impl<K: MapKey + Ord, V: Reflect> Reflect for BTreeMap<K, V> {
    fn is_populated(&self) -> bool {
        !self.is_empty()
    }

    fn reflect_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Map(self)
    }
}

impl<K: MapKey + Ord, V: Reflect> MapInstance for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn retain_entries(&mut self, f: &mut dyn FnMut(&str, Option<&mut dyn MessageInstance>) -> bool) {
        self.retain(|key, value| f(key.to_key_string().as_str(), value.reflect_mut().into_message()))
    }
}
