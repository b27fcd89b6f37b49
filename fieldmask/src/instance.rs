use crate::*;

/// A reflected message.
///
/// This is the surface the mask traversal needs from a message: which fields are populated, mutable
/// access to a field by name, and clearing a field. Use `#[derive(Instance)]` rather than implementing it
/// by hand where possible.
pub trait MessageInstance {
    /// Returns the name of the message type
    fn name(&self) -> SmolStr;

    /// Returns the names of populated fields in declaration order.
    ///
    /// Fields holding their default value, and members of a oneof group that are not set, are left out.
    fn populated_fields(&self) -> Vec<SmolStr>;

    /// Returns mutable access to a field by name.
    fn field_mut(&mut self, field: &str) -> Option<FieldMut<'_>>;

    /// Resets a field to its default value. Clearing the set member of a oneof clears the whole group.
    fn clear_field(&mut self, field: &str);

    fn as_message_mut(&mut self) -> &mut dyn MessageInstance;
}

impl std::fmt::Debug for dyn MessageInstance + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(&self.name())
            .field(&self.populated_fields())
            .finish()
    }
}

/// Mutable access to a field of a [`MessageInstance`], tagged by the kind of field.
pub enum FieldMut<'a> {
    /// A value with no structure to descend into
    Scalar,
    /// A singular sub-message
    Message(&'a mut dyn MessageInstance),
    /// A repeated field
    List(&'a mut dyn ListInstance),
    /// A key/value map
    Map(&'a mut dyn MapInstance),
}

/// The kind of a field, without the borrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Scalar,
    Message,
    List,
    Map,
}

impl<'a> FieldMut<'a> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldMut::Scalar => FieldKind::Scalar,
            FieldMut::Message(_) => FieldKind::Message,
            FieldMut::List(_) => FieldKind::List,
            FieldMut::Map(_) => FieldKind::Map,
        }
    }

    /// Returns the sub-message if this is a message field.
    pub fn into_message(self) -> Option<&'a mut dyn MessageInstance> {
        match self {
            FieldMut::Message(msg) => Some(msg),
            _ => None,
        }
    }
}

impl std::fmt::Debug for FieldMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.kind(), f)
    }
}

/// A reflected repeated field
pub trait ListInstance {
    /// Returns the number of elements
    fn len(&self) -> usize;

    /// Returns whether the list is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index` if it is a message.
    fn message_mut(&mut self, index: usize) -> Option<&mut dyn MessageInstance>;
}

/// A reflected map field
pub trait MapInstance {
    /// Returns the number of entries
    fn len(&self) -> usize;

    /// Returns whether the map is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every entry, removing those for which `f` returns false.
    ///
    /// `f` receives the key stringified through [`MapKey`], and the value when it is a message.
    fn retain_entries(&mut self, f: &mut dyn FnMut(&str, Option<&mut dyn MessageInstance>) -> bool);
}

/// A reflected oneof group.
///
/// Only the member that is currently set is visible. It is reported by the containing message under
/// its own field name, not the name of the group.
pub trait OneofInstance {
    /// Returns the field name of the set member.
    fn field_name(&self) -> SmolStr;

    /// Returns mutable access to the set member.
    fn reflect_mut(&mut self) -> FieldMut<'_>;
}
