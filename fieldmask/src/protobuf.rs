//! Reflection for the protobuf well-known types shipped in `prost-types`.
//!
//! These follow the protobuf schema of each type, so a `google.protobuf.Struct` is a message with a single map
//! field called `fields`, and a path into one looks like `metadata.fields.owner.string_value`.
use crate::*;
use prost_types::{value::Kind, Any, Duration, ListValue, Struct, Timestamp, Value};

macro_rules! impl_message_reflect {
    ($($type:ty),*) => {
        $(
            impl Reflect for $type {
                fn is_populated(&self) -> bool {
                    !MessageInstance::populated_fields(self).is_empty()
                }

                fn reflect_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Message(self)
                }
            }
        )*
    };
}

impl_message_reflect!(Any, Timestamp, Duration, Struct, Value, ListValue);

/// Pushes the names of the populated fields among `$field`s.
macro_rules! populated {
    ($self:ident, $($field:ident),*) => {{
        let mut fields = Vec::new();
        $(
            if Reflect::is_populated(&$self.$field) {
                fields.push(SmolStr::new(stringify!($field)));
            }
        )*
        fields
    }};
}

impl MessageInstance for Any {
    fn name(&self) -> SmolStr {
        SmolStr::new("google.protobuf.Any")
    }

    fn populated_fields(&self) -> Vec<SmolStr> {
        populated!(self, type_url, value)
    }

    fn field_mut(&mut self, field: &str) -> Option<FieldMut<'_>> {
        match field {
            "type_url" => Some(self.type_url.reflect_mut()),
            "value" => Some(self.value.reflect_mut()),
            _ => None,
        }
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "type_url" => self.type_url.clear(),
            "value" => self.value.clear(),
            _ => {}
        }
    }

    fn as_message_mut(&mut self) -> &mut dyn MessageInstance {
        self
    }
}

macro_rules! impl_seconds_nanos {
    ($type:ty, $name:literal) => {
        impl MessageInstance for $type {
            fn name(&self) -> SmolStr {
                SmolStr::new($name)
            }

            fn populated_fields(&self) -> Vec<SmolStr> {
                populated!(self, seconds, nanos)
            }

            fn field_mut(&mut self, field: &str) -> Option<FieldMut<'_>> {
                match field {
                    "seconds" | "nanos" => Some(FieldMut::Scalar),
                    _ => None,
                }
            }

            fn clear_field(&mut self, field: &str) {
                match field {
                    "seconds" => self.seconds = 0,
                    "nanos" => self.nanos = 0,
                    _ => {}
                }
            }

            fn as_message_mut(&mut self) -> &mut dyn MessageInstance {
                self
            }
        }
    };
}

impl_seconds_nanos!(Timestamp, "google.protobuf.Timestamp");
impl_seconds_nanos!(Duration, "google.protobuf.Duration");

impl MessageInstance for Struct {
    fn name(&self) -> SmolStr {
        SmolStr::new("google.protobuf.Struct")
    }

    fn populated_fields(&self) -> Vec<SmolStr> {
        populated!(self, fields)
    }

    fn field_mut(&mut self, field: &str) -> Option<FieldMut<'_>> {
        match field {
            "fields" => Some(self.fields.reflect_mut()),
            _ => None,
        }
    }

    fn clear_field(&mut self, field: &str) {
        if field == "fields" {
            self.fields.clear();
        }
    }

    fn as_message_mut(&mut self) -> &mut dyn MessageInstance {
        self
    }
}

impl MessageInstance for ListValue {
    fn name(&self) -> SmolStr {
        SmolStr::new("google.protobuf.ListValue")
    }

    fn populated_fields(&self) -> Vec<SmolStr> {
        populated!(self, values)
    }

    fn field_mut(&mut self, field: &str) -> Option<FieldMut<'_>> {
        match field {
            "values" => Some(self.values.reflect_mut()),
            _ => None,
        }
    }

    fn clear_field(&mut self, field: &str) {
        if field == "values" {
            self.values.clear();
        }
    }

    fn as_message_mut(&mut self) -> &mut dyn MessageInstance {
        self
    }
}

/// `kind` is a oneof, so a `Value` only ever exposes the member that is set.
impl OneofInstance for Kind {
    fn field_name(&self) -> SmolStr {
        SmolStr::new(match self {
            Kind::NullValue(_) => "null_value",
            Kind::NumberValue(_) => "number_value",
            Kind::StringValue(_) => "string_value",
            Kind::BoolValue(_) => "bool_value",
            Kind::StructValue(_) => "struct_value",
            Kind::ListValue(_) => "list_value",
        })
    }

    fn reflect_mut(&mut self) -> FieldMut<'_> {
        match self {
            Kind::StructValue(s) => FieldMut::Message(s),
            Kind::ListValue(l) => FieldMut::Message(l),
            _ => FieldMut::Scalar,
        }
    }
}

impl MessageInstance for Value {
    fn name(&self) -> SmolStr {
        SmolStr::new("google.protobuf.Value")
    }

    fn populated_fields(&self) -> Vec<SmolStr> {
        self.kind.iter().map(OneofInstance::field_name).collect()
    }

    fn field_mut(&mut self, field: &str) -> Option<FieldMut<'_>> {
        match &mut self.kind {
            Some(kind) if kind.field_name().as_str() == field => Some(kind.reflect_mut()),
            _ => None,
        }
    }

    fn clear_field(&mut self, field: &str) {
        if self.kind.as_ref().map_or(false, |kind| kind.field_name().as_str() == field) {
            self.kind = None;
        }
    }

    fn as_message_mut(&mut self) -> &mut dyn MessageInstance {
        self
    }
}

impl<R> From<&prost_types::FieldMask> for FieldMask<R> {
    fn from(mask: &prost_types::FieldMask) -> Self {
        FieldMask::from_paths(&mask.paths)
    }
}

impl<R> From<prost_types::FieldMask> for FieldMask<R> {
    fn from(mask: prost_types::FieldMask) -> Self {
        FieldMask::from_paths(mask.paths)
    }
}

impl<R> From<&FieldMask<R>> for prost_types::FieldMask {
    fn from(mask: &FieldMask<R>) -> Self {
        prost_types::FieldMask {
            paths: mask.paths(),
        }
    }
}
