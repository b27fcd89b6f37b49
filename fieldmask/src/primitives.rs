use crate::*;

/// A type usable as the key of a reflected map.
///
/// Mask segments are matched against the canonical string form of a key: decimal for integers, `true` / `false`
/// for booleans, and the string itself for strings.
pub trait MapKey {
    fn to_key_string(&self) -> SmolStr;
}

macro_rules! impl_scalar {
    ($($type:ty),*) => {
        $(
            impl Reflect for $type {
                #[inline]
                fn is_populated(&self) -> bool {
                    *self != <$type>::default()
                }

                #[inline]
                fn reflect_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Scalar
                }
            }
        )*
    };
}

/// `-0.0` is populated, presence is decided on the bit pattern.
macro_rules! impl_float {
    ($($type:ty),*) => {
        $(
            impl Reflect for $type {
                #[inline]
                fn is_populated(&self) -> bool {
                    self.to_bits() != 0
                }

                #[inline]
                fn reflect_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Scalar
                }
            }
        )*
    };
}

macro_rules! impl_map_key {
    ($($type:ty),*) => {
        $(
            impl MapKey for $type {
                #[inline]
                fn to_key_string(&self) -> SmolStr {
                    SmolStr::new(self.to_string())
                }
            }
        )*
    };
}

impl_scalar!(u64, u32, u16, u8, i64, i32, i16, i8, bool, String, SmolStr, Bytes);
impl_float!(f32, f64);
impl_map_key!(u64, u32, u16, u8, i64, i32, i16, i8, bool);

impl MapKey for String {
    fn to_key_string(&self) -> SmolStr {
        SmolStr::new(self)
    }
}

impl MapKey for SmolStr {
    fn to_key_string(&self) -> SmolStr {
        self.clone()
    }
}
