extern crate darling;
extern crate proc_macro;
extern crate syn;

use crate::proc_macro::TokenStream;
use darling::{ast, FromDeriveInput, FromField, FromVariant};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ext::IdentExt, DeriveInput, Ident};

#[derive(Debug, FromField)]
#[darling(attributes(field))]
struct MessageField {
    ident: Option<Ident>,
    #[darling(default)]
    skip: bool,
    #[darling(default)]
    oneof: bool,
    #[darling(default)]
    rename: Option<String>,
}

impl MessageField {
    fn ident(&self) -> &Ident {
        self.ident
            .as_ref()
            .expect("named structs are the only supported shape")
    }

    fn field_name(&self) -> String {
        self.rename
            .clone()
            .unwrap_or_else(|| self.ident().unraw().to_string())
    }
}

#[derive(Debug, FromVariant)]
#[darling(attributes(field))]
struct OneofVariant {
    ident: Ident,
    #[darling(default)]
    rename: Option<String>,
}

impl OneofVariant {
    fn field_name(&self) -> String {
        self.rename
            .clone()
            .unwrap_or_else(|| snake_case(&self.ident.unraw().to_string()))
    }
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(instance), supports(struct_named, enum_newtype))]
struct Instance {
    ident: Ident,
    generics: syn::Generics,
    data: ast::Data<OneofVariant, MessageField>,
    #[darling(default)]
    rename: Option<String>,
}

/// Derives the fieldmask reflection traits.
///
/// On a struct with named fields this implements `MessageInstance` and `Reflect`. Every field must implement
/// `Reflect`, except those marked `#[field(oneof)]` which must be an `Option` of a type deriving `Instance`.
///
/// On an enum of newtype variants this implements `OneofInstance`. Variant names are converted to snake case to
/// get the field name, `#[field(rename = "...")]` overrides that.
#[proc_macro_derive(Instance, attributes(field, instance))]
pub fn derive(stream: TokenStream) -> TokenStream {
    let parsed = syn::parse_macro_input!(stream as DeriveInput);
    let instance = match Instance::from_derive_input(&parsed) {
        Ok(instance) => instance,
        Err(e) => return e.write_errors().into(),
    };
    let gen = match &instance.data {
        ast::Data::Struct(fields) => message_derive(&instance, fields),
        ast::Data::Enum(variants) => oneof_derive(&instance, variants),
    };
    gen.into()
}

fn message_derive(instance: &Instance, fields: &ast::Fields<MessageField>) -> TokenStream2 {
    let struct_name = &instance.ident;
    let message_name = instance
        .rename
        .clone()
        .unwrap_or_else(|| struct_name.unraw().to_string());
    let (impl_generics, ty_generics, where_clause) = instance.generics.split_for_impl();
    let fields: Vec<_> = fields.iter().filter(|f| !f.skip).collect();

    let populated: Vec<_> = fields
        .iter()
        .map(|field| {
            let ident = field.ident();
            if field.oneof {
                quote! {
                    if let ::std::option::Option::Some(member) = &self.#ident {
                        fields.push(::fieldmask::OneofInstance::field_name(member));
                    }
                }
            } else {
                let name = field.field_name();
                quote! {
                    if ::fieldmask::Reflect::is_populated(&self.#ident) {
                        fields.push(::fieldmask::SmolStr::new(#name));
                    }
                }
            }
        })
        .collect();

    let (oneofs, plain): (Vec<&MessageField>, Vec<&MessageField>) =
        fields.iter().copied().partition(|f| f.oneof);
    let plain_idents: Vec<_> = plain.iter().map(|f| f.ident()).collect();
    let plain_names: Vec<_> = plain.iter().map(|f| f.field_name()).collect();
    let oneof_idents: Vec<_> = oneofs.iter().map(|f| f.ident()).collect();

    quote! {
        impl #impl_generics ::fieldmask::MessageInstance for #struct_name #ty_generics #where_clause {
            fn name(&self) -> ::fieldmask::SmolStr {
                ::fieldmask::SmolStr::new(#message_name)
            }

            #[allow(unused_mut)]
            fn populated_fields(&self) -> ::std::vec::Vec<::fieldmask::SmolStr> {
                let mut fields = ::std::vec::Vec::new();
                #(#populated)*
                fields
            }

            fn field_mut(&mut self, field: &str) -> ::std::option::Option<::fieldmask::FieldMut<'_>> {
                match field {
                    #(#plain_names => return ::std::option::Option::Some(::fieldmask::Reflect::reflect_mut(&mut self.#plain_idents)),)*
                    _ => {}
                }
                #(
                    if let ::std::option::Option::Some(member) = &mut self.#oneof_idents {
                        if ::fieldmask::OneofInstance::field_name(member).as_str() == field {
                            return ::std::option::Option::Some(::fieldmask::OneofInstance::reflect_mut(member));
                        }
                    }
                )*
                ::std::option::Option::None
            }

            fn clear_field(&mut self, field: &str) {
                match field {
                    #(#plain_names => self.#plain_idents = ::std::default::Default::default(),)*
                    _ => {}
                }
                #(
                    let set = self.#oneof_idents.as_ref().map_or(false, |member| {
                        ::fieldmask::OneofInstance::field_name(member).as_str() == field
                    });
                    if set {
                        self.#oneof_idents = ::std::option::Option::None;
                    }
                )*
            }

            fn as_message_mut(&mut self) -> &mut dyn ::fieldmask::MessageInstance {
                self
            }
        }

        impl #impl_generics ::fieldmask::Reflect for #struct_name #ty_generics #where_clause {
            fn is_populated(&self) -> bool {
                !::fieldmask::MessageInstance::populated_fields(self).is_empty()
            }

            fn reflect_mut(&mut self) -> ::fieldmask::FieldMut<'_> {
                ::fieldmask::FieldMut::Message(self)
            }
        }
    }
}

fn oneof_derive(instance: &Instance, variants: &[OneofVariant]) -> TokenStream2 {
    let enum_name = &instance.ident;
    let (impl_generics, ty_generics, where_clause) = instance.generics.split_for_impl();
    let variant_idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let variant_names: Vec<_> = variants.iter().map(|v| v.field_name()).collect();

    quote! {
        impl #impl_generics ::fieldmask::OneofInstance for #enum_name #ty_generics #where_clause {
            fn field_name(&self) -> ::fieldmask::SmolStr {
                match self {
                    #(#enum_name::#variant_idents(_) => ::fieldmask::SmolStr::new(#variant_names),)*
                }
            }

            fn reflect_mut(&mut self) -> ::fieldmask::FieldMut<'_> {
                match self {
                    #(#enum_name::#variant_idents(value) => ::fieldmask::Reflect::reflect_mut(value),)*
                }
            }
        }
    }
}

/// `UserId` -> `user_id`, the inverse of how prost names oneof variants.
///
/// A digit following a lowercase letter starts a new word, so `Item1` -> `item_1` and `Photo2d` -> `photo_2d`.
/// A digit after a capital stays attached to it, `PhotoV2` -> `photo_v2`.
fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev_lower = false;
    for (i, c) in ident.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            if c.is_ascii_digit() && prev_lower {
                out.push('_');
            }
            out.push(c);
        }
        prev_lower = c.is_lowercase();
    }
    out
}
