//! Derive macros for decoding result rows into structs.
//!
//! This crate provides the `#[derive(FromRow)]` macro, which implements
//! `fbsql_core::FromRow` by looking up one column per named field.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, GenericArgument, Lit, Meta,
    PathArguments, Type,
};

/// Derives `FromRow` for a struct with named fields.
///
/// # Attributes
///
/// - `#[row(table = "table_name")]` - Scopes every lookup to the given
///   table unless the caller passes another one (optional, unscoped by
///   default)
///
/// # Field Attributes
///
/// - `#[column(name = "column_name")]` - Specifies the column name
///   (optional, defaults to the field name)
/// - `#[column(skip)]` - Does not read the field; it is filled with
///   `Default::default()`
///
/// Fields of type `Option<T>` are optional: a missing column or a NULL
/// value decodes as `None`. Every other field is required.
#[proc_macro_derive(FromRow, attributes(row, column))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_from_row_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn derive_from_row_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let table_name = get_table_name(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "FromRow derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "FromRow derive only supports structs",
            ));
        }
    };

    let mut initializers: Vec<TokenStream2> = Vec::new();
    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let column_attrs = parse_column_attrs(&field.attrs)?;

        if column_attrs.skip {
            initializers.push(quote! {
                #field_name: ::core::default::Default::default()
            });
            continue;
        }

        let column_name = column_attrs
            .name
            .unwrap_or_else(|| field_name.to_string());
        let lookup = match option_inner(&field.ty) {
            Some(inner) => quote! { decoder.optional_field::<#inner>(#column_name)? },
            None => {
                let ty = &field.ty;
                quote! { decoder.field::<#ty>(#column_name)? }
            }
        };
        initializers.push(quote! { #field_name: #lookup });
    }

    let table_const = table_name.map(|name| {
        quote! {
            const TABLE: ::core::option::Option<&'static str> =
                ::core::option::Option::Some(#name);
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::fbsql_core::decode::FromRow for #struct_name #ty_generics #where_clause {
            #table_const

            fn from_row(
                decoder: &::fbsql_core::decode::RowDecoder<'_>,
            ) -> ::core::result::Result<Self, ::fbsql_core::error::DecodeError> {
                ::core::result::Result::Ok(Self {
                    #(#initializers),*
                })
            }
        }
    };

    Ok(expanded)
}

struct ColumnAttrs {
    name: Option<String>,
    skip: bool,
}

fn string_value(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<Option<String>> {
    let value: Expr = meta.value()?.parse()?;
    if let Expr::Lit(lit) = value {
        if let Lit::Str(s) = lit.lit {
            return Ok(Some(s.value()));
        }
    }
    Err(meta.error("expected a string literal"))
}

fn get_table_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut table_name = None;
    for attr in attrs {
        if attr.path().is_ident("row") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    table_name = string_value(&meta)?;
                    Ok(())
                } else {
                    Err(meta.error("unsupported row attribute"))
                }
            })?;
        }
    }
    Ok(table_name)
}

fn parse_column_attrs(attrs: &[Attribute]) -> syn::Result<ColumnAttrs> {
    let mut result = ColumnAttrs {
        name: None,
        skip: false,
    };

    for attr in attrs {
        if attr.path().is_ident("column") {
            // Handle empty attribute like #[column]
            if matches!(attr.meta, Meta::Path(_)) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    result.skip = true;
                } else if meta.path.is_ident("name") {
                    result.name = string_value(&meta)?;
                } else {
                    return Err(meta.error("unsupported column attribute"));
                }
                Ok(())
            })?;
        }
    }

    Ok(result)
}

/// Returns `T` when the type is spelled `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}
