//! Procedural macros for defining taskboard operations
//!
//! `#[operation(verb = "...", noun = "...", description = "...")]` implements
//! `taskboard_operations::Operation` for a command struct. Parameter metadata
//! is derived from the struct's named fields and their doc comments.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, DeriveInput, Expr, Field, Fields, GenericArgument, Lit, LitStr,
    Meta, PathArguments, Type,
};

/// Attribute macro for defining an operation
///
/// ```ignore
/// #[operation(verb = "add", noun = "task", description = "Create a new task")]
/// #[derive(Debug, Deserialize, Serialize)]
/// pub struct AddTask {
///     /// The task title
///     pub title: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn operation(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut verb: Option<LitStr> = None;
    let mut noun: Option<LitStr> = None;
    let mut description: Option<LitStr> = None;

    let arg_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("verb") {
            verb = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("noun") {
            noun = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("description") {
            description = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error("unknown operation attribute"));
        }
        Ok(())
    });
    parse_macro_input!(attr with arg_parser);

    let input = parse_macro_input!(item as DeriveInput);

    let (verb, noun, description) = match (verb, noun, description) {
        (Some(v), Some(n), Some(d)) => (v, n, d),
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "operation requires verb, noun and description",
            )
            .to_compile_error()
            .into()
        }
    };

    let params = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().map(param_meta).collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "operation does not support tuple structs",
                )
                .to_compile_error()
                .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(&input.ident, "operation only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let name = &input.ident;
    let count = params.len();

    let expanded = quote! {
        #input

        impl taskboard_operations::Operation for #name {
            fn verb(&self) -> &'static str {
                #verb
            }

            fn noun(&self) -> &'static str {
                #noun
            }

            fn description(&self) -> &'static str {
                #description
            }

            fn parameters(&self) -> &'static [taskboard_operations::ParamMeta] {
                static PARAMS: [taskboard_operations::ParamMeta; #count] = [
                    #(#params),*
                ];
                &PARAMS
            }
        }
    };

    TokenStream::from(expanded)
}

fn param_meta(field: &Field) -> proc_macro2::TokenStream {
    let name = field
        .ident
        .as_ref()
        .map(|i| i.to_string())
        .unwrap_or_default();
    let description = doc_comment(&field.attrs);
    let required = !is_option(&field.ty);
    let param_type = param_type(&field.ty);

    quote! {
        taskboard_operations::ParamMeta::new(#name)
            .description(#description)
            .param_type(#param_type)
            .required_if(#required)
    }
}

fn doc_comment(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => Some(s.value().trim().to_string()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(path) => path.path.segments.last(),
        _ => None,
    }
}

fn is_option(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|s| s.ident == "Option")
}

fn param_type(ty: &Type) -> proc_macro2::TokenStream {
    let Some(segment) = last_segment(ty) else {
        return quote! { taskboard_operations::ParamType::String };
    };

    let ident = segment.ident.to_string();
    match ident.as_str() {
        "Option" => {
            if let PathArguments::AngleBracketed(args) = &segment.arguments {
                if let Some(GenericArgument::Type(inner)) = args.args.first() {
                    return param_type(inner);
                }
            }
            quote! { taskboard_operations::ParamType::String }
        }
        "Vec" => quote! { taskboard_operations::ParamType::Array },
        "bool" => quote! { taskboard_operations::ParamType::Boolean },
        "i32" | "i64" | "u32" | "u64" | "usize" | "isize" | "BoardId" | "ColumnId" => {
            quote! { taskboard_operations::ParamType::Integer }
        }
        "f32" | "f64" => quote! { taskboard_operations::ParamType::Number },
        _ => quote! { taskboard_operations::ParamType::String },
    }
}
