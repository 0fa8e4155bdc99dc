//! Derive macros for the Tasklist reducer architecture
//!
//! This crate provides procedural macros to reduce boilerplate when building
//! reducer-driven features.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `tasklist_core::action::Action` for action enums
//!
//! # Example
//!
//! ```ignore
//! use tasklist_core::action::Action as _;
//! use tasklist_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo { text: String },
//!
//!     #[indexed]
//!     RemoveTodo { index: usize },
//! }
//!
//! // Generated methods:
//! assert_eq!(TodoAction::AddTodo { text: "test".into() }.action_type(), "AddTodo");
//! assert!(TodoAction::RemoveTodo { index: 0 }.is_indexed());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for Action enums
///
/// Implements `tasklist_core::action::Action`:
/// - `action_type()` - Returns the variant name
/// - `is_indexed()` - Returns true for variants marked `#[indexed]`
///
/// # Attributes
///
/// - `#[indexed]` - Mark a variant as addressing an element by position
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - `#[indexed]` is placed on a unit variant (there is no index to carry)
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum PlaylistAction {
///     Append { title: String },
///
///     #[indexed]
///     Skip { index: usize },
///
///     Clear,
/// }
///
/// let action = PlaylistAction::Skip { index: 3 };
/// assert_eq!(action.action_type(), "Skip");
/// assert!(action.is_indexed());
/// ```
#[proc_macro_derive(Action, attributes(indexed))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut action_type_arms = Vec::new();
    let mut indexed_arms = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let type_name = variant_name.to_string();
        let is_indexed = has_attribute(&variant.attrs, "indexed");

        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Unit => {
                if is_indexed {
                    return syn::Error::new_spanned(
                        variant,
                        "#[indexed] variants must carry an index field",
                    )
                    .to_compile_error()
                    .into();
                }
                quote! { Self::#variant_name }
            },
        };

        if is_indexed {
            indexed_arms.push(quote! { #pattern => true, });
        }
        action_type_arms.push(quote! { #pattern => #type_name, });
    }

    let expanded = quote! {
        impl #impl_generics ::tasklist_core::action::Action for #name #ty_generics #where_clause {
            fn action_type(&self) -> &'static str {
                match *self {
                    #(#action_type_arms)*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_indexed(&self) -> bool {
                match *self {
                    #(#indexed_arms)*
                    _ => false,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

#[cfg(test)]
mod tests {
    // Macro tests live in the tests/ directory
}
