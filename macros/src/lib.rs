use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;

/// Generate a color model from a struct with one named field per channel.
///
/// Every field is made public and the struct gets `Clone`, `Copy`, `Debug`
/// and `PartialEq`. Alongside the struct this generates:
///
/// * `CHANNELS`, the title cased channel names in field order,
/// * a `const fn new` taking every channel in field order,
/// * `to_array` and `map`,
/// * conversions to and from `[Component; N]`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must use named fields, one for each channel of the color.")
        }
        .into();
    };

    if named.named.is_empty() {
        return quote! {
            compile_error!("Models must have at least one channel.")
        }
        .into();
    }

    // Make sure the channel fields are public.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let fields = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let count = fields.len();

    let channel_names = fields
        .iter()
        .map(|ident| ident.to_string().to_case(Case::Title))
        .collect::<Vec<_>>();

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let struct_name = input.ident.clone();
    let indices = (0..count).map(syn::Index::from).collect::<Vec<_>>();

    let model_impl = quote! {
        impl #struct_name {
            /// Display names of the channels, in field order.
            pub const CHANNELS: [&'static str; #count] = [#(#channel_names,)*];

            /// Create a new color from its channels.
            pub const fn new(#(#fields: crate::color::Component,)*) -> Self {
                Self { #(#fields,)* }
            }

            /// Return the channels as an array, in field order.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#fields,)*]
            }

            /// Return a new color with each channel mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(crate::color::Component) -> crate::color::Component) -> Self {
                Self { #(#fields: f(self.#fields),)* }
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                Self { #(#fields: value[#indices],)* }
            }
        }

        impl From<#struct_name> for [crate::color::Component; #count] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
