use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Which role a field plays in the node.
#[derive(PartialEq, Eq)]
enum FieldRole {
    Link,
    Data,
}

/// Parses a field marker: `#[node(link)]` or `#[node(data)]`.
fn field_role(field: &Field) -> syn::Result<Option<FieldRole>> {
    let mut role = None;
    for attr in &field.attrs {
        if !attr.path().is_ident("node") {
            continue;
        }
        let key: Ident = attr.parse_args()?;
        let parsed = match key.to_string().as_str() {
            "link" => FieldRole::Link,
            "data" => FieldRole::Data,
            _ => {
                return Err(syn::Error::new(
                    key.span(),
                    "expected `#[node(link)]` or `#[node(data)]`",
                ));
            }
        };
        if role.is_some() {
            return Err(syn::Error::new_spanned(attr, "field is already marked"));
        }
        role = Some(parsed);
    }
    Ok(role)
}

/// Derive macro that lets a struct be queued in a mailbox.
///
/// The struct must embed a `DoubleLink<Self>` marked with `#[node(link)]`.
/// Marking another field with `#[node(data)]` also implements `NodeWithData`
/// with that field as the letter.
///
/// The generated `Node` impl is `unsafe impl`: every link accessor goes
/// through the embedded `DoubleLink<Self>`, so a field of any other type
/// fails to compile instead of producing a node that lies about its links.
///
/// ```ignore
/// #[derive(Node)]
/// struct Job {
///     #[node(link)]
///     link: DoubleLink<Self>,
///     #[node(data)]
///     id: u64,
///     attempts: u32,
/// }
/// ```
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::mola_mailbox };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            let node_attr = attr.parse_args::<NodeAttribute>()?;
            let path = node_attr.crate_path;
            crate_path = quote! { #path };
            break;
        }
    }

    let traits_path = quote! { #crate_path::linked_list::intrusive::traits };
    // Pinning the accessors to `DoubleLink<Self>` rejects any other link type.
    let double_link = quote! { #crate_path::linked_list::intrusive::link::DoubleLink<Self> };

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => fields,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Node derive macro only supports structs with named fields",
            ));
        }
    };

    let mut link_field: Option<&Field> = None;
    let mut data_field: Option<&Field> = None;

    for field in fields.named.iter() {
        let slot = match field_role(field)? {
            Some(FieldRole::Link) => &mut link_field,
            Some(FieldRole::Data) => &mut data_field,
            None => continue,
        };
        if slot.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "only one field may carry this marker",
            ));
        }
        *slot = Some(field);
    }

    let link_field = link_field.ok_or_else(|| {
        syn::Error::new_spanned(
            struct_name,
            "Struct must have a `DoubleLink<Self>` field marked with `#[node(link)]`",
        )
    })?;
    let link = &link_field.ident;

    let link_impl = quote! {
        impl #impl_generics #traits_path::Link for #struct_name #ty_generics #where_clause {
            type Target = Self;

            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<Self>> {
                <#double_link as #traits_path::Link>::next(&self.#link)
            }

            #[inline]
            fn set_next(&mut self, next: Option<::core::ptr::NonNull<Self>>) {
                <#double_link as #traits_path::Link>::set_next(&mut self.#link, next);
            }
        }

        impl #impl_generics #traits_path::LinkWithPrev for #struct_name #ty_generics #where_clause {
            #[inline]
            fn prev(&self) -> Option<::core::ptr::NonNull<Self>> {
                <#double_link as #traits_path::LinkWithPrev>::prev(&self.#link)
            }

            #[inline]
            fn set_prev(&mut self, prev: Option<::core::ptr::NonNull<Self>>) {
                <#double_link as #traits_path::LinkWithPrev>::set_prev(&mut self.#link, prev);
            }
        }

        unsafe impl #impl_generics #traits_path::Node for #struct_name #ty_generics #where_clause {}
    };

    // Generate `NodeWithData` trait implementation if a data field is marked
    let data_impl = if let Some(data_field) = data_field {
        let data = &data_field.ident;
        let data_type = &data_field.ty;
        quote! {
            impl #impl_generics #traits_path::NodeWithData for #struct_name #ty_generics #where_clause {
                type Data = #data_type;

                #[inline]
                fn data(&self) -> &Self::Data {
                    &self.#data
                }

                #[inline]
                fn data_mut(&mut self) -> &mut Self::Data {
                    &mut self.#data
                }
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        #link_impl
        #data_impl
    })
}
