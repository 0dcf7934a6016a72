//! Derive macro for the puzzle-solver plugin system

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro turning a puzzle type into a registered solution.
///
/// Generates two things from the `#[solution(...)]` attribute:
/// - a `Solver` impl whose `solve_part` dispatches parts `1..=parts` to the
///   type's `PartSolver<N>` impls (a missing `PartSolver` impl is a
///   compile error at the dispatch site),
/// - an `inventory::submit!` of a `SolverPlugin`, so the type is picked up
///   by `RegistryBuilder::register_plugins`.
///
/// # Attributes
///
/// - `year`: required, the Advent of Code year
/// - `day`: required, the day number (1-25)
/// - `parts`: optional, number of parts (default 2; day 25 uses 1)
/// - `tags`: optional, array of string literals for registry filtering
///
/// # Example
///
/// ```ignore
/// use puzzle_solver_derive::Solution;
///
/// #[derive(Solution)]
/// #[solution(year = 2022, day = 3, tags = ["sets"])]
/// pub struct Solver;
///
/// // impl InputParser for Solver { ... }
/// // impl PartSolver<1> for Solver { ... }
/// // impl PartSolver<2> for Solver { ... }
/// ```
#[proc_macro_derive(Solution, attributes(solution))]
pub fn derive_solution(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("solution"))
        .expect("Solution derive requires a #[solution(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut parts: u8 = 2;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            if let Lit::Int(lit) = meta.value()?.parse()? {
                year = Some(lit.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            if let Lit::Int(lit) = meta.value()?.parse()? {
                day = Some(lit.base10_parse()?);
            }
        } else if meta.path.is_ident("parts") {
            if let Lit::Int(lit) = meta.value()?.parse()? {
                parts = lit.base10_parse()?;
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                if let Lit::Str(lit) = content.parse()? {
                    tags.push(lit.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unknown key in #[solution(...)]"));
        }
        Ok(())
    })
    .expect("failed to parse #[solution(...)] attribute");

    let year = year.expect("#[solution(...)] needs a 'year'");
    let day = day.expect("#[solution(...)] needs a 'day'");
    assert!(
        (1..=25).contains(&parts),
        "#[solution(...)] 'parts' must be between 1 and 25"
    );

    let part_arms = (1..=parts).map(|n| {
        quote! {
            #n => <Self as ::puzzle_solver::PartSolver<#n>>::solve(shared),
        }
    });

    let tag_strs = tags.iter().map(|s| s.as_str());

    let expanded = quote! {
        impl ::puzzle_solver::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut Self::Shared<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::puzzle_solver::SolveError> {
                match part {
                    #(#part_arms)*
                    p => ::std::result::Result::Err(
                        ::puzzle_solver::SolveError::PartNotImplemented(p),
                    ),
                }
            }
        }

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tag_strs),*],
            }
        }
    };

    TokenStream::from(expanded)
}
