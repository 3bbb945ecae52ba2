//! Built-in example catalog: display names, file labels, sources and explanations.

use serde::Serialize;

mod sources;

/// Text returned for a file label or name that has no source.
pub const NOT_FOUND: &str = "// Example not found";

/// Whether an example is a plain Rust program or a Stylus contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKind {
    Plain,
    Contract,
}

impl ExampleKind {
    pub fn label(self) -> &'static str {
        match self {
            ExampleKind::Plain => "Rust",
            ExampleKind::Contract => "Stylus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    /// Name shown in the selector.
    pub name: &'static str,
    /// File label shown in the editor caption.
    pub file: &'static str,
    pub kind: ExampleKind,
    #[serde(skip)]
    pub explanation: &'static str,
}

impl Example {
    pub fn source(&self) -> &'static str {
        lookup(self.file)
    }
}

const SOURCES: &[(&str, &str)] = &[
    ("hello.rs", sources::HELLO),
    ("variable.rs", sources::VARIABLE),
    ("functions.rs", sources::FUNCTIONS),
    ("stylus_variables.rs", sources::STYLUS_VARIABLES),
    ("stylus_constants.rs", sources::STYLUS_CONSTANTS),
    ("stylus_functions.rs", sources::STYLUS_FUNCTIONS),
];

const EXAMPLES: &[Example] = &[
    Example {
        name: "Hello world!",
        file: "hello.rs",
        kind: ExampleKind::Plain,
        explanation: "\
# Hello world

`fn main()` is the entry point of every Rust binary. The `println!` macro \
formats its arguments and writes a line to standard output; the `!` marks it \
as a macro rather than a function call.

A Stylus contract has no `main`. Its entry point is generated by the \
`#[entrypoint]` attribute and output goes through `console!` instead of stdout.",
    },
    Example {
        name: "Variable binding",
        file: "variable.rs",
        kind: ExampleKind::Plain,
        explanation: "\
# Variable binding

`let` binds a value to a name. Bindings are immutable unless declared with \
`let mut`. The type is inferred (`true` is a `bool`) or fixed with a literal \
suffix such as `5u32`.

`{:?}` prints a value with its `Debug` representation, which is why the \
string shows up with quotes.",
    },
    Example {
        name: "Stylus Variables",
        file: "stylus_variables.rs",
        kind: ExampleKind::Contract,
        explanation: "\
# Stylus variables

Contracts know three kinds of variables:

* **local** variables live only for the duration of a call, exactly like in \
plain Rust;
* **state** variables are fields of the `#[storage]` struct and persist in \
contract storage (`StorageBool`, `StorageAddress`, `StorageU256`);
* **global** variables describe the current call and block, such as \
`block::timestamp()` and `msg::sender()`.

This file needs the `stylus_sdk` crate and the Stylus toolchain; a bare \
`rustc` reports unresolved imports.",
    },
    Example {
        name: "Stylus Constants",
        file: "stylus_constants.rs",
        kind: ExampleKind::Contract,
        explanation: "\
# Stylus constants

`const` items are inlined at compile time and cost no storage. They are a \
good fit for fixed configuration such as an owner address or a supply cap.

`Address::parse_checksummed` validates the EIP-55 checksum of the owner \
constant before it is used.",
    },
    Example {
        name: "Functions",
        file: "functions.rs",
        kind: ExampleKind::Plain,
        explanation: "\
# Functions

Functions are declared with `fn`, take typed parameters and declare their \
return type after `->`. The last expression of the body, without a trailing \
semicolon, is the return value.

`if` is an expression too, so each branch can produce the value returned by \
`describe`.",
    },
    Example {
        name: "Stylus Functions",
        file: "stylus_functions.rs",
        kind: ExampleKind::Contract,
        explanation: "\
# Stylus functions

Methods inside a `#[public]` impl block are exported in the contract ABI and \
can be called externally. `&self` methods are views that only read storage; \
`&mut self` methods may write it.

Methods in a plain `impl` block stay internal helpers and are not part of \
the ABI.",
    },
];

/// All examples, in selector order.
pub fn all() -> &'static [Example] {
    EXAMPLES
}

pub fn names() -> impl Iterator<Item = &'static str> {
    EXAMPLES.iter().map(|e| e.name)
}

/// Find an example by its display name.
pub fn find(name: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|e| e.name == name)
}

pub fn position(name: &str) -> Option<usize> {
    EXAMPLES.iter().position(|e| e.name == name)
}

/// Source text for a file label, or [`NOT_FOUND`].
pub fn lookup(file: &str) -> &'static str {
    SOURCES
        .iter()
        .find(|(label, _)| *label == file)
        .map(|(_, src)| *src)
        .unwrap_or(NOT_FOUND)
}

/// Source text for a display name, or [`NOT_FOUND`].
pub fn source_for(name: &str) -> &'static str {
    find(name).map(|e| e.source()).unwrap_or(NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_example_has_source() {
        for example in all() {
            let src = example.source();
            assert!(!src.is_empty(), "{} is empty", example.name);
            assert_ne!(src, NOT_FOUND, "{} has no source", example.name);
            assert!(!example.explanation.is_empty());
        }
    }

    #[test]
    fn test_selector_order() {
        let got: Vec<_> = names().collect();
        assert_eq!(
            got,
            [
                "Hello world!",
                "Variable binding",
                "Stylus Variables",
                "Stylus Constants",
                "Functions",
                "Stylus Functions",
            ]
        );
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        assert_eq!(lookup("missing.rs"), NOT_FOUND);
        assert_eq!(source_for("No such example"), NOT_FOUND);
        assert!(find("No such example").is_none());
    }

    #[test]
    fn test_lookup_by_name_and_file_agree() {
        let hello = find("Hello world!").unwrap();
        assert_eq!(hello.file, "hello.rs");
        assert_eq!(source_for("Hello world!"), lookup("hello.rs"));
        assert!(hello.source().contains("Hello World! Rust works!"));
    }

    #[test]
    fn test_contracts_are_flagged() {
        for example in all() {
            let is_stylus = example.source().contains("stylus_sdk");
            assert_eq!(is_stylus, example.kind == ExampleKind::Contract, "{}", example.name);
        }
    }

    #[test]
    fn test_file_labels_are_unique() {
        let mut files: Vec<_> = all().iter().map(|e| e.file).collect();
        files.sort_unstable();
        files.dedup();
        assert_eq!(files.len(), all().len());
    }
}
