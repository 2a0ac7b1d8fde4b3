//! Lexer, parser, and AST for **dashbar attribute sheets** (`.attrs`).
//!
//! An attribute sheet is a list of named blocks of `key: value` pairs. It is
//! the configuration source for widgets: the UI layer looks up the block for
//! a widget type and reads its initial attributes from it.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Sheet`, `Block`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use dashbar_attrs::parse_str;
//!
//! let src = r#"
//!     DashedProgressBar {
//!         max_dash_count: 5
//!         dash_color: #00ffff
//!     }
//! "#;
//!
//! let sheet = parse_str(src).unwrap();
//! let block = sheet.block("DashedProgressBar").unwrap();
//! assert_eq!(block.number("max_dash_count"), Some(5.0));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Block, Prop, Sheet, Value};
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> Sheet { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn empty_sheet() { assert!(ok("").blocks.is_empty()); }
    #[test] fn comments_only() { assert!(ok("// nothing\n/* here */").blocks.is_empty()); }
    #[test] fn empty_block() { assert!(ok("DashedProgressBar { }").blocks[0].props.is_empty()); }

    #[test]
    fn full_widget_block() {
        let sheet = ok(r#"
            DashedProgressBar {
                dash_color: #00ffff
                dash_background_color: #888888ff
                max_dash_count: 5
                current_dash_count: 2
                easing: accelerate_decelerate
                label: "upload"
            }
        "#);
        let b = sheet.block("DashedProgressBar").unwrap();
        assert_eq!(b.color("dash_color"), Some([0, 255, 255, 255]));
        assert_eq!(b.number("current_dash_count"), Some(2.0));
        assert_eq!(b.value("easing"), Some(&Value::Ident("accelerate_decelerate".into())));
        assert_eq!(b.value("label"), Some(&Value::Str("upload".into())));
        assert_eq!(b.props.len(), 6);
    }

    #[test]
    fn props_on_one_line() {
        let b = ok("Bar { a: 1  b: -2  c: 0.5 }").blocks.remove(0);
        assert_eq!(b.number("b"), Some(-2.0));
        assert_eq!(b.number("c"), Some(0.5));
    }

    #[test]
    fn last_duplicate_wins() {
        let b = ok("Bar { a: 1 a: 2 }").blocks.remove(0);
        assert_eq!(b.number("a"), Some(2.0));
    }

    #[test]
    fn multiple_blocks_lookup_by_name() {
        let sheet = ok("One { x: 1 } Two { x: 2 }");
        assert_eq!(sheet.block("Two").and_then(|b| b.number("x")), Some(2.0));
        assert!(sheet.block("Three").is_none());
    }

    #[test]
    fn typed_getters_reject_wrong_kind() {
        let b = ok("Bar { a: #ffffff }").blocks.remove(0);
        assert_eq!(b.number("a"), None);
        assert_eq!(b.value("a").map(Value::kind), Some("color"));
    }

    #[test]
    fn prop_positions_are_recorded() {
        let b = ok("Bar {\n    key: 1\n}").blocks.remove(0);
        let p = b.prop("key").unwrap();
        assert_eq!((p.line, p.col), (2, 5));
    }

    #[test] fn err_bad_color() { err("Bar { c: #xyz }"); }
    #[test] fn err_unclosed_string() { err(r#"Bar { s: "oops }"#); }
    #[test] fn err_double_colon() { err("Bar { gap: : 8 }"); }
    #[test] fn err_missing_brace() { err("Bar a: 1 }"); }

    #[test]
    fn err_unclosed_block_points_at_eof() {
        let e = err("Bar {\n  a: 1\n");
        assert!(e.message.contains("unclosed"));
        assert_eq!(e.line, 3);
    }

    #[test]
    fn err_value_missing() {
        let e = err("Bar { a: }");
        assert!(e.message.contains("expected a value"));
    }
}
