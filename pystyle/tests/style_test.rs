//! Behavioral tests for the styling core over a corpus of representative files.

#![allow(clippy::unwrap_used)]

use pystyle::style::format_source;

const CORPUS: &[&str] = &[
    "",
    "x = 1",
    "# only a comment\n",
    "\n\n\n# spaced\n\n\n",
    "\"\"\"Module docstring.\"\"\"\n\nimport os\nfrom typing import List  # typing\nfrom . import sibling\n",
    "def a():\n    pass\n# hello\ndef b():\n    pass\n",
    "x = 1\n\n\n\n# about f\n\n\n@decorator\ndef f(x: int) -> int:\n    return x  # identity\n",
    "class C:\n    # inside\n    x: int = 1\n\n    def m(self):\n        pass\nC()\n",
    "from os import (\n    path,  # needed\n    sep,\n)\nfrom abc import ABC\nvalue: int = 3\n",
    "if True:\n    pass\n# tail one\n\n\n\n# tail two\n",
    "x = 1; y = 2  # both\nz = 3\n",
    "import sys\r\nfrom os import path\r\ndef main():\r\n    pass\r\n",
    "@a\n# between decorators\n@b\nclass D:\n    pass\n",
];

fn comments(text: &str) -> Vec<String> {
    let mut found: Vec<String> = text
        .lines()
        .filter_map(|line| line.find('#').map(|i| line[i..].trim().to_owned()))
        .collect();
    found.sort();
    found
}

#[test]
fn test_styling_is_idempotent() {
    for source in CORPUS {
        let once = format_source(source).unwrap();
        let twice = format_source(&once).unwrap();
        assert_eq!(once, twice, "not idempotent for {source:?}");
    }
}

#[test]
fn test_every_comment_survives_exactly_once() {
    for source in CORPUS {
        let styled = format_source(source).unwrap();
        assert_eq!(comments(source), comments(&styled), "comments lost for {source:?}");
    }
}

#[test]
fn test_no_double_blank_lines_and_single_final_newline() {
    for source in CORPUS {
        let styled = format_source(source).unwrap().replace("\r\n", "\n");
        assert!(!styled.contains("\n\n\n"), "blank run kept for {source:?}");
        assert!(!styled.starts_with('\n'), "leading blank for {source:?}");
        if !styled.is_empty() {
            assert!(styled.ends_with('\n') && !styled.ends_with("\n\n"));
        }
    }
}

#[test]
fn test_imports_are_relocated_to_the_top() {
    let styled = format_source(
        "\"\"\"Doc.\"\"\"\nimport os\nfrom .b import y\nx = 1\nfrom a import z\n",
    )
    .unwrap();
    assert_eq!(
        styled,
        "from a import z\nfrom .b import y\n\n\"\"\"Doc.\"\"\"\nimport os\nx = 1\n"
    );
}

#[test]
fn test_definitions_are_separated_by_a_blank_line() {
    let styled = format_source("x = 1\ndef f():\n    pass\nclass C:\n    pass\n").unwrap();
    assert_eq!(
        styled,
        "x = 1\n\ndef f():\n    pass\n\nclass C:\n    pass\n"
    );
}

#[test]
fn test_comment_before_definition_is_kept_with_it() {
    assert_eq!(
        format_source("def a():\n    pass\n# hello\ndef b():\n    pass\n").unwrap(),
        "def a():\n    pass\n\n# hello\ndef b():\n    pass\n"
    );
}

#[test]
fn test_trailing_comments_are_kept_after_last_statement() {
    assert_eq!(
        format_source("x = 1\n\n\n\n# the end\n\n\n").unwrap(),
        "x = 1\n\n# the end\n"
    );
}

#[test]
fn test_comment_inside_statement_body_is_untouched() {
    let source = "class C:\n    # inside\n    x: int = 1\n\n\n\n    def m(self):\n        pass\n";
    assert_eq!(format_source(source).unwrap(), source);
}

#[test]
fn test_crlf_line_endings_are_preserved() {
    assert_eq!(
        format_source("x = 1\r\nfrom os import path\r\n").unwrap(),
        "from os import path\r\n\r\nx = 1\r\n"
    );
}

#[test]
fn test_syntax_error_is_reported() {
    let err = format_source("def f(:\n").unwrap_err();
    assert!(err.to_string().starts_with("syntax error at 1:"));
}
