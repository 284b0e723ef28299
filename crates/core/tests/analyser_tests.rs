//! End-to-end tests of the analyser over its public API.
//!
//! Every tree fixture is checked through both entry points, a reused
//! `Analyser` instance and the one-shot path, which must agree on
//! every (input, options) pair.

use argtree_core::analyser::Analyser;
use argtree_core::error::{Error, ScanError};
use argtree_core::items::ArgItem;
use argtree_core::options::{Options, Quotes};

fn standard_options() -> Options {
    Options {
        group_delimiters: vec![("[", "]").into(), ("(", ")").into(), ("{", "}").into()],
        quotes: Quotes::Both,
    }
}

fn check_with(options: &Options, input: &str, expected: &[ArgItem]) {
    let analyser = Analyser::new(options).unwrap();
    assert_eq!(
        analyser.analyse(input).unwrap(),
        expected,
        "reused instance: {input:?}"
    );
    assert_eq!(
        Analyser::analyse_once(input, options).unwrap(),
        expected,
        "one shot: {input:?}"
    );
}

fn check(input: &str, expected: &[ArgItem]) {
    check_with(&standard_options(), input, expected);
}

fn check_scan_error(input: &str, expected: ScanError) {
    let options = standard_options();
    let analyser = Analyser::new(&options).unwrap();
    assert_eq!(
        analyser.analyse(input),
        Err(expected),
        "reused instance: {input:?}"
    );
    match Analyser::analyse_once(input, &options) {
        Err(Error::Scan(error)) => assert_eq!(error, expected, "one shot: {input:?}"),
        other => panic!("expected a scan error for {input:?}, got {other:?}"),
    }
}

#[test]
fn test_bare_words() {
    check(
        "hello world !",
        &[
            ArgItem::word("hello"),
            ArgItem::word("world"),
            ArgItem::word("!"),
        ],
    );
}

#[test]
fn test_whitespace_collapsing() {
    check(
        "   a      lot of              space",
        &[
            ArgItem::word("a"),
            ArgItem::word("lot"),
            ArgItem::word("of"),
            ArgItem::word("space"),
        ],
    );
}

#[test]
fn test_empty_and_whitespace_only_input() {
    check("", &[]);
    check("   \t  \n ", &[]);
}

#[test]
fn test_square_bracket_group() {
    check(
        "[a group]",
        &[ArgItem::group(
            ("[", "]"),
            vec![ArgItem::word("a"), ArgItem::word("group")],
        )],
    );
}

#[test]
fn test_parenthesis_group() {
    check(
        "(another group)",
        &[ArgItem::group(
            ("(", ")"),
            vec![ArgItem::word("another"), ArgItem::word("group")],
        )],
    );
}

#[test]
fn test_brace_group() {
    check(
        "{again group}",
        &[ArgItem::group(
            ("{", "}"),
            vec![ArgItem::word("again"), ArgItem::word("group")],
        )],
    );
}

#[test]
fn test_empty_group_still_produces_an_item() {
    check("[]", &[ArgItem::group(("[", "]"), vec![])]);
    check("[   ]", &[ArgItem::group(("[", "]"), vec![])]);
}

#[test]
fn test_double_quoted_string() {
    check(
        "\"a double quoted string\"",
        &[ArgItem::quoted('"', "a double quoted string")],
    );
}

#[test]
fn test_simple_quoted_string() {
    check(
        "'a simple quoted string'",
        &[ArgItem::quoted('\'', "a simple quoted string")],
    );
}

#[test]
fn test_simple_quote_inside_double_quotes() {
    check("\"it's a string\"", &[ArgItem::quoted('"', "it's a string")]);
}

#[test]
fn test_double_quotes_inside_simple_quotes() {
    check(
        "'\"a string in another !\"'",
        &[ArgItem::quoted('\'', "\"a string in another !\"")],
    );
}

#[test]
fn test_escaped_double_quotes() {
    check(
        "\"escape the \\\"string\\\"\"",
        &[ArgItem::quoted('"', "escape the \"string\"")],
    );
}

#[test]
fn test_escaped_simple_quote() {
    check("'It\\'s a string'", &[ArgItem::quoted('\'', "It's a string")]);
}

#[test]
fn test_empty_quoted_string_produces_no_item() {
    check("\"\"", &[]);
    check("a '' b", &[ArgItem::word("a"), ArgItem::word("b")]);
}

#[test]
fn test_mixed_kinds_at_root_level() {
    check(
        "translate \"Hello world !\" in [french spanish]",
        &[
            ArgItem::word("translate"),
            ArgItem::quoted('"', "Hello world !"),
            ArgItem::word("in"),
            ArgItem::group(
                ("[", "]"),
                vec![ArgItem::word("french"), ArgItem::word("spanish")],
            ),
        ],
    );
}

#[test]
fn test_group_delimiters_are_inert_inside_quotes() {
    check(
        "\"a group (its me) inside a quote\"",
        &[ArgItem::quoted('"', "a group (its me) inside a quote")],
    );
}

#[test]
fn test_recursive_groups() {
    check(
        "[deep { in (the [rabbit (hole) ] )} ]",
        &[ArgItem::group(
            ("[", "]"),
            vec![
                ArgItem::word("deep"),
                ArgItem::group(
                    ("{", "}"),
                    vec![
                        ArgItem::word("in"),
                        ArgItem::group(
                            ("(", ")"),
                            vec![
                                ArgItem::word("the"),
                                ArgItem::group(
                                    ("[", "]"),
                                    vec![
                                        ArgItem::word("rabbit"),
                                        ArgItem::group(("(", ")"), vec![ArgItem::word("hole")]),
                                    ],
                                ),
                            ],
                        ),
                    ],
                ),
            ],
        )],
    );
}

#[test]
fn test_word_abutting_an_opener_is_kept() {
    check(
        "foo[bar]",
        &[
            ArgItem::word("foo"),
            ArgItem::group(("[", "]"), vec![ArgItem::word("bar")]),
        ],
    );
}

#[test]
fn test_adjacent_closers_are_legal() {
    check(
        "[x (a)]",
        &[ArgItem::group(
            ("[", "]"),
            vec![
                ArgItem::word("x"),
                ArgItem::group(("(", ")"), vec![ArgItem::word("a")]),
            ],
        )],
    );
}

#[test]
fn test_word_abutting_an_opening_quote_is_dropped() {
    // Only the quoted span survives; the abutting prefix is discarded.
    check("ab\"cd\"", &[ArgItem::quoted('"', "cd")]);
}

#[test]
fn test_unterminated_quote() {
    check_scan_error(
        "\"You have to close the string",
        ScanError::UnclosedGroup { open_at: 0 },
    );
}

#[test]
fn test_escaped_closing_quote_leaves_the_string_open() {
    check_scan_error(
        "\"You have to close the string\\\"",
        ScanError::UnclosedGroup { open_at: 0 },
    );
}

#[test]
fn test_unclosed_group() {
    check_scan_error("(some group", ScanError::UnclosedGroup { open_at: 0 });
}

#[test]
fn test_unclosed_group_reports_the_innermost_opener() {
    check_scan_error("[a (b", ScanError::UnclosedGroup { open_at: 3 });
}

#[test]
fn test_mismatched_closer() {
    check_scan_error("[inner (group]", ScanError::UnexpectedCloseGroup { at: 13 });
}

#[test]
fn test_stray_closer_at_root_level() {
    check_scan_error("a ] b", ScanError::UnexpectedCloseGroup { at: 2 });
}

#[test]
fn test_missing_space_after_quote() {
    check_scan_error("\"a\"b", ScanError::NoSpaceAfterGroup { at: 3 });
}

#[test]
fn test_missing_space_after_group() {
    check_scan_error("(a)b", ScanError::NoSpaceAfterGroup { at: 3 });
}

#[test]
fn test_adjacent_quoted_strings_are_rejected() {
    check_scan_error("\"a\"\"b\"", ScanError::NoSpaceAfterGroup { at: 3 });
}

#[test]
fn test_error_offsets_are_byte_offsets() {
    // `é` is two bytes long, so the quote sits at byte 7, char 6.
    check_scan_error("héllo \"x", ScanError::UnclosedGroup { open_at: 7 });
}

#[test]
fn test_unicode_content() {
    check(
        "café [naïve résumé]",
        &[
            ArgItem::word("café"),
            ArgItem::group(
                ("[", "]"),
                vec![ArgItem::word("naïve"), ArgItem::word("résumé")],
            ),
        ],
    );
}

#[test]
fn test_multi_character_delimiters() {
    let options = Options {
        group_delimiters: vec![("<<", ">>").into()],
        quotes: Quotes::Both,
    };
    check_with(
        &options,
        "say <<to the >> world",
        &[
            ArgItem::word("say"),
            ArgItem::group(("<<", ">>"), vec![ArgItem::word("to"), ArgItem::word("the")]),
            ArgItem::word("world"),
        ],
    );
}

#[test]
fn test_quotes_disabled_leaves_quote_characters_as_text() {
    let options = Options {
        group_delimiters: vec![],
        quotes: Quotes::None,
    };
    check_with(
        &options,
        "say \"hi there\"",
        &[
            ArgItem::word("say"),
            ArgItem::word("\"hi"),
            ArgItem::word("there\""),
        ],
    );
}

#[test]
fn test_simple_quote_style_ignores_double_quotes() {
    let options = Options {
        group_delimiters: vec![],
        quotes: Quotes::Simple,
    };
    check_with(
        &options,
        "'a b' \"c d\"",
        &[
            ArgItem::quoted('\'', "a b"),
            ArgItem::word("\"c"),
            ArgItem::word("d\""),
        ],
    );
}

#[test]
fn test_pure_whitespace_splitting_without_any_delimiters() {
    let options = Options {
        group_delimiters: vec![],
        quotes: Quotes::None,
    };
    check_with(
        &options,
        "  one [two] 'three'  ",
        &[
            ArgItem::word("one"),
            ArgItem::word("[two]"),
            ArgItem::word("'three'"),
        ],
    );
}

#[test]
fn test_instance_reuse_leaks_no_state() {
    let analyser = Analyser::new(&standard_options()).unwrap();

    assert_eq!(
        analyser.analyse("[a]").unwrap(),
        vec![ArgItem::group(("[", "]"), vec![ArgItem::word("a")])]
    );
    assert_eq!(analyser.analyse("b").unwrap(), vec![ArgItem::word("b")]);

    // A failed pass must not poison the next one.
    assert_eq!(
        analyser.analyse("[oops"),
        Err(ScanError::UnclosedGroup { open_at: 0 })
    );
    assert_eq!(analyser.analyse("fine").unwrap(), vec![ArgItem::word("fine")]);
}

#[test]
fn test_analyser_is_shareable_across_threads() {
    let analyser = Analyser::new(&standard_options()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let items = analyser.analyse("a [b {c}] 'd e'").unwrap();
                    assert_eq!(items.len(), 3);
                }
            });
        }
    });
}

#[test]
fn test_invalid_options_are_rejected_by_both_paths() {
    let options = Options {
        group_delimiters: vec![("[", "]").into(), ("[", ">").into()],
        quotes: Quotes::Both,
    };

    assert!(matches!(
        Analyser::new(&options),
        Err(Error::DuplicateDelimiter(literal)) if literal == "["
    ));
    assert!(matches!(
        Analyser::analyse_once("whatever", &options),
        Err(Error::DuplicateDelimiter(_))
    ));
}
