use chatmark_engine::{
    CharRefSpans, ContainerKind, InlineOptions, Node, parse_document,
    parsing::snapshot::{invariants, outline},
};
use pretty_assertions::assert_eq;
use pulldown_cmark::{Event, Parser};

fn parse_checked(markdown: &str) -> String {
    let opts = InlineOptions::default();
    let doc = parse_document(markdown, &opts);
    invariants(markdown, &doc, &opts);
    outline(&doc.root)
}

#[test]
fn snapshot_multiline_paragraph() {
    insta::assert_snapshot!(parse_checked("hello world\nfoobar"), @r#"
    Document 0..18
      Paragraph 0..18
        Text 0..11 "hello world"
        LineBreak 11..12 soft
        Text 12..18 "foobar"
    "#);
}

#[test]
fn snapshot_messy_unclosed_constructs() {
    let input = "Check [this & `that\n\nline one  \nline two\\\nthree ![x";
    insta::assert_snapshot!(parse_checked(input), @r#"
    Document 0..51
      Paragraph 0..19
        Text 0..6 "Check "
        BracketMarker 6..7 LinkOpen
        Text 7..12 "this "
        Text 12..13 "&"
        Text 13..14 " "
        Text 14..15 "`"
        Text 15..19 "that"
      Paragraph 21..51
        Text 21..29 "line one"
        LineBreak 29..32 hard
        Text 32..40 "line two"
        LineBreak 40..42 hard
        Text 42..48 "three "
        BracketMarker 48..50 ImageOpen
        Text 50..51 "x"
    "#);
}

#[test]
fn snapshot_character_references() {
    insta::assert_snapshot!(parse_checked("caf&eacute; &#x263A; é"), @r#"
    Document 0..23
      Paragraph 0..23
        Text 0..3 "caf"
        CharacterReference 3..11 "é"
        Text 11..12 " "
        CharacterReference 12..20 "☺"
        Text 20..23 " é"
    "#);
}

#[test]
fn code_span_content_spans_lines() {
    let doc = parse_document("a `b\n   c` d", &InlineOptions::default());
    let para = &doc.paragraphs()[0];
    assert!(matches!(
        &para.children()[1],
        Node::Container { kind: ContainerKind::CodeSpan { content }, .. } if content == "b c"
    ));
}

const CORPUS: &[&str] = &[
    "",
    "hello",
    "hello `code` world",
    "`` ` `` and ``` `` ```",
    "a `` b ` c `` d ``",
    "\\*a\\* \\\\ \\q \\",
    "&amp;&lt;&gt; &#x1F600; &#0; &bogus; & &#;",
    "![img](x) [link] ] [ !",
    "line one  \nline two\\\n   line three\r\nfour",
    "para one\n\n\n  para two  \n\t\npara three",
    "unicode é 😀 `é` &eacute;",
    "trailing backslash\\",
    "a&nbsp;b&#x1F600;c &eacute;&eacute; x",
    "a\n\u{A0}\nb\r\rc",
];

#[test]
fn corpus_satisfies_invariants() {
    for markdown in CORPUS {
        for char_ref_spans in [CharRefSpans::Source, CharRefSpans::Decoded] {
            let opts = InlineOptions { char_ref_spans };
            let doc = parse_document(markdown, &opts);
            invariants(markdown, &doc, &opts);
        }
    }
}

#[test]
fn parsing_is_deterministic() {
    for markdown in CORPUS {
        let opts = InlineOptions::default();
        assert_eq!(parse_document(markdown, &opts), parse_document(markdown, &opts));
    }
}

#[test]
fn literal_leaves_reproduce_their_source_bytes() {
    for markdown in CORPUS {
        let doc = parse_document(markdown, &InlineOptions::default());
        doc.inspect(|n| {
            match n {
                Node::Text { span, value } => {
                    assert_eq!(span.slice(markdown), Some(value.as_str()));
                }
                Node::Escape { span, value } => {
                    assert_eq!(span.slice(markdown), Some(value.to_string().as_str()));
                    assert_eq!(&markdown[span.start - 1..span.start], "\\");
                }
                Node::BracketMarker { span, kind } => {
                    assert_eq!(span.slice(markdown), Some(kind.as_str()));
                }
                _ => {}
            }
            true
        });
    }
}

fn pulldown_text(markdown: &str) -> String {
    Parser::new(markdown)
        .filter_map(|ev| match ev {
            Event::Text(t) => Some(t.into_string()),
            _ => None,
        })
        .collect()
}

fn our_text(markdown: &str) -> String {
    let mut out = String::new();
    parse_document(markdown, &InlineOptions::default()).inspect(|n| {
        if let Some(t) = n.text() {
            out.push_str(&t);
        }
        true
    });
    out
}

/// Decoded text agrees with pulldown-cmark where both grammars overlap.
#[test]
fn decoded_text_matches_pulldown_cmark() {
    let inputs = [
        "hello!",
        "\\*hello\\*",
        "\\\\",
        "foo\\x",
        "&quot;test",
        "&amp test",
        "&mattermost;",
        "50 &lt; 60 &amp;&amp; ok",
        "a &copy; b &#35; c &#x41;",
        "caf&eacute; &#0;",
        "[foo",
        "![foo",
    ];
    for markdown in inputs {
        assert_eq!(our_text(markdown), pulldown_text(markdown), "{markdown:?}");
    }
}
