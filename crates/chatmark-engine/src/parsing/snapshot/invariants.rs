use crate::{
    options::{CharRefSpans, InlineOptions},
    parsing::{
        Document,
        node::{ContainerKind, Node},
        span::Span,
    },
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All spans are within the source bounds
/// - Children lie inside their parent and appear in source order without
///   overlapping
/// - The leaves of each paragraph cover its content span with no gaps, a
///   backslash before an `Escape` being the only byte left out (a code span
///   counts as one leaf). Skipped after a character reference when
///   `CharRefSpans::Decoded` is in effect, since those spans are short.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, doc: &Document, options: &InlineOptions) {
    check_node(&doc.root, Span::new(0, source.len()));
    for para in doc.paragraphs() {
        check_coverage(para, options);
    }
}

fn check_node(node: &Node, bounds: Span) {
    let sp = node.span();
    assert!(
        bounds.contains(sp),
        "span out of bounds: {sp:?} not in {bounds:?} ({node:?})"
    );
    let mut prev_end = sp.start;
    for child in node.children() {
        let c = child.span();
        assert!(
            c.start >= prev_end,
            "children overlap or are out of order at {c:?} (previous ended at {prev_end})"
        );
        prev_end = c.end;
        check_node(child, sp);
    }
}

fn check_coverage(para: &Node, options: &InlineOptions) {
    let content = para.span();
    let mut pos = content.start;
    let mut after_short_span = false;
    for leaf in para.children() {
        let sp = leaf.span();
        let expected = match leaf {
            Node::Escape { .. } => pos + 1,
            _ => pos,
        };
        if after_short_span {
            assert!(sp.start >= pos, "leaf {leaf:?} starts before {pos}");
        } else {
            assert_eq!(sp.start, expected, "gap or overlap before {leaf:?}");
        }
        after_short_span = options.char_ref_spans == CharRefSpans::Decoded
            && matches!(leaf, Node::CharacterReference { .. });
        pos = sp.end;
        if let Node::Container {
            kind: ContainerKind::CodeSpan { .. },
            ..
        } = leaf
        {
            continue;
        }
        assert!(!leaf.is_container(), "unexpected nested container {leaf:?}");
    }
    if !after_short_span {
        assert_eq!(pos, content.end, "paragraph content not fully covered");
    }
}
