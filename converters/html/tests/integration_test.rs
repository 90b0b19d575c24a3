use ial_converters_html::{RenderOptions, render_ials, render_ials_with};
use ial_parser::{Error as ParserError, Options, ParseContext, StructureMarker, parse_ial};

type Error = Box<dyn std::error::Error>;

fn scan_all(candidates: &[&str]) -> ParseContext {
    let mut context = ParseContext::new();
    for candidate in candidates {
        context.scan(candidate.as_bytes());
    }
    context
}

#[rstest::rstest]
#[case::id_classes_and_attribute(&[r#"{#id .c1 .c2 k="v"}"#], r#" anchor="id" class="c1 c2" k="v""#)]
#[case::merged_lists(&["{#a .x}", "{#b .y}"], r#" anchor="b" class="x y""#)]
#[case::attributes_sorted(&["{b=2 a=1}"], r#" a="1" b="2""#)]
#[case::quoted_value(&[r#"{title="Hello world"}"#], r#" title="Hello world""#)]
#[case::escaped_quote(&[r#"{k="a\"b"}"#], r#" k="ab""#)]
#[case::dropped_token(&["{plain}"], "")]
#[case::structure_marker_skipped(&["{mainmatter}", "{.x}"], r#" class="x""#)]
#[case::unterminated_skipped(&["{.lost", "{#kept}"], r#" anchor="kept""#)]
#[tracing_test::traced_test]
fn scan_then_render(#[case] candidates: &[&str], #[case] expected: &str) {
    let context = scan_all(candidates);
    pretty_assertions::assert_eq!(render_ials(context.ials()), expected);
}

#[test]
fn drained_lists_render_per_block() {
    let mut context = ParseContext::new();
    context.scan(b"{#first .lead}");
    let first_block = context.drain();
    context.scan(b"{#second}");
    let second_block = context.drain();

    let options = RenderOptions::default();
    pretty_assertions::assert_eq!(
        render_ials_with(&first_block, &options),
        r#" anchor="first" class="lead""#
    );
    pretty_assertions::assert_eq!(
        render_ials_with(&second_block, &options),
        r#" anchor="second""#
    );
}

#[test]
fn typed_errors_name_the_structure_marker() -> Result<(), Error> {
    let error = parse_ial(b"{backmatter}", &Options::default())
        .err()
        .ok_or("backmatter must not parse")?;
    assert!(matches!(error, ParserError::StructureMarker(_)));
    assert_eq!(
        error.structure_marker().map(StructureMarker::as_str),
        Some("backmatter")
    );
    Ok(())
}
