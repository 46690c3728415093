use html_sanitizer::{
    Options, PolicyMap, Sanitizer, SanitizerBuilder, attribute, chain, default_attrs, no_attrs,
    restricted_tag, transform_tag,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn page_options() -> Options {
    Options::new("nowhere.com", "/page/", "http:")
}

fn sanitize(input: &str) -> String {
    html_sanitizer::sanitize(input)
}

// ---------------------------------------------------------------------------
// Default policy behavior
// ---------------------------------------------------------------------------

#[test]
fn script_subtree_is_dropped() {
    assert_eq!(sanitize("<script>alert(1)</script>"), "");
}

#[test]
fn style_and_iframe_are_dropped() {
    assert_eq!(sanitize("<style>body{color:red}</style><p>kept</p>"), "<p>kept</p>");
    assert_eq!(sanitize(r#"<iframe src="https://evil.com"></iframe>"#), "");
}

#[test]
fn form_controls_are_dropped_with_their_content() {
    // Children are flattened into the skipped ancestor and discarded with
    // it; nothing inside a form survives.
    let input = r#"<form action="/message"><input type="hidden" name="csrf"><p>inside</p><button>Send</button></form>"#;
    assert_eq!(sanitize(input), "");
}

#[test]
fn font_is_unwrapped() {
    assert_eq!(sanitize("<font>hello</font>"), "hello");
}

#[test]
fn document_shell_is_unwrapped() {
    assert_eq!(
        sanitize("<html><body><p>content</p></body></html>"),
        "<p>content</p>"
    );
}

#[test]
fn disallowed_attributes_are_stripped() {
    assert_eq!(
        sanitize(r#"<p class="x" style="color:red" onclick="steal()">text</p>"#),
        "<p>text</p>"
    );
}

#[test]
fn link_keeps_href_and_gains_target_and_rel() {
    assert_eq!(
        sanitize(r#"<a href="https://x.com" onclick="steal()">here</a>"#),
        r#"<a href="https://x.com" target="_blank" rel="nofollow">here</a>"#
    );
}

#[test]
fn table_cells_keep_their_span_attributes() {
    assert_eq!(
        sanitize(r#"<td colspan="2" bgcolor="red">x</td>"#),
        r#"<td colspan="2">x</td>"#
    );
}

#[test]
fn legacy_elements_are_renamed() {
    assert_eq!(sanitize("<big>BIG</big>"), "<strong>BIG</strong>");
    assert_eq!(sanitize("<strike>old</strike>"), "<s>old</s>");
    assert_eq!(sanitize("<main>x</main>"), "<section>x</section>");
    assert_eq!(sanitize(r#"<marquee behavior="scroll">wow</marquee>"#), "wow");
}

#[test]
fn void_elements_serialize_self_closing() {
    assert_eq!(sanitize("one<br>two"), "one<br />two");
}

#[test]
fn mixed_inline_content_end_to_end() {
    let input = r#"<p>Some <big>BIG</big> text <a href="http://nowhere.com">here</a></p>"#;
    let expected = r#"<p>Some <strong>BIG</strong> text <a href="http://nowhere.com" target="_blank" rel="nofollow">here</a></p>"#;
    assert_eq!(sanitize(input), expected);
}

// ---------------------------------------------------------------------------
// Whitespace handling
// ---------------------------------------------------------------------------

#[test]
fn whitespace_only_text_nodes_vanish() {
    assert_eq!(sanitize("<p>   </p>"), "<p></p>");
}

#[test]
fn only_the_first_whitespace_run_collapses() {
    assert_eq!(sanitize("<p>a \n\n b   c</p>"), "<p>a b   c</p>");
}

#[test]
fn text_is_not_trimmed() {
    assert_eq!(sanitize("<p>padded </p>"), "<p>padded </p>");
}

// ---------------------------------------------------------------------------
// URL rewriting
// ---------------------------------------------------------------------------

#[test]
fn absolute_and_mailto_links_are_untouched() {
    let options = page_options();
    assert_eq!(
        html_sanitizer::sanitize_with(r#"<a href="https://x.com">x</a>"#, &options),
        r#"<a href="https://x.com" target="_blank" rel="nofollow">x</a>"#
    );
    assert_eq!(
        html_sanitizer::sanitize_with(r#"<a href="mailto:a@b.com">m</a>"#, &options),
        r#"<a href="mailto:a@b.com" target="_blank" rel="nofollow">m</a>"#
    );
}

#[test]
fn protocol_relative_links_gain_the_protocol() {
    assert_eq!(
        html_sanitizer::sanitize_with(r#"<img src="//cdn.com/x.png">"#, &page_options()),
        r#"<img src="http://cdn.com/x.png" />"#
    );
}

#[test]
fn site_root_relative_links_gain_the_domain() {
    assert_eq!(
        html_sanitizer::sanitize_with(r#"<img src="/1.png">"#, &page_options()),
        r#"<img src="http://nowhere.com/1.png" />"#
    );
}

#[test]
fn document_relative_links_gain_domain_and_path() {
    assert_eq!(
        html_sanitizer::sanitize_with(r#"<img src="next.png">"#, &page_options()),
        r#"<img src="http://nowhere.com/page/next.png" />"#
    );
}

#[test]
fn supplied_options_are_normalized_before_use() {
    let options = Options::new("nowhere.com/", "page", "http://");
    assert_eq!(
        html_sanitizer::sanitize_with(r#"<img src="x.png">"#, &options),
        r#"<img src="http://nowhere.com/page/x.png" />"#
    );
}

#[test]
fn options_derived_from_source_url() {
    let options = Options::from_url("http://nowhere.com/page/index.html").unwrap();
    assert_eq!(
        html_sanitizer::sanitize_with(r#"<img src="1.png">"#, &options),
        r#"<img src="http://nowhere.com/page/1.png" />"#
    );
}

// ---------------------------------------------------------------------------
// Malformed and hostile input
// ---------------------------------------------------------------------------

#[test]
fn unknown_elements_unwrap_and_stay_balanced() {
    assert_eq!(
        sanitize("<widget><b>x</b></widget><i>y</i>"),
        "<b>x</b><i>y</i>"
    );
    assert_eq!(sanitize("<p>a<widget>b</widget>c</p>"), "<p>abc</p>");
}

#[test]
fn stray_close_tags_are_ignored() {
    assert_eq!(sanitize("</div>hello"), "hello");
}

#[test]
fn unclosed_elements_close_at_end_of_input() {
    assert_eq!(sanitize("<div><p>hi"), "<div><p>hi</p></div>");
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(sanitize(""), "");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(sanitize("no markup here"), "no markup here");
}

#[test]
fn comments_are_dropped() {
    assert_eq!(sanitize("<!-- tracking --><p>x</p>"), "<p>x</p>");
}

#[test]
fn upper_case_markup_is_normalized() {
    assert_eq!(sanitize("<P>text</P>"), "<p>text</p>");
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn sanitized_output_is_a_fixed_point() {
    let inputs = [
        "<p>hello <b>world</b></p>",
        r#"<a href="https://x.com">link</a>"#,
        "<ul><li>one</li><li>two</li></ul>",
    ];
    for input in inputs {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once, "not idempotent for {input}");
    }
}

// ---------------------------------------------------------------------------
// Custom policies
// ---------------------------------------------------------------------------

#[test]
fn builder_overrides_default_entries() {
    let sanitizer = SanitizerBuilder::new()
        .skip("a")
        .policy("span", restricted_tag(&["class"]))
        .build();
    assert_eq!(
        sanitizer.sanitize(r#"<p><a href="/x">gone</a><span class="k">kept</span></p>"#),
        r#"<p><span class="k">kept</span></p>"#
    );
}

#[test]
fn hand_built_policy_map() {
    let mut map = PolicyMap::new();
    map.insert("em", no_attrs());
    map.insert(
        "a",
        chain([
            restricted_tag(&["href"]),
            default_attrs(vec![attribute("rel", "noopener")]),
        ]),
    );

    let sanitizer = Sanitizer::new(map);
    assert_eq!(
        sanitizer.sanitize(r##"<em class="x">hi</em><a href="#top" id="l">t</a>"##),
        r##"<em>hi</em><a href="#top" rel="noopener">t</a>"##
    );
}

#[test]
fn custom_rename_policy() {
    let sanitizer = SanitizerBuilder::new()
        .policy("b", chain([no_attrs(), transform_tag("strong")]))
        .build();
    assert_eq!(sanitizer.sanitize("<b>bold</b>"), "<strong>bold</strong>");
}

// ---------------------------------------------------------------------------
// Full document
// ---------------------------------------------------------------------------

#[test]
fn full_document_sample() {
    let input = r#"
      <html>
        <head>
          <title>Something</title>
        </head>
        <body class="content" style="color: red">
          <form action="/message" method="post">
            <input name="text" />
            <button type="submit">Send</button>
          </form>
          <main>
            <h1 class="heading">Awesome page</h1>
            <section style="width: 600px">
              <img src="/1.jpg" alt="some image">
              <P>
                Some <big>BIG</big> text <a href="/boom">here</a>
                With custom <font>font</font>
              </P>
            </section>
          </main>
          <script>
            alert('malicious script');
          </script>
        </body>
      </html>
    "#;

    let expected = concat!(
        "<section><h1>Awesome page</h1>",
        r#"<section><img alt="some image" src="http://nowhere.com/1.jpg" />"#,
        r#"<p> Some <strong>BIG</strong> text <a href="http://nowhere.com/boom" target="_blank" rel="nofollow">here</a>"#,
        " With custom font</p></section></section>",
    );

    assert_eq!(
        html_sanitizer::sanitize_with(input, &page_options()),
        expected
    );
}
