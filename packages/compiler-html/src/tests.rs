use crate::{compile_to_html, CompileOptions};
use rticles_editor::from_yaml;

const CONSTITUTION: &str = "\
- '#rticles#heading A Simple Constitution'
- '#rticles#continue #rticles#heading#2 For demonstration purposes only'
- This is the first rule.
- 'This is the second rule, which applies when:'
- - This condition;
  - and this condition.
- '#rticles#continue except when it is a Full Moon.'
- This is the third rule.
- This is the fourth rule.
- '#rticles#heading#2 And finally...'
- This is the final rule.
";

/// Whitespace-insensitive comparison form: trimmed lines, joined.
fn normalize(html: &str) -> String {
    html.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

fn assert_html_eq(actual: &str, expected: &str) {
    assert_eq!(normalize(actual), normalize(expected));
}

#[test]
fn test_compile_full_document() {
    let document = from_yaml(CONSTITUTION).expect("import");
    let html = compile_to_html(&document, CompileOptions::default());

    assert_html_eq(
        &html,
        r#"
        <section>
          <hgroup>
            <h1>A Simple Constitution</h1>
            <h2>For demonstration purposes only</h2>
          </hgroup>
          <ol>
            <li value="1">1 This is the first rule.</li>
            <li value="2">
              2 This is the second rule, which applies when:
              <ol>
                <li value="1">2.1 This condition;</li>
                <li value="2">2.2 and this condition.</li>
              </ol>
              except when it is a Full Moon.
            </li>
            <li value="3">3 This is the third rule.</li>
            <li value="4">4 This is the fourth rule.</li>
          </ol>
          <h2>And finally...</h2>
          <ol>
            <li value="5">5 This is the final rule.</li>
          </ol>
        </section>
        "#,
    );
}

#[test]
fn test_insertion_newlines_become_br_tags() {
    let yaml = "\
- First rule.
- 'A custom rule is: #rticles#custom_rule'
- Last rule.
";
    let mut document = from_yaml(yaml).expect("import");
    document.set_insertion("custom_rule", "I can format my clauses\nhow I\nplease.");

    let html = compile_to_html(&document, CompileOptions::default());
    assert_html_eq(
        &html,
        r#"
        <section>
          <ol>
            <li value="1">1 First rule.</li>
            <li value="2">2 A custom rule is: I can format my clauses<br>how I<br>please.</li>
            <li value="3">3 Last rule.</li>
          </ol>
        </section>
        "#,
    );
}

#[test]
fn test_true_clause_included_when_choice_is_set() {
    let yaml = "\
- '#rticles#heading Rules'
- '#rticles#continue #rticles#heading#2 Of the club'
- This is the first rule.
- '#rticles#true#free_cake All members shall be entitled to free cake'
- This is the second rule.
- '#rticles#heading#2 And finally...'
- This is the final rule.
";
    let mut document = from_yaml(yaml).expect("import");
    document.set_choice("free_cake", true);

    let html = compile_to_html(&document, CompileOptions::default());
    assert_html_eq(
        &html,
        r#"
        <section>
          <hgroup>
            <h1>Rules</h1>
            <h2>Of the club</h2>
          </hgroup>
          <ol>
            <li value="1">1 This is the first rule.</li>
            <li value="2">2 All members shall be entitled to free cake</li>
            <li value="3">3 This is the second rule.</li>
          </ol>
          <h2>And finally...</h2>
          <ol>
            <li value="4">4 This is the final rule.</li>
          </ol>
        </section>
        "#,
    );
}

#[test]
fn test_true_clause_excluded_by_default_and_numbering_closes_up() {
    let yaml = "\
- This is the first rule.
- '#rticles#true#free_cake All members shall be entitled to free cake'
- This is the second rule.
- '#rticles#heading#2 And finally...'
- This is the final rule.
";
    let document = from_yaml(yaml).expect("import");

    let html = compile_to_html(&document, CompileOptions::default());
    assert_html_eq(
        &html,
        r#"
        <section>
          <ol>
            <li value="1">1 This is the first rule.</li>
            <li value="2">2 This is the second rule.</li>
          </ol>
          <h2>And finally...</h2>
          <ol>
            <li value="3">3 This is the final rule.</li>
          </ol>
        </section>
        "#,
    );
}

#[test]
fn test_without_indexes_keeps_value_attributes_only() {
    let yaml = "\
- First rule.
- - A condition.
";
    let document = from_yaml(yaml).expect("import");
    let options = CompileOptions {
        with_index: false,
        ..CompileOptions::default()
    };

    let html = compile_to_html(&document, options);
    assert_html_eq(
        &html,
        r#"
        <section>
          <ol>
            <li value="1">
              First rule.
              <ol>
                <li value="1">A condition.</li>
              </ol>
            </li>
          </ol>
        </section>
        "#,
    );
}

#[test]
fn test_fully_omitted_child_scope_emits_no_list() {
    let yaml = "\
- The following optional rules will apply
- - '#rticles#true#option_one Option one'
  - '#rticles#true#option_two Option two'
";
    let document = from_yaml(yaml).expect("import");

    let html = compile_to_html(&document, CompileOptions::default());
    assert_html_eq(
        &html,
        r#"
        <section>
          <ol>
            <li value="1">1 The following optional rules will apply</li>
          </ol>
        </section>
        "#,
    );
}

#[test]
fn test_empty_document_renders_bare_section() {
    let document = from_yaml("[]").expect("import");
    let html = compile_to_html(&document, CompileOptions::default());
    assert_html_eq(&html, "<section></section>");
}

#[test]
fn test_text_is_html_escaped() {
    let yaml = "- Fish & Chips <sometimes>\n";
    let document = from_yaml(yaml).expect("import");

    let html = compile_to_html(&document, CompileOptions::default());
    assert!(html.contains("Fish &amp; Chips &lt;sometimes&gt;"));
}

#[test]
fn test_list_punctuation_applies_to_direct_children() {
    let yaml = "\
- '#rticles#list The Board shall consist of:'
- - a Chair
  - a Secretary
  - a Treasurer
";
    let document = from_yaml(yaml).expect("import");
    let options = CompileOptions {
        with_index: false,
        ..CompileOptions::default()
    };

    let html = compile_to_html(&document, options);
    assert_html_eq(
        &html,
        r#"
        <section>
          <ol>
            <li value="1">
              The Board shall consist of:
              <ol>
                <li value="1">a Chair;</li>
                <li value="2">a Secretary;</li>
                <li value="3">a Treasurer.</li>
              </ol>
            </li>
          </ol>
        </section>
        "#,
    );
}
