//! End-to-end paste scenarios through the handler

use kodegen_tools_paste_cleaner::{PasteEvent, PasteHandler, PasteMode, PasteOutcome, handle_paste};

mod common;

use common::{RecordingEditor, config_for, office_clipboard};

fn paste(mode: PasteMode, event: &PasteEvent) -> PasteOutcome {
    PasteHandler::new(config_for(mode)).handle(event)
}

#[test]
fn test_styled_span_becomes_aligned_paragraph() {
    let event = PasteEvent::with_markup(
        r#"<span style="color:red;text-align:center">Hello</span>"#,
        "Hello",
    );
    assert_eq!(
        paste(PasteMode::CleanHtml, &event),
        PasteOutcome::InsertMarkup(r#"<p style="text-align: center">Hello</p>"#.into())
    );
}

#[test]
fn test_bold_wrapping_paragraphs_is_split() {
    let event = PasteEvent::with_markup(
        "<b><p>Para one</p><p>Para two</p></b>",
        "Para one\nPara two",
    );
    assert_eq!(
        paste(PasteMode::CleanHtml, &event),
        PasteOutcome::InsertMarkup("<p>Para one</p><p>Para two</p>".into())
    );
}

#[test]
fn test_empty_styled_div_falls_back_to_plain_text() {
    let event = PasteEvent::with_markup(r#"<div style="color:blue"></div>"#, "fallback text");
    assert_eq!(
        paste(PasteMode::CleanHtml, &event),
        PasteOutcome::InsertText("fallback text".into())
    );
}

#[test]
fn test_plain_text_mode_ignores_markup() {
    let event = PasteEvent::with_markup("<h1 style=\"color:red\">Title</h1>", "  Title\n");
    assert_eq!(
        paste(PasteMode::PlainText, &event),
        PasteOutcome::InsertText("  Title\n".into())
    );
}

#[test]
fn test_plain_text_mode_never_inserts_markup() {
    let handler = PasteHandler::new(config_for(PasteMode::PlainText));
    for event in [
        PasteEvent::new(Some("<b>Bold</b> words".into()), None),
        PasteEvent::with_markup("<b>Bold</b> words", ""),
    ] {
        assert_eq!(
            handler.handle(&event),
            PasteOutcome::InsertText(String::new()),
            "event {event:?}"
        );

        let mut editor = RecordingEditor::default();
        assert!(handler.handle_into(&event, &mut editor));
        assert!(editor.markup.is_empty());
        assert_eq!(editor.text, vec![String::new()]);
    }
}

#[test]
fn test_aligned_span_inside_paragraph_aligns_the_paragraph() {
    let event = PasteEvent::with_markup(
        r#"<p class="MsoNormal"><span style="text-align:center">Centered</span></p>"#,
        "Centered",
    );
    assert_eq!(
        paste(PasteMode::CleanHtml, &event),
        PasteOutcome::InsertMarkup(r#"<p style="text-align: center">Centered</p>"#.into())
    );
}

#[test]
fn test_font_variable_is_left_as_bare_text() {
    let event = PasteEvent::with_markup(r#"<font color="red">{{name}}</font>"#, "{{name}}");
    assert_eq!(
        paste(PasteMode::SmartClean, &event),
        PasteOutcome::InsertMarkup("{{name}}".into())
    );
}

#[test]
fn test_missing_markup_uses_trimmed_plain_text() {
    let event = PasteEvent::plain("  just text  ");
    assert_eq!(
        paste(PasteMode::CleanHtml, &event),
        PasteOutcome::InsertText("just text".into())
    );
}

#[test]
fn test_no_payload_is_declined() {
    let event = PasteEvent::default();
    for mode in [PasteMode::PlainText, PasteMode::CleanHtml, PasteMode::SmartClean] {
        assert_eq!(paste(mode, &event), PasteOutcome::Declined, "mode {mode}");
    }
}

#[test]
fn test_oversized_payload_is_declined() {
    let config = kodegen_tools_paste_cleaner::PasteConfig::builder()
        .max_markup_bytes(16)
        .build()
        .expect("valid config");
    let event = PasteEvent::with_markup("<p>this payload is too long</p>", "text");
    assert_eq!(handle_paste(&config, &event), PasteOutcome::Declined);
}

#[test]
fn test_pathological_nesting_is_declined() {
    let depth = 2_000;
    let markup = format!("{}deep{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let event = PasteEvent::with_markup(markup, "deep");
    assert_eq!(paste(PasteMode::CleanHtml, &event), PasteOutcome::Declined);
}

#[test]
fn test_office_clipboard_is_reduced_to_semantics() {
    let body = concat!(
        r#"<p class="MsoNormal" style="margin:0;text-align:justify">"#,
        r#"<span style="font-size:11pt;font-family:Calibri;color:#1F497D">"#,
        r#"Quarterly <b><span style="color:red">results</span></b> are in.</span></p>"#,
        r#"<p class="MsoListParagraph"><o:p>&nbsp;</o:p></p>"#,
    );
    let event = PasteEvent::with_markup(office_clipboard(body), "Quarterly results are in.");
    let PasteOutcome::InsertMarkup(markup) = paste(PasteMode::CleanHtml, &event) else {
        panic!("expected markup insertion");
    };
    assert!(markup.contains(
        r#"<p style="text-align: justify">Quarterly <b>results</b> are in.</p>"#
    ));
    assert!(!markup.contains("span"));
    assert!(!markup.contains("class="));
    assert!(!markup.contains("Calibri"));
}

#[test]
fn test_smart_mode_turns_table_cells_into_paragraphs() {
    let event = PasteEvent::with_markup(
        "<table><tbody><tr><td>A</td><td>B</td></tr></tbody></table>",
        "A\tB",
    );
    let PasteOutcome::InsertMarkup(markup) = paste(PasteMode::SmartClean, &event) else {
        panic!("expected markup insertion");
    };
    assert!(!markup.contains("<table"));
    assert!(!markup.contains("<td"));
    assert!(markup.contains("<p>A</p><p>B</p>"));
}

#[test]
fn test_links_keep_target_attributes() {
    let event = PasteEvent::with_markup(
        concat!(
            r#"<a href="https://kodegen.ai" target="_blank" rel="noopener" "#,
            r#"style="color:blue">site</a>"#,
        ),
        "site",
    );
    assert_eq!(
        paste(PasteMode::CleanHtml, &event),
        PasteOutcome::InsertMarkup(
            r#"<a href="https://kodegen.ai" target="_blank">site</a>"#.into()
        )
    );
}

#[test]
fn test_handler_performs_exactly_one_insertion() {
    let handler = PasteHandler::new(config_for(PasteMode::CleanHtml));
    let cases = [
        PasteEvent::with_markup("<p>x</p>", "x"),
        PasteEvent::with_markup("<div></div>", "fallback"),
        PasteEvent::plain("only text"),
    ];
    for event in &cases {
        let mut editor = RecordingEditor::default();
        assert!(handler.handle_into(event, &mut editor));
        assert_eq!(editor.insertions(), 1, "event {event:?}");
    }

    let mut editor = RecordingEditor::default();
    assert!(!handler.handle_into(&PasteEvent::default(), &mut editor));
    assert_eq!(editor.insertions(), 0);
}
