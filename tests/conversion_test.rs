//! Integration tests for quiz conversion
//!
//! Covers the full flow from plain text and .docx input to Moodle XML:
//! - option ordering and score fractions
//! - answer precedence (explicit line > inline formatting > compact key)
//! - escaping and empty input
//! - the question bank between parsing and rendering

use quizconv::models::QuizConfig;
use quizconv::services::quiz_service;
use quizconv::{
    parse_document, parse_text, render, Document, Paragraph, Question, QuestionBank,
    QuestionRepository, Rgb, Run,
};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

/// Write a minimal .docx whose body holds the given paragraph XML
fn write_docx(path: &Path, paragraphs: &str) {
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{}<w:sectPr/></w:body>
</w:document>"#,
        paragraphs
    );

    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    zip.start_file("[Content_Types].xml", zip::write::FileOptions::default())
        .unwrap();
    zip.write_all(b"<Types/>").unwrap();
    zip.start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}

fn fractions(xml: &str) -> Vec<String> {
    xml.split(r#"<answer fraction=""#)
        .skip(1)
        .filter_map(|s| s.split('"').next())
        .map(str::to_string)
        .collect()
}

fn answer_texts(xml: &str) -> Vec<String> {
    xml.split(r#"<answer fraction=""#)
        .skip(1)
        .filter_map(|s| s.split("<text>").nth(1))
        .filter_map(|s| s.split("</text>").next())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_options_render_in_letter_order() {
    let question = Question::new(1, "Q")
        .with_option('C', "x")
        .with_option('A', "y")
        .with_option('B', "z");

    let xml = render(&[question]);
    assert_eq!(answer_texts(&xml), vec!["y", "z", "x"]);
}

#[test]
fn test_parsed_options_out_of_order_render_sorted() {
    let questions = parse_text("Câu hỏi 1: Q\nC. gamma\nA. alpha\nB. beta\nĐáp án đúng: C");
    let xml = render(&questions);
    assert_eq!(answer_texts(&xml), vec!["alpha", "beta", "gamma"]);
    assert_eq!(fractions(&xml), vec!["0", "0", "100"]);
}

#[test]
fn test_fraction_sum_is_full_score() {
    for k in [1usize, 2, 4, 5] {
        let letters: Vec<char> = ('A'..='E').collect();
        let mut question = Question::new(1, "Q");
        for letter in &letters {
            question = question.with_option(*letter, letter.to_string());
        }
        let question = question.with_correct(letters[..k].iter().copied());

        let sum: f64 = letters.iter().map(|l| question.fraction_for(*l)).sum();
        assert_eq!(sum, 100.0, "k = {}", k);
    }

    let question = Question::new(1, "Q").with_option('A', "x").with_option('B', "y");
    let sum: f64 = ['A', 'B'].iter().map(|l| question.fraction_for(*l)).sum();
    assert_eq!(sum, 0.0);
}

#[test]
fn test_three_correct_fractions_sum_to_about_full_score() {
    let question = Question::new(1, "Q")
        .with_option('A', "a")
        .with_option('B', "b")
        .with_option('C', "c")
        .with_correct(['A', 'B', 'C']);
    // Two-decimal output makes the rendered values sum to 99.99 here, so the exact
    // total is checked on the unrounded scores only.
    let sum: f64 = ['A', 'B', 'C'].iter().map(|l| question.fraction_for(*l)).sum();
    assert!((sum - 100.0).abs() < 1e-9);
    assert_eq!(fractions(&render(&[question])), vec!["33.33"; 3]);
}

#[test]
fn test_fraction_formatting_in_output() {
    let two = Question::new(1, "Q")
        .with_option('A', "a")
        .with_option('B', "b")
        .with_correct(['A', 'B']);
    let four = Question::new(2, "Q")
        .with_option('A', "a")
        .with_option('B', "b")
        .with_option('C', "c")
        .with_option('D', "d")
        .with_correct(['A', 'B', 'C', 'D']);

    let xml = render(&[two, four]);
    assert_eq!(fractions(&xml), vec!["50", "50", "25", "25", "25", "25"]);
    assert!(!xml.contains("50.00"));
}

#[test]
fn test_explicit_line_beats_inline_formatting() {
    let document = Document::new(vec![
        Paragraph::plain("Câu hỏi 1: Q"),
        Paragraph::new(vec![Run::plain("A. x").bold()]),
        Paragraph::plain("B. y"),
        Paragraph::plain("Đáp án đúng: B"),
    ]);

    let questions = parse_document(&document);
    assert_eq!(questions[0].correct.iter().collect::<String>(), "B");
}

#[test]
fn test_compact_key_fallback() {
    let questions = parse_text("Câu hỏi 1: Q1\nA. x\nB. y\n1B");
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct.iter().collect::<String>(), "B");
    assert_eq!(fractions(&render(&questions)), vec!["0", "100"]);
}

#[test]
fn test_prompt_escaping_is_identical_in_both_fields() {
    let questions = parse_text("Câu hỏi 1: a < b & \"c\"\nA. x");
    let xml = render(&questions);

    let escaped = "<text>a &lt; b &amp; &quot;c&quot;</text>";
    let name = xml.split("<name>").nth(1).unwrap().split("</name>").next().unwrap();
    let body = xml
        .split("<questiontext format=\"html\">")
        .nth(1)
        .unwrap()
        .split("</questiontext>")
        .next()
        .unwrap();
    assert!(name.contains(escaped));
    assert!(body.contains(escaped));
}

#[test]
fn test_empty_input_renders_empty_quiz() {
    for input in ["", "   \n\n", "nothing to see\nA. orphan"] {
        let questions = parse_text(input);
        assert!(questions.is_empty());
        let xml = render(&questions);
        assert!(xml.ends_with("<quiz>\n</quiz>"));
        assert!(!xml.contains("<question"));
    }
}

#[test]
fn test_rendering_is_idempotent() {
    let questions = parse_text(
        "Câu hỏi 1: Q1\nB. y\nA. x\nĐáp án đúng: A,B\nCâu hỏi 2: Q2\nA. x\nB. y\nC. z\n2C",
    );
    assert_eq!(render(&questions), render(&questions));
}

#[test]
fn test_bank_edits_flow_into_rendering() {
    let mut bank = QuestionBank::from_questions(parse_text("Câu hỏi 1: Q1\nA. x\nB. y\n1A"));

    let id = bank
        .append(
            Question::new(0, "Q2")
                .with_option('A', "p")
                .with_option('B', "q")
                .with_correct(['B']),
        )
        .unwrap();
    assert_eq!(id, 2);

    bank.replace(1, Question::new(1, "Q1 edited").with_option('A', "only").with_correct(['A']))
        .unwrap();

    let xml = render(bank.list());
    assert!(xml.contains("<text>Q1 edited</text>"));
    assert!(xml.contains("<text>Q2</text>"));
    assert_eq!(fractions(&xml), vec!["100", "0", "100"]);
}

#[test]
fn test_append_after_maximum_parsed_id() {
    let mut bank = QuestionBank::from_questions(parse_text(
        "Câu hỏi 3: a\nA. x\nCâu hỏi 4294967295: b\nA. y",
    ));
    assert_eq!(bank.len(), 2);

    let id = bank
        .append(Question::new(0, "c").with_option('A', "z"))
        .unwrap();
    assert_eq!(id, 1);
}

#[test]
fn test_convert_docx_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("de_thi.docx");
    write_docx(
        &input,
        r#"<w:p><w:r><w:t>Câu hỏi 1: Thủ đô của Việt Nam?</w:t></w:r></w:p>
           <w:p><w:r><w:t>A. Huế</w:t></w:r></w:p>
           <w:p><w:r><w:t xml:space="preserve">B. </w:t></w:r><w:r><w:rPr><w:color w:val="FF0000"/></w:rPr><w:t>Hà Nội</w:t></w:r></w:p>
           <w:p><w:r><w:t>Câu hỏi 2: Số nguyên tố?</w:t></w:r></w:p>
           <w:p><w:r><w:t>A. 4</w:t></w:r></w:p>
           <w:p><w:r><w:t>B. 7</w:t></w:r></w:p>
           <w:p><w:r><w:t>C. 9</w:t></w:r></w:p>
           <w:p/>
           <w:p><w:r><w:t>1A2B</w:t></w:r></w:p>"#,
    );

    let report = quiz_service::convert_file(&input, &QuizConfig::default()).unwrap();
    assert_eq!(report.question_count, 2);
    assert!(report.unanswered.is_empty());
    assert_eq!(report.output_path, temp_dir.path().join("OUTPUT").join("de_thi_quiz.xml"));

    let xml = fs::read_to_string(&report.output_path).unwrap();
    // question 1 uses the red run, not the key's "1A"; question 2 falls back to the key
    assert_eq!(fractions(&xml), vec!["0", "100", "0", "100", "0"]);
    assert!(xml.contains("<text>Thủ đô của Việt Nam?</text>"));
}

#[test]
fn test_convert_docx_explicit_answer_suppresses_key() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("quiz.DOCX");
    write_docx(
        &input,
        r#"<w:p><w:r><w:t>Câu hỏi 1: Q</w:t></w:r></w:p>
           <w:p><w:r><w:t>A. x</w:t></w:r></w:p>
           <w:p><w:r><w:t>B. y</w:t></w:r></w:p>
           <w:p><w:r><w:t>Đáp án đúng: ,</w:t></w:r></w:p>
           <w:p><w:r><w:t>1B</w:t></w:r></w:p>"#,
    );

    let questions = quiz_service::load_questions(&input).unwrap();
    assert!(questions[0].explicit_answer);
    assert!(questions[0].correct.is_empty());
}

#[test]
fn test_styled_underline_and_italic_runs() {
    let document = Document::new(vec![
        Paragraph::plain("Câu hỏi 3: Q"),
        Paragraph::new(vec![Run::plain("A. x").underline()]),
        Paragraph::new(vec![Run::plain("B. y").colored(Rgb(0, 0, 255))]),
        Paragraph::new(vec![Run::plain("C. "), Run::plain("z").italic()]),
    ]);
    let questions = parse_document(&document);
    assert_eq!(questions[0].id, 3);
    assert_eq!(questions[0].correct.iter().collect::<String>(), "AC");
    assert_eq!(fractions(&render(&questions)), vec!["50", "0", "50"]);
}
