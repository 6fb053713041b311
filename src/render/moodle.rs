//! Moodle XML (multichoice) serializer

use crate::models::Question;
use quick_xml::escape::escape;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render questions as a Moodle `<quiz>` document
///
/// Options are emitted sorted by letter. Output is deterministic for a given input.
pub fn render(questions: &[Question]) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push_str("\n<quiz>\n");

    for question in questions {
        write_question(&mut xml, question);
    }

    xml.push_str("</quiz>");
    xml
}

fn write_question(xml: &mut String, question: &Question) {
    let prompt = escape(question.text.as_str());

    xml.push_str("    <question type=\"multichoice\">\n");
    xml.push_str(&format!("        <name>\n            <text>{}</text>\n        </name>\n", prompt));
    xml.push_str(&format!(
        "        <questiontext format=\"html\">\n            <text>{}</text>\n        </questiontext>\n",
        prompt
    ));

    for option in question.sorted_options() {
        let fraction = format_fraction(question.fraction_for(option.letter));
        xml.push_str(&format!("        <answer fraction=\"{}\">\n", fraction));
        xml.push_str(&format!("            <text>{}</text>\n", escape(option.text.as_str())));
        xml.push_str("        </answer>\n");
    }

    xml.push_str("    </question>\n");
}

/// Format a score fraction the way Moodle expects it
///
/// Whole numbers have no decimal point (`100`, `50`, `0`); anything else is rounded to
/// two decimals with trailing zeros dropped (`33.33`, `12.5`).
pub fn format_fraction(fraction: f64) -> String {
    if fraction.fract() == 0.0 {
        return format!("{}", fraction as i64);
    }

    let fixed = format!("{:.2}", fraction);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
