// src/report.rs
//
// Informe de resultados en PDF (A4, Helvetica, salto de página automático).

use crate::error::Result;
use crate::model::Explanation;
use crate::session::QuizOutcome;
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_H: f32 = 6.0;
const FONT_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 16.0;
/// Caracteres por línea a 11pt dentro de los márgenes.
const WRAP_AT: usize = 85;

pub const REPORT_FILE_NAME: &str = "quiz_results.pdf";

pub fn report_title(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { "Anonymous" } else { name };
    format!("{name}'s Quiz Results")
}

/// Parte `text` en líneas de como mucho `width` caracteres, cortando por palabras.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { word.chars().count() } else { line.chars().count() + 1 + word.chars().count() };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

fn push_wrapped(lines: &mut Vec<String>, indent: &str, text: &str) {
    for (i, part) in wrap_text(text, WRAP_AT - indent.len()).into_iter().enumerate() {
        if i == 0 {
            lines.push(format!("{indent}{part}"));
        } else {
            lines.push(format!("{indent}  {part}"));
        }
    }
}

/// Maqueta el informe como texto plano; la primera línea es el título.
pub fn render_report_lines(outcome: &QuizOutcome, name: &str) -> Vec<String> {
    let mut lines = vec![report_title(name)];
    lines.push(format!(
        "Score: {}/{}   Difficulty: {}   Time: {:.2}s",
        outcome.score,
        outcome.total,
        outcome.difficulty.label(),
        outcome.elapsed
    ));
    lines.push(format!(
        "Date: {}",
        outcome.finished_at.format("%Y-%m-%d %H:%M UTC")
    ));
    lines.push(String::new());

    for (i, r) in outcome.results.iter().enumerate() {
        push_wrapped(&mut lines, "", &format!("Q{}: {}", i + 1, r.question));
        push_wrapped(
            &mut lines,
            "  ",
            &format!(
                "Your answer: {} ({})",
                r.user_answer,
                if r.correct { "correct" } else { "incorrect" }
            ),
        );
        push_wrapped(&mut lines, "  ", &format!("Correct answer: {}", r.answer));
        match &r.explanation {
            Explanation::PerOption(list) => {
                lines.push("  Option explanations:".to_string());
                for e in list {
                    push_wrapped(&mut lines, "   - ", &format!("{}: {}", e.option, e.text));
                }
            }
            Explanation::Single(text) => {
                push_wrapped(&mut lines, "  ", &format!("Explanation: {text}"));
            }
        }
        lines.push(String::new());
    }
    lines
}

/// La fuente base de PDF solo cubre Latin-1; lo demás se sustituye.
fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) < 0x100 && !c.is_control() { c } else { '?' })
        .collect()
}

pub fn build_pdf(outcome: &QuizOutcome, name: &str) -> Result<Vec<u8>> {
    let lines = render_report_lines(outcome, name);
    let title = report_title(name);

    let (doc, page, layer) = PdfDocument::new(pdf_safe(&title), Mm(PAGE_W), Mm(PAGE_H), "Resultados");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_H - MARGIN;

    for (i, line) in lines.iter().enumerate() {
        if y < MARGIN {
            let (page, layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Resultados");
            current = doc.get_page(page).get_layer(layer);
            y = PAGE_H - MARGIN;
        }
        if i == 0 {
            current.use_text(pdf_safe(line), TITLE_SIZE, Mm(MARGIN), Mm(y), &bold);
            y -= LINE_H * 1.5;
        } else {
            if !line.is_empty() {
                current.use_text(pdf_safe(line), FONT_SIZE, Mm(MARGIN), Mm(y), &font);
            }
            y -= LINE_H;
        }
    }

    Ok(doc.save_to_bytes()?)
}

/// Guarda el PDF en disco y devuelve la ruta escrita.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_report(
    outcome: &QuizOutcome,
    name: &str,
    path: &std::path::Path,
) -> Result<std::path::PathBuf> {
    let bytes = build_pdf(outcome, name)?;
    std::fs::write(path, bytes)?;
    log::info!("Informe PDF exportado a {}", path.display());
    Ok(path.to_path_buf())
}

/// En el navegador se ofrece como descarga.
#[cfg(target_arch = "wasm32")]
pub fn export_report(
    outcome: &QuizOutcome,
    name: &str,
    path: &std::path::Path,
) -> Result<std::path::PathBuf> {
    use crate::error::QuizError;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    const REVOKE_DELAY_MS: i32 = 1_000;

    let browser = |e: wasm_bindgen::JsValue| QuizError::Browser(format!("{e:?}"));

    let bytes = build_pdf(outcome, name)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(REPORT_FILE_NAME)
        .to_string();

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array);
    let props = web_sys::BlobPropertyBag::new();
    props.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props).map_err(browser)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let window = web_sys::window().ok_or_else(|| QuizError::Browser("no hay window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| QuizError::Browser("no hay document".into()))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into()
        .map_err(|_| QuizError::Browser("no se pudo crear el enlace".into()))?;
    anchor.set_href(&url);
    anchor.set_download(&file_name);
    anchor.click();

    // La descarga arranca de forma asíncrona: la URL tiene que seguir viva un rato.
    let revoke = Closure::once_into_js(move || {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("No se pudo liberar la URL del PDF: {err:?}");
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), REVOKE_DELAY_MS)
        .map_err(browser)?;

    log::info!("Informe PDF ofrecido como descarga ({file_name})");
    Ok(std::path::PathBuf::from(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{NO_ANSWER, QuestionResult};
    use crate::model::{Difficulty, OptionExplanation, QuestionKind};
    use chrono::Utc;

    fn outcome() -> QuizOutcome {
        QuizOutcome {
            difficulty: Difficulty::Medium,
            score: 1,
            total: 2,
            elapsed: 42.5,
            finished_at: Utc::now(),
            results: vec![
                QuestionResult {
                    kind: QuestionKind::MultipleChoice,
                    question: "Which protocol matches this description: 'Used for web communication.'?".into(),
                    user_answer: "HTTP".into(),
                    answer: "HTTP".into(),
                    correct: true,
                    explanation: Explanation::PerOption(vec![
                        OptionExplanation { option: "HTTP".into(), text: "Used for web communication.".into() },
                        OptionExplanation { option: "DNS".into(), text: "Resolves domain names to IP addresses.".into() },
                    ]),
                },
                QuestionResult {
                    kind: QuestionKind::PortLookup,
                    question: "Which protocol uses port 53?".into(),
                    user_answer: NO_ANSWER.into(),
                    answer: "DNS".into(),
                    correct: false,
                    explanation: Explanation::Single("DNS uses port 53: Resolves domain names to IP addresses.".into()),
                },
            ],
        }
    }

    #[test]
    fn wrap_respects_width_and_keeps_words() {
        let lines = wrap_text("one two three four five six", 9);
        assert_eq!(lines, ["one two", "three", "four five", "six"]);
        assert_eq!(wrap_text("", 10), [""]);
        // una palabra más larga que el ancho va sola en su línea
        assert_eq!(wrap_text("abcdefghijkl xy", 5), ["abcdefghijkl", "xy"]);
    }

    #[test]
    fn report_lists_every_question_and_explanation() {
        let lines = render_report_lines(&outcome(), "  ");
        assert_eq!(lines[0], "Anonymous's Quiz Results");
        assert!(lines[1].contains("Score: 1/2"));
        assert!(lines[1].contains("Medium"));
        let text = lines.join("\n");
        assert!(text.contains("Q1: Which protocol matches"));
        assert!(text.contains("Q2: Which protocol uses port 53?"));
        assert!(text.contains("- DNS: Resolves domain names"));
        assert!(text.contains("Your answer: No answer (incorrect)"));
        assert!(lines.iter().all(|l| l.chars().count() <= WRAP_AT + 2));
    }

    #[test]
    fn pdf_bytes_have_pdf_header() {
        let bytes = build_pdf(&outcome(), "Ana").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_reports_span_pages() {
        let mut big = outcome();
        let template = big.results[1].clone();
        big.results = vec![template; 60];
        big.total = 60;
        let bytes = build_pdf(&big, "Ana").unwrap();
        assert!(render_report_lines(&big, "Ana").len() > ((PAGE_H - 2.0 * MARGIN) / LINE_H) as usize);

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn non_latin_characters_are_replaced() {
        assert_eq!(pdf_safe("José 🚀"), "José ?");
    }
}
