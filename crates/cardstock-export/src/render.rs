//! Card-block rendering and the fixed page assets.
//!
//! Each card becomes one self-contained `<div class='card'>` fragment:
//! the processed answer, popup buttons for secondary field content, and a
//! tag summary. Secondary fields are revealed lazily by a small inline
//! script that opens a popup window with an image, an embedded frame for
//! an external URL, or plain text, depending on the flag pair baked into
//! the button.

use cardstock::{CardInfo, NoteField};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex_lite::Regex;

use crate::error::Result;
use crate::media::{MediaResolver, Rewritten, extract_media_refs, rewrite_media_refs};
use crate::store::CardStore;

/// The fixed dark-theme stylesheet written to `css/styles.css`.
pub(crate) const STYLESHEET: &str = r#"
body {
    font-family: Arial, sans-serif;
    background: #121212;
    color: #ffffff;
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 20px;
}
.card {
    border: 1px solid #444;
    padding: 20px;
    margin: 10px;
    border-radius: 8px;
    background: #1e1e1e;
    width: 60%;
    text-align: center;
    position: relative;
}
.card-id {
    font-size: 12px;
    color: #aaa;
    text-decoration: none;
    position: absolute;
    top: 5px;
    right: 10px;
}
.tags {
    font-size: 12px;
    color: #aaa;
    margin-top: 10px;
    border-top: 1px solid #444;
    padding-top: 5px;
}
img {
    max-width: 100%;
    display: block;
    margin: 10px auto;
}
.extra-info-button {
    background-color: #333;
    color: #fff;
    border: none;
    padding: 5px 10px;
    cursor: pointer;
    margin-top: 5px;
    border-radius: 5px;
    text-decoration: none;
    display: inline-block;
}
.extra-info-button:hover {
    background-color: #555;
}
"#;

/// The popup-reveal helper inlined into the page head.
///
/// Text payloads arrive percent-encoded (see [`popup_payload`]) and are
/// decoded here at display time.
pub(crate) const POPUP_SCRIPT: &str = r#"
function openExtraInfo(content, isImage, isUrl) {
    let newWindow = window.open("", "_blank", "width=600,height=400");
    newWindow.document.write("<html><head><title>Extra Info</title></head><body>");
    if (isImage) {
        newWindow.document.write("<img src='" + content + "' style='max-width:100%;'>");
    } else if (isUrl) {
        newWindow.document.write("<iframe src='" + content + "' style='width:100%; height:100%; border:none;'></iframe>");
    } else {
        newWindow.document.write("<p style='font-size:16px; white-space:pre-wrap;'>" + decodeURIComponent(content) + "</p>");
    }
    newWindow.document.write("</body></html>");
    newWindow.document.close();
}
"#;

/// Everything before the first card block.
pub(crate) fn page_header() -> String {
    format!(
        "<html><head><meta charset='utf-8'><title>Exported Cards</title>\
         <link rel='stylesheet' type='text/css' href='css/styles.css'>\
         <script>{}</script></head><body>",
        POPUP_SCRIPT
    )
}

/// Everything after the last card block.
pub(crate) const PAGE_FOOTER: &str = "</body></html>";

/// Remove the embedded tags-container block the host application injects
/// into rendered answers. Matched permissively: case-insensitive, across
/// line breaks.
pub fn strip_tags_container(html: &str) -> String {
    let pattern = Regex::new(r#"(?is)<div id="tags-container".*?>.*?</div>"#).unwrap();
    pattern.replace_all(html, "").into_owned()
}

/// Render one card to a self-contained HTML fragment.
///
/// Internal media references in the answer are resolved into the bundle;
/// external URLs get an "External Media" popup button appended instead of
/// inline treatment. Secondary fields each become a popup button unless
/// the field is empty, already contained in the rendered answer, or is
/// the card's front side.
pub async fn render_card<S: CardStore>(
    card: &CardInfo,
    resolver: &MediaResolver<'_, S>,
) -> Result<String> {
    let answer = strip_tags_container(&card.answer);
    let Rewritten {
        html: answer,
        external,
    } = rewrite_media_refs(&answer, resolver).await?;

    let id = card.card_id;
    let mut block = String::new();
    block.push_str("<div class='card'>");
    block.push_str(&format!(
        "<a href='#{id}' class='card-id' id='{id}'>Card ID: {id}</a>"
    ));
    block.push_str(&format!("<p>{answer}</p>"));

    for url in &external {
        block.push_str(&format!(
            "<button class='extra-info-button' \
             onclick=\"openExtraInfo('{url}', false, true)\">External Media</button>"
        ));
    }

    for (name, field) in fields_in_order(card) {
        let value = field.value.trim();
        // Duplicate-content suppression is a raw substring check against
        // the rewritten answer; whitespace or entity differences defeat
        // it. Kept as a heuristic, not a dedup guarantee.
        if value.is_empty()
            || answer.contains(value)
            || name.eq_ignore_ascii_case("front")
            || name.eq_ignore_ascii_case("question")
        {
            continue;
        }

        let refs = extract_media_refs(value);
        if refs.is_empty() {
            block.push_str(&format!(
                "<button class='extra-info-button' \
                 onclick=\"openExtraInfo('{}', false, false)\">{}</button>",
                popup_payload(value),
                escape_html(name)
            ));
        } else {
            for media_ref in &refs {
                if let Some(path) = resolver.resolve(media_ref).await? {
                    block.push_str(&format!(
                        "<button class='extra-info-button' \
                         onclick=\"openExtraInfo('{path}', true, false)\">{}</button>",
                        escape_html(name)
                    ));
                }
            }
        }
    }

    if !card.tags.is_empty() {
        block.push_str(&format!(
            "<p class='tags'>Tags: {}</p>",
            card.tags.join(", ")
        ));
    }
    block.push_str("</div>");
    Ok(block)
}

/// The card's fields sorted by their position in the note type.
///
/// The wire format is a map, so iteration order would otherwise vary
/// from run to run.
fn fields_in_order(card: &CardInfo) -> Vec<(&str, &NoteField)> {
    let mut fields: Vec<(&str, &NoteField)> = card
        .fields
        .iter()
        .map(|(name, field)| (name.as_str(), field))
        .collect();
    fields.sort_by_key(|(_, field)| field.order);
    fields
}

/// Escape a string for embedding in HTML text or attribute content.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Encode a field value for the text-popup onclick payload.
///
/// The value is HTML-escaped, then percent-encoded so it survives inline
/// attribute embedding; the popup script decodes it again at display
/// time.
fn popup_payload(value: &str) -> String {
    utf8_percent_encode(&escape_html(value), NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MemoryStore, card, card_with_fields};

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\0";

    fn resolver_into<'a>(
        store: &'a MemoryStore,
        dir: &tempfile::TempDir,
    ) -> MediaResolver<'a, MemoryStore> {
        MediaResolver::new(store, dir.path().join("media"))
    }

    #[test]
    fn test_strip_tags_container() {
        let html = "before<div id=\"tags-container\" class=\"x\">\n<span>tag ui</span>\n</div>after";
        assert_eq!(strip_tags_container(html), "beforeafter");
    }

    #[test]
    fn test_strip_tags_container_case_insensitive() {
        let html = r#"a<DIV ID="TAGS-CONTAINER">junk</DIV>b"#;
        // (?i) applies to the literal part of the pattern too.
        assert_eq!(strip_tags_container(html), "ab");
    }

    #[test]
    fn test_strip_leaves_other_divs() {
        let html = r#"<div id="content">keep</div>"#;
        assert_eq!(strip_tags_container(html), html);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b a="1">&'"#), "&lt;b a=&quot;1&quot;&gt;&amp;&#x27;");
    }

    #[test]
    fn test_popup_payload_is_attribute_safe() {
        let payload = popup_payload("it's <b>bold</b>");
        assert!(!payload.contains('\''));
        assert!(!payload.contains('<'));
        assert!(!payload.contains(' '));
    }

    #[tokio::test]
    async fn test_render_plain_card() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::default();
        let resolver = resolver_into(&store, &dir);

        let mut c = card(42, "<b>la respuesta</b>");
        c.tags = vec!["verbs".into(), "a1".into()];
        let block = render_card(&c, &resolver).await.unwrap();

        assert!(block.starts_with("<div class='card'>"));
        assert!(block.contains("Card ID: 42"));
        assert!(block.contains("<p><b>la respuesta</b></p>"));
        assert!(block.contains("<p class='tags'>Tags: verbs, a1</p>"));
        assert!(block.ends_with("</div>"));
    }

    #[tokio::test]
    async fn test_render_has_no_tags_line_without_tags() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::default();
        let resolver = resolver_into(&store, &dir);

        let block = render_card(&card(1, "answer"), &resolver).await.unwrap();
        assert!(!block.contains("class='tags'"));
    }

    #[tokio::test]
    async fn test_front_and_duplicate_fields_are_suppressed() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::default();
        let resolver = resolver_into(&store, &dir);

        let c = card_with_fields(
            7,
            "the answer text",
            &[
                ("Front", "the prompt", 0),
                ("Back", "answer text", 1), // substring of the answer
                ("Question", "also the prompt", 2),
                ("Empty", "   ", 3),
                ("Notes", "extra detail", 4),
            ],
        );
        let block = render_card(&c, &resolver).await.unwrap();

        // Only "Notes" survives the skip rules.
        assert_eq!(block.matches("extra-info-button").count(), 1);
        assert!(block.contains(">Notes</button>"));
    }

    #[tokio::test]
    async fn test_text_field_payload_is_encoded_not_raw() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::default();
        let resolver = resolver_into(&store, &dir);

        let c = card_with_fields(7, "answer", &[("Notes", "it's extra", 0)]);
        let block = render_card(&c, &resolver).await.unwrap();

        // HTML-escaped first ("it&#x27;s extra"), then percent-encoded.
        assert!(block.contains("openExtraInfo('it%26%23x27%3Bs%20extra', false, false)"));
    }

    #[tokio::test]
    async fn test_media_field_renders_image_button() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::with_media("diagram.png", PNG_HEADER);
        let resolver = resolver_into(&store, &dir);

        let c = card_with_fields(7, "answer", &[("Extra", r#"<img src="diagram.png">"#, 0)]);
        let block = render_card(&c, &resolver).await.unwrap();

        assert!(block.contains("openExtraInfo('media/diagram.png', true, false)"));
        assert!(dir.path().join("media/diagram.png").exists());
    }

    #[tokio::test]
    async fn test_external_reference_gets_popup_button() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::default();
        let resolver = resolver_into(&store, &dir);

        let c = card(9, r#"see <img src="https://example.com/a.png">"#);
        let block = render_card(&c, &resolver).await.unwrap();

        // Left inline as-is, plus a popup trigger.
        assert!(block.contains(r#"src="https://example.com/a.png""#));
        assert!(block.contains(
            "openExtraInfo('https://example.com/a.png', false, true)\">External Media</button>"
        ));
    }

    #[tokio::test]
    async fn test_fields_render_in_note_type_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::default();
        let resolver = resolver_into(&store, &dir);

        let c = card_with_fields(
            7,
            "answer",
            &[("Zeta", "one", 2), ("Alpha", "two", 1), ("Mid", "three", 5)],
        );
        let block = render_card(&c, &resolver).await.unwrap();

        let alpha = block.find(">Alpha<").unwrap();
        let zeta = block.find(">Zeta<").unwrap();
        let mid = block.find(">Mid<").unwrap();
        assert!(alpha < zeta && zeta < mid);
    }
}
