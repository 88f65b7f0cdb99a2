use std::sync::LazyLock;

use regex::{Captures, Regex};

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid fenced block pattern"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n+").expect("valid paragraph pattern"));

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Element id of the `index`-th fenced block rendered with `id_prefix`.
fn code_block_id(id_prefix: &str, index: usize) -> String {
    format!("{id_prefix}-{index}")
}

fn code_block_markup(id: &str, code: &str) -> String {
    format!(
        "<div class=\"code-block-wrapper\"><pre><code id=\"{id}\">{code}</code></pre>\
<button class=\"copy-btn\" data-copy-target=\"{id}\" \
onclick=\"navigator.clipboard.writeText(document.getElementById('{id}').textContent)\">Copy</button></div>",
        code = escape_html(code.trim()),
    )
}

/// Convert an assistant reply to markup.
///
/// Fenced blocks are replaced first (escaped, with a copy button), then inline
/// spans, then runs of blank lines become `<br><br>`. Inline span content is
/// left unescaped. Block ids are `{id_prefix}-{n}` so the output is stable.
pub fn format_message(raw: &str, id_prefix: &str) -> String {
    let mut block_index = 0_usize;
    let with_blocks = FENCED_BLOCK.replace_all(raw, |caps: &Captures<'_>| {
        let id = code_block_id(id_prefix, block_index);
        block_index += 1;
        code_block_markup(&id, &caps[1])
    });

    let with_inline =
        INLINE_CODE.replace_all(&with_blocks, "<code class=\"inline-code\">$1</code>");

    PARAGRAPH_BREAK
        .replace_all(&with_inline, "<br><br>")
        .into_owned()
}
