//! Tag-level view of a markup fragment.
//!
//! Tokenizing is done by `quick-xml` in its lenient mode: end names are not
//! checked and attributes are read HTML-style. An XML reader misreads a few
//! things that are common in theme translations, so they are blanked out first
//! in a copy of the same length and byte offsets still point into the
//! original fragment:
//!
//! - Liquid blocks (`{{ ... }}`, `{% ... %}`)
//! - the content of `script` and `style` elements
//! - a `<` that cannot start a tag (`1 < 2`)

use std::sync::LazyLock;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use regex::bytes::Regex;

static LIQUID_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{.*?\}\}|\{%.*?%\}").unwrap());

static RAW_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>(.*?)</script|<style\b[^>]*>(.*?)</style").unwrap()
});

/// An attribute of a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// Value as written, without quotes; `None` for boolean attributes
    /// (`<input disabled>`).
    pub value: Option<String>,
    /// Quote character around the value, `None` if unquoted.
    pub quote: Option<char>,
    pub offset: usize,
}

/// A tag-level token. Text, comments and doctypes are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag {
        name: String,
        attributes: Vec<Attribute>,
        self_closing: bool,
        offset: usize,
    },
    EndTag {
        name: String,
        offset: usize,
    },
    /// The reader gave up at `offset`; nothing after it was tokenized.
    Malformed { offset: usize, message: String },
}

/// Split a markup fragment into start and end tags.
///
/// Offsets are byte offsets into `markup`.
pub fn tokenize(markup: &str) -> Vec<Token> {
    let masked = mask(markup);
    let mut reader = Reader::from_reader(masked.as_slice());
    reader
        .trim_text(false)
        .check_end_names(false)
        .expand_empty_elements(false);

    let mut tokens = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) => tokens.push(start_tag(markup, &masked, &tag, false)),
            Ok(Event::Empty(tag)) => tokens.push(start_tag(markup, &masked, &tag, true)),
            Ok(Event::End(tag)) => {
                let name = tag.name();
                tokens.push(Token::EndTag {
                    name: String::from_utf8_lossy(name.as_ref()).into_owned(),
                    offset: tag_start(&masked, offset_of(&masked, name.as_ref())),
                });
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                tokens.push(Token::Malformed {
                    offset: tag_start(&masked, reader.buffer_position() + 1),
                    message: err.to_string(),
                });
                break;
            }
        }
    }

    tokens
}

fn start_tag(markup: &str, masked: &[u8], tag: &BytesStart<'_>, self_closing: bool) -> Token {
    let name = tag.name();

    let attributes = tag
        .html_attributes()
        .with_checks(false)
        .filter_map(Result::ok)
        .map(|attr| attribute(markup, masked, attr.key.as_ref(), attr.value.len()))
        .collect();

    Token::StartTag {
        name: String::from_utf8_lossy(name.as_ref()).into_owned(),
        attributes,
        self_closing,
        offset: tag_start(masked, offset_of(masked, name.as_ref())),
    }
}

/// Read quoting and value of the attribute whose name is `key`.
///
/// `quick-xml` drops the quotes, so they are looked up next to the name. The
/// value text is taken from `markup`, where Liquid is still in place.
fn attribute(markup: &str, masked: &[u8], key: &[u8], value_len: usize) -> Attribute {
    let offset = offset_of(masked, key);
    let mut pos = skip_whitespace(masked, offset + key.len());

    let (value, quote) = if masked.get(pos) == Some(&b'=') {
        pos = skip_whitespace(masked, pos + 1);
        let quote = masked
            .get(pos)
            .copied()
            .filter(|&b| matches!(b, b'"' | b'\''))
            .map(char::from);
        let start = if quote.is_some() { pos + 1 } else { pos };
        let text = markup.get(start..start + value_len).unwrap_or_default();
        (Some(text.to_string()), quote)
    } else {
        (None, None)
    };

    Attribute {
        name: String::from_utf8_lossy(key).into_owned(),
        value,
        quote,
        offset,
    }
}

/// Copy of `markup` with the constructs listed in the module docs blanked out.
fn mask(markup: &str) -> Vec<u8> {
    let mut masked = markup.as_bytes().to_vec();

    for block in LIQUID_BLOCK.find_iter(markup.as_bytes()) {
        // Keep an unquoted attribute value (`href={{ url }}`) non-empty
        let filler = if follows_equals(&masked[..block.start()]) {
            b'_'
        } else {
            b' '
        };
        masked[block.range()].fill(filler);
    }

    let raw_text: Vec<_> = RAW_TEXT
        .captures_iter(&masked)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|content| content.range())
        .collect();
    for range in raw_text {
        masked[range].fill(b' ');
    }

    let lone: Vec<usize> = masked
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'<' && !can_open_tag(masked.get(i + 1)))
        .map(|(i, _)| i)
        .collect();
    for i in lone {
        masked[i] = b' ';
    }

    masked
}

fn follows_equals(before: &[u8]) -> bool {
    before
        .iter()
        .rev()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'=')
}

fn can_open_tag(next: Option<&u8>) -> bool {
    next.is_some_and(|&b| b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'))
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }
    pos
}

/// Position of `part`, a slice borrowed from `source`, within `source`.
fn offset_of(source: &[u8], part: &[u8]) -> usize {
    (part.as_ptr() as usize).saturating_sub(source.as_ptr() as usize)
}

/// Offset of the `<` that opens the construct around `pos`.
fn tag_start(masked: &[u8], pos: usize) -> usize {
    masked[..pos.min(masked.len())]
        .iter()
        .rposition(|&b| b == b'<')
        .unwrap_or(0)
}
