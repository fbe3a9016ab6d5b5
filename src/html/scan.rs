//! Low-level HTML tokenizer for generated report pages
//!
//! Understands tags, attributes, comments and raw-text elements, which is
//! everything the report generator emits. Tag and attribute names are
//! matched case-insensitively on ASCII.

/// One token from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `<name attr=...>`; `self_closing` for `<name/>`
    Open(Tag),
    /// `</name>`
    Close(String),
    /// Raw text between tags (entities still encoded)
    Text(&'a str),
}

/// An opening tag with its attributes, names lowercased
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub self_closing: bool,
}

impl Tag {
    /// Attribute value by (lowercase) name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Iterator over the tokens of an HTML string
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset of the next unread token
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Skip past the closing tag of a raw-text element (`script`, `style`)
    fn skip_raw_text(&mut self, name: &str) {
        let close = format!("</{}", name);
        match find_ci(self.src, &close, self.pos) {
            Some(idx) => {
                self.pos = match self.src[idx..].find('>') {
                    Some(gt) => idx + gt + 1,
                    None => self.src.len(),
                }
            }
            None => self.pos = self.src.len(),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let src = self.src;
        while self.pos < src.len() {
            let rest = &src[self.pos..];

            if !rest.starts_with('<') {
                // Text runs up to the next '<'
                let end = rest.find('<').unwrap_or(rest.len());
                self.pos += end;
                return Some(Token::Text(&rest[..end]));
            }

            // Comments and markup declarations
            if rest.starts_with("<!--") {
                self.pos += rest.find("-->").map(|i| i + 3).unwrap_or(rest.len());
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                self.pos += rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
                continue;
            }

            // A lone '<' that doesn't start a tag is text
            let next = rest[1..].chars().next();
            let is_tag = matches!(next, Some(c) if c.is_ascii_alphabetic() || c == '/');
            if !is_tag {
                self.pos += 1;
                return Some(Token::Text(&rest[..1]));
            }

            let end = match tag_end(rest) {
                Some(end) => end,
                None => {
                    self.pos = src.len();
                    return None;
                }
            };
            let body = &rest[1..end];
            self.pos += end + 1;

            if let Some(name) = body.strip_prefix('/') {
                return Some(Token::Close(name.trim().to_ascii_lowercase()));
            }

            let tag = parse_tag(body);
            if tag.name == "script" || tag.name == "style" {
                self.skip_raw_text(&tag.name);
            }
            return Some(Token::Open(tag));
        }
        None
    }
}

/// Index of the `>` that ends the tag starting at `s[0] == '<'`, honouring quotes
fn tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, ch) in s.char_indices().skip(1) {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(ch),
            (None, '>') => return Some(i),
            _ => {}
        }
    }
    None
}

/// Parse the inside of an opening tag: `name attr="v" attr2=v2 flag`
fn parse_tag(body: &str) -> Tag {
    let (body, self_closing) = match body.trim_end().strip_suffix('/') {
        Some(b) => (b, true),
        None => (body, false),
    };

    let name_end = body
        .find(|c: char| c.is_whitespace())
        .unwrap_or(body.len());
    let name = body[..name_end].to_ascii_lowercase();

    let mut attrs = Vec::new();
    let mut chars = body[name_end..].char_indices().peekable();
    let rest = &body[name_end..];

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        // Attribute name
        let mut name_end = start;
        while let Some(&(i, c)) = chars.peek() {
            if c.is_whitespace() || c == '=' {
                break;
            }
            name_end = i + c.len_utf8();
            chars.next();
        }
        let attr_name = rest[start..name_end].to_ascii_lowercase();

        // Optional whitespace and '='
        while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
            chars.next();
        }
        if !matches!(chars.peek(), Some(&(_, '='))) {
            if !attr_name.is_empty() {
                attrs.push((attr_name, String::new()));
            }
            continue;
        }
        chars.next();
        while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
            chars.next();
        }

        // Value: quoted or bare
        let value = match chars.peek().copied() {
            Some((i, q)) if q == '"' || q == '\'' => {
                chars.next();
                let mut end = rest.len();
                for (j, c) in chars.by_ref() {
                    if c == q {
                        end = j;
                        break;
                    }
                }
                &rest[i + 1..end]
            }
            Some((i, _)) => {
                let mut end = rest.len();
                while let Some(&(j, c)) = chars.peek() {
                    if c.is_whitespace() {
                        end = j;
                        break;
                    }
                    chars.next();
                }
                &rest[i..end]
            }
            None => "",
        };

        if !attr_name.is_empty() {
            attrs.push((attr_name, super::encode::decode_entities(value)));
        }
    }

    Tag {
        name,
        attrs,
        self_closing,
    }
}

/// Case-insensitive ASCII substring search starting at `from`
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || needle.len() > hay.len() || from >= hay.len() {
        return None;
    }
    (from..=hay.len() - needle.len()).find(|&i| {
        hay[i..i + needle.len()]
            .iter()
            .zip(needle)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    })
}

/// Inner markup of the element with the given `id`
///
/// Nested elements with the same tag name are balanced; an unclosed
/// element runs to the end of the document.
pub fn element_inner<'a>(doc: &'a str, id: &str) -> Option<&'a str> {
    let mut tokens = Tokenizer::new(doc);
    let (name, start) = loop {
        match tokens.next()? {
            Token::Open(tag) if tag.attr("id") == Some(id) => {
                if tag.self_closing {
                    return Some("");
                }
                break (tag.name, tokens.offset());
            }
            _ => {}
        }
    };

    let mut depth = 0usize;
    loop {
        let before = tokens.offset();
        match tokens.next() {
            None => return Some(&doc[start..]),
            Some(Token::Open(tag)) if tag.name == name && !tag.self_closing => depth += 1,
            Some(Token::Close(close)) if close == name => {
                if depth == 0 {
                    return Some(&doc[start..before]);
                }
                depth -= 1;
            }
            Some(_) => {}
        }
    }
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() || ch == '\u{a0}' {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
