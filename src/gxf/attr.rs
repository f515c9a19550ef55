use hashbrown::HashMap;

/// Attribute key to value mapping for a single record.
pub type Attributes = HashMap<String, String>;

/// Decodes a raw attribute field into the caller-supplied map.
pub type AttributeDecoder = fn(&str, &mut Attributes);

/// Decodes GTF attributes: `key "value"; key "value";`.
///
/// The first word of each `;`-separated token is the key and the first
/// quoted substring after it is the value. Unquoted values decode to an
/// empty string; tokens without a key are dropped. Last occurrence wins.
///
/// # Example
///
/// ```rust, ignore
/// let mut attrs = Attributes::new();
/// decode_gtf("gene_id \"G1\"; transcript_id \"T1\";", &mut attrs);
/// assert_eq!(attrs["gene_id"], "G1");
/// ```
pub fn decode_gtf(field: &str, attributes: &mut Attributes) {
    for token in field.split(';') {
        let token = token.trim_start_matches(is_blank);
        let Some(key) = token.split(is_blank).next().filter(|key| !key.is_empty()) else {
            continue;
        };

        let rest = &token[key.len()..];
        let value = match rest.find('"') {
            Some(open) => {
                let quoted = &rest[open + 1..];
                match quoted.find('"') {
                    Some(close) => &quoted[..close],
                    None => quoted,
                }
            }
            None => "",
        };

        attributes.insert(key.to_string(), value.to_string());
    }
}

/// Decodes GFF attributes: `key=value;key=value`.
///
/// Key and value are split on the first `=` and trimmed of spaces and tabs;
/// the value is then percent-decoded. Tokens without `=` are dropped.
pub fn decode_gff(field: &str, attributes: &mut Attributes) {
    for token in field.split(';') {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };

        attributes.insert(
            trim_blanks(key).to_string(),
            percent_decode(trim_blanks(value)),
        );
    }
}

/// Decodes GFF3 attributes. Same grammar as [`decode_gff`].
pub fn decode_gff3(field: &str, attributes: &mut Attributes) {
    decode_gff(field, attributes)
}

/// Replaces every `%XX` escape (two hex digits) with its byte.
///
/// Malformed escapes are kept literally. Bytes that do not form valid
/// UTF-8 after decoding are replaced with U+FFFD.
///
/// # Example
///
/// ```rust, ignore
/// assert_eq!(percent_decode("gene%3A001"), "gene:001");
/// assert_eq!(percent_decode("a%G1b"), "a%G1b");
/// ```
pub fn percent_decode(value: &str) -> String {
    if !value.contains('%') {
        return value.to_string();
    }

    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut idx = 0;

    while idx < bytes.len() {
        if bytes[idx] == b'%' && idx + 2 < bytes.len() {
            let (hi, lo) = (hex_value(bytes[idx + 1]), hex_value(bytes[idx + 2]));
            if let (Some(hi), Some(lo)) = (hi, lo) {
                decoded.push(hi << 4 | lo);
                idx += 3;
                continue;
            }
        }
        decoded.push(bytes[idx]);
        idx += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

#[inline(always)]
fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Field separators of the annotation formats: ASCII space, tab, newline,
/// vertical tab, form feed and carriage return.
#[inline(always)]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

#[inline(always)]
fn trim_blanks(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}
