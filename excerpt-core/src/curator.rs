//! Reversible punctuation protection for quoted speech.
//!
//! Sentence splitting must not break on terminators that sit inside a pair of
//! double quotes. [`QuoteCurator::protect`] swaps those terminators for
//! sentinel characters, and [`QuoteCurator::restore_from_text`] swaps them back
//! and applies typographic quotes to the result.
//!
//! Sentinels are drawn from the Unicode private-use area. Each curator picks a
//! block of code points that does not occur in its own input, so restoring a
//! protected text always reproduces it exactly.

/// Punctuation classes that are hidden while a double quote is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// `...`
    Ellipsis,
    /// `..`
    DoubleDot,
    /// `.`
    Dot,
    /// `?`
    Question,
    /// `!`
    Exclamation,
}

impl Sentinel {
    /// Every sentinel class, in the order of their code point offsets.
    pub const ALL: [Sentinel; 5] = [
        Sentinel::Ellipsis,
        Sentinel::DoubleDot,
        Sentinel::Dot,
        Sentinel::Question,
        Sentinel::Exclamation,
    ];

    /// The punctuation this sentinel stands in for.
    pub fn punctuation(self) -> &'static str {
        match self {
            Sentinel::Ellipsis => "...",
            Sentinel::DoubleDot => "..",
            Sentinel::Dot => ".",
            Sentinel::Question => "?",
            Sentinel::Exclamation => "!",
        }
    }

    fn offset(self) -> u32 {
        match self {
            Sentinel::Ellipsis => 0,
            Sentinel::DoubleDot => 1,
            Sentinel::Dot => 2,
            Sentinel::Question => 3,
            Sentinel::Exclamation => 4,
        }
    }
}

/// Private-use ranges sentinel blocks are allocated from (BMP, then plane 15).
const PRIVATE_USE_RANGES: [(u32, u32); 2] = [(0xE000, 0xF8FF), (0xF_0000, 0xF_FFFD)];

/// Concrete sentinel characters owned by one curator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SentinelSet {
    base: u32,
}

impl SentinelSet {
    /// Pick the first block of private-use code points absent from `text`.
    fn choose(text: &str) -> Self {
        let used: Vec<u32> = {
            let mut used: Vec<u32> = text
                .chars()
                .map(u32::from)
                .filter(|&cp| {
                    PRIVATE_USE_RANGES
                        .iter()
                        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
                })
                .collect();
            used.sort_unstable();
            used.dedup();
            used
        };

        let block = Sentinel::ALL.len() as u32;
        for &(lo, hi) in &PRIVATE_USE_RANGES {
            let mut base = lo;
            while base + block - 1 <= hi {
                let clash = used
                    .binary_search_by(|cp| {
                        if *cp < base {
                            std::cmp::Ordering::Less
                        } else if *cp >= base + block {
                            std::cmp::Ordering::Greater
                        } else {
                            std::cmp::Ordering::Equal
                        }
                    })
                    .is_ok();
                if !clash {
                    return Self { base };
                }
                base += block;
            }
        }

        // Every block is taken; the text is private-use noise, degrade.
        Self {
            base: PRIVATE_USE_RANGES[0].0,
        }
    }

    fn char_for(self, sentinel: Sentinel) -> char {
        char::from_u32(self.base + sentinel.offset()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn sentinel_of(self, ch: char) -> Option<Sentinel> {
        let cp = u32::from(ch);
        if cp < self.base {
            return None;
        }
        Sentinel::ALL
            .iter()
            .copied()
            .find(|s| self.base + s.offset() == cp)
    }
}

/// Per-call quote curator holding the working text.
///
/// A curator must not be shared between unrelated documents: its sentinel
/// block is chosen from the text it was created with.
#[derive(Debug, Clone)]
pub struct QuoteCurator {
    text: String,
    sentinels: SentinelSet,
}

impl QuoteCurator {
    /// Create a curator over `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let sentinels = SentinelSet::choose(&text);
        Self { text, sentinels }
    }

    /// Normalize quotes and hide terminators that sit inside double quotes.
    ///
    /// A terminator run is considered quoted when an odd number of `"`
    /// characters follows it before the end of the text. Runs of dots are
    /// grouped greedily into `...`, then `..`, then `.`.
    pub fn protect(&mut self) -> &mut Self {
        let normalized = straighten_quotes(&decode_entities(&self.text));
        self.sentinels = SentinelSet::choose(&normalized);

        let mut quotes_after = normalized.matches('"').count();
        let mut protected = String::with_capacity(normalized.len());
        let mut chars = normalized.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    quotes_after -= 1;
                    protected.push(ch);
                }
                '.' => {
                    let mut run = 1;
                    while chars.next_if_eq(&'.').is_some() {
                        run += 1;
                    }
                    if quotes_after % 2 == 1 {
                        self.push_dot_run(&mut protected, run);
                    } else {
                        protected.extend(std::iter::repeat('.').take(run));
                    }
                }
                '?' if quotes_after % 2 == 1 => {
                    protected.push(self.sentinels.char_for(Sentinel::Question))
                }
                '!' if quotes_after % 2 == 1 => {
                    protected.push(self.sentinels.char_for(Sentinel::Exclamation))
                }
                _ => protected.push(ch),
            }
        }

        self.text = protected;
        self
    }

    fn push_dot_run(&self, out: &mut String, run: usize) {
        for _ in 0..run / 3 {
            out.push(self.sentinels.char_for(Sentinel::Ellipsis));
        }
        match run % 3 {
            2 => out.push(self.sentinels.char_for(Sentinel::DoubleDot)),
            1 => out.push(self.sentinels.char_for(Sentinel::Dot)),
            _ => {}
        }
    }

    /// The current working text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the curator and return the working text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Reverse sentinel substitution on the working text.
    pub fn restore(&self) -> String {
        self.restore_sentinels(&self.text)
    }

    /// Reverse sentinel substitution on `candidate` and curl its quotes.
    ///
    /// `candidate` is expected to be a fragment of this curator's protected
    /// text, typically one split sentence.
    pub fn restore_from_text(&self, candidate: &str) -> String {
        curly_quotes(&self.restore_sentinels(candidate))
    }

    fn restore_sentinels(&self, text: &str) -> String {
        let mut restored = String::with_capacity(text.len());
        for ch in text.chars() {
            match self.sentinels.sentinel_of(ch) {
                Some(sentinel) => restored.push_str(sentinel.punctuation()),
                None => restored.push(ch),
            }
        }
        restored
    }
}

/// Map every quote-like character onto a straight `"` or `'`.
///
/// Covers C1 controls left over from windows-1252 text decoded as Latin-1,
/// guillemets and the Unicode smart quotes.
pub fn straighten_quotes(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{0084}' | '\u{0093}' | '\u{0094}' => '"',
            '\u{0082}' | '\u{008B}' | '\u{0091}' | '\u{0092}' | '\u{009B}' => '\'',
            '\u{00AB}' | '\u{00BB}' => '"',
            '\u{2018}'..='\u{201B}' => '\'',
            '\u{201C}'..='\u{201F}' => '"',
            '\u{2039}' | '\u{203A}' => '\'',
            other => other,
        })
        .collect()
}

/// Turn straight quotes into typographic ones.
///
/// A `"` at the start of the text or after whitespace opens a pair that
/// closes at the next `"`. Single quotes followed by a space close, single
/// quotes preceded by a space open, and any other `'` becomes an apostrophe.
/// Unpaired double quotes are left straight.
pub fn curly_quotes(text: &str) -> String {
    curl_double_quotes(text)
        .replace("' ", "\u{2019} ")
        .replace(" '", " \u{2018}")
        .replace('\'', "\u{2019}")
}

fn curl_double_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut curled = String::with_capacity(text.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let opens = ch == '"' && (i == 0 || chars[i - 1].is_whitespace());
        if opens {
            let close = chars[i + 1..]
                .iter()
                .position(|&c| c == '"')
                .map(|offset| i + 1 + offset);
            if let Some(close) = close.filter(|&close| close > i + 1) {
                curled.push('\u{201C}');
                curled.extend(&chars[i + 1..close]);
                curled.push('\u{201D}');
                i = close + 1;
                continue;
            }
        }
        curled.push(ch);
        i += 1;
    }

    curled
}

/// Decode the HTML entities that commonly carry quotes in scraped prose.
///
/// Unknown or malformed entities are kept verbatim.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match candidate
            .char_indices()
            .take(12)
            .find(|&(_, c)| c == ';')
            .and_then(|(semi, _)| decode_entity(&candidate[1..semi]).map(|ch| (semi, ch)))
        {
            Some((semi, ch)) => {
                decoded.push(ch);
                rest = &candidate[semi + 1..];
            }
            None => {
                decoded.push('&');
                rest = &candidate[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(numeric) = name.strip_prefix('#') {
        let hex = numeric
            .strip_prefix('x')
            .or_else(|| numeric.strip_prefix('X'));
        let code = match hex {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code).filter(|&c| c != '\0');
    }

    let ch = match name {
        "quot" => '"',
        "apos" => '\'',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "nbsp" => '\u{00A0}',
        "laquo" => '\u{00AB}',
        "raquo" => '\u{00BB}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "sbquo" => '\u{201A}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "bdquo" => '\u{201E}',
        "lsaquo" => '\u{2039}',
        "rsaquo" => '\u{203A}',
        "hellip" => '\u{2026}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protected(text: &str) -> QuoteCurator {
        let mut curator = QuoteCurator::new(text);
        curator.protect();
        curator
    }

    #[test]
    fn test_terminators_inside_quotes_are_hidden() {
        let curator = protected(r#"He said "Stop. Now!" and left."#);
        let text = curator.text();

        // Both terminators inside the quotes are gone, the final period stays.
        assert!(!text[..text.len() - 1].contains('.'));
        assert!(!text.contains('!'));
        assert!(text.ends_with("left."));
    }

    #[test]
    fn test_terminators_outside_quotes_are_kept() {
        let curator = protected(r#"First. "Quoted" then more? Yes!"#);
        assert_eq!(curator.text(), r#"First. "Quoted" then more? Yes!"#);
    }

    #[test]
    fn test_restore_round_trip() {
        let text = r#"She asked "why... really.. why?" and "no!" Then. Done"#;
        let curator = protected(text);
        assert_ne!(curator.text(), text);
        assert_eq!(curator.restore(), text);
    }

    #[test]
    fn test_dot_runs_are_grouped() {
        let curator = protected("\"a.... b.....\"");
        let restored = curator.restore();
        assert_eq!(restored, "\"a.... b.....\"");

        let sentinels: Vec<char> = curator
            .text()
            .chars()
            .filter(|c| !c.is_ascii())
            .collect();
        // "...." -> ellipsis + dot, "....." -> ellipsis + double dot
        assert_eq!(sentinels.len(), 4);
    }

    #[test]
    fn test_sentinels_avoid_existing_private_use_chars() {
        let text = "\u{E000}\u{E002} \"Hi. There\" end.";
        let curator = protected(text);
        assert_eq!(curator.restore(), text);
        assert!(curator.text().contains('\u{E000}'));
    }

    #[test]
    fn test_smart_quotes_are_straightened() {
        let text = "\u{201C}Hi\u{201D} \u{2018}yo\u{2019} \u{00AB}x\u{00BB} \u{0093}y\u{0094}";
        assert_eq!(straighten_quotes(text), "\"Hi\" 'yo' \"x\" \"y\"");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(decode_entities("&quot;hi&quot; &amp; &#39;x&#x27;"), "\"hi\" & 'x'");
        assert_eq!(decode_entities("AT&T &bogus; &"), "AT&T &bogus; &");
        assert_eq!(decode_entities("&ldquo;ok&rdquo;"), "\u{201C}ok\u{201D}");
    }

    #[test]
    fn test_curly_double_quotes() {
        assert_eq!(
            curly_quotes(r#""Yes" he said "twice""#),
            "\u{201C}Yes\u{201D} he said \u{201C}twice\u{201D}"
        );
    }

    #[test]
    fn test_curly_quotes_leave_unpaired_straight() {
        assert_eq!(curly_quotes(r#"a "dangling"#), r#"a "dangling"#);
        assert_eq!(curly_quotes(r#"mid"word" x"#), r#"mid"word" x"#);
    }

    #[test]
    fn test_apostrophes() {
        assert_eq!(curly_quotes("we've"), "we\u{2019}ve");
        assert_eq!(curly_quotes("say 'hi' now"), "say \u{2018}hi\u{2019} now");
        assert_eq!(curly_quotes("the Smiths' car"), "the Smiths\u{2019} car");
    }

    #[test]
    fn test_restore_from_text_curls() {
        let curator = protected(r#""Wait... what?" she asked."#);
        let restored = curator.restore_from_text(curator.text());
        assert_eq!(restored, "\u{201C}Wait... what?\u{201D} she asked.");
    }

    #[test]
    fn test_unbalanced_quotes_degrade() {
        // One quote: every terminator before it is followed by an odd count.
        let text = "One. Two \" three. Four.";
        let curator = protected(text);
        assert_eq!(curator.restore(), text);
        assert!(curator.text().starts_with("One"));
        assert!(!curator.text().starts_with("One."));
        assert!(curator.text().ends_with("Four."));
    }
}
