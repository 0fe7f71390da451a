use std::{iter::Peekable, ops::Range, str::CharIndices};

#[derive(Debug)]
pub enum GrokPatternError {
    /// An illegal character was found at the given position inside a
    /// `%{NAME...}` reference.
    InvalidCharacter(#[allow(unused)] char),
    /// The reference could not be parsed (unclosed `%{`, empty segment, or
    /// too many `:`-separated segments).
    InvalidPattern,
}

/// A single piece of a template: either raw regex text or a parsed
/// `%{NAME:field:type}` reference.
pub enum GrokComponent<'a> {
    /// A chunk of literal regex, passed through to the engine untouched.
    RegularExpression {
        range: Range<usize>,
        string: &'a str,
    },
    /// A `%{...}` placeholder.
    GrokPattern {
        range: Range<usize>,
        pattern: &'a str,
        name: &'a str,
        field: &'a str,
        type_tag: &'a str,
    },
    /// The template could not be parsed.
    PatternError(GrokPatternError),
}

impl std::fmt::Debug for GrokComponent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrokComponent::RegularExpression { string, .. } => write!(f, "{string:?}"),
            GrokComponent::GrokPattern {
                name,
                field,
                type_tag,
                ..
            } => write!(f, "%{{ name={name:?} field={field:?} type={type_tag:?} }}"),
            GrokComponent::PatternError(e) => write!(f, "<error {e:?}>"),
        }
    }
}

impl std::fmt::Display for GrokComponent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrokComponent::RegularExpression { string, .. } => f.write_str(string),
            GrokComponent::GrokPattern { pattern, .. } => f.write_str(pattern),
            GrokComponent::PatternError(e) => write!(f, "<error {e:?}>"),
        }
    }
}

/// An iterator over the components of a grok template.
///
/// This is a hand-rolled state machine rather than a regex, since the
/// thing being tokenized is itself the input to a regex engine.
pub struct GrokSplit<'a> {
    string: &'a str,
    string_iter: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator for GrokSplit<'a> {
    type Item = GrokComponent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            res @ Some(GrokComponent::PatternError(_)) => {
                // Fuse the iterator once it has produced an error.
                self.string_iter = "".char_indices().peekable();
                res
            }
            res => res,
        }
    }
}

impl<'a> GrokSplit<'a> {
    fn try_next(&mut self) -> Option<GrokComponent<'a>> {
        let (start, next) = self.string_iter.next()?;

        if next == '%' {
            if let Some(&(_, '{')) = self.string_iter.peek() {
                self.string_iter.next();
                return Some(self.parse_reference(start));
            }
        }

        Some(self.scan_literal(start, next == '['))
    }

    /// Scans a run of literal regex text starting at byte offset `start`,
    /// stopping before the next top-level `%{`. A `%` seen while inside a
    /// `[...]` character class does not start a reference: grok references
    /// are only recognized at the top level of the template. `in_class`
    /// reflects whether the character already consumed to reach `start`
    /// (the one that produced this call) itself opened a character class.
    fn scan_literal(&mut self, start: usize, mut in_class: bool) -> GrokComponent<'a> {
        while let Some(&(index, c)) = self.string_iter.peek() {
            if in_class {
                self.string_iter.next();
                if c == '\\' {
                    self.string_iter.next();
                } else if c == ']' {
                    in_class = false;
                }
                continue;
            }
            if c == '[' {
                in_class = true;
                self.string_iter.next();
                continue;
            }
            if c == '%' {
                let mut lookahead = self.string_iter.clone();
                lookahead.next();
                if matches!(lookahead.peek(), Some((_, '{'))) {
                    let range = start..index;
                    return GrokComponent::RegularExpression {
                        string: &self.string[range.clone()],
                        range,
                    };
                }
            }
            self.string_iter.next();
        }
        let range = start..self.string.len();
        GrokComponent::RegularExpression {
            string: &self.string[range.clone()],
            range,
        }
    }

    /// Parses the body of a reference after `%{` has already been consumed.
    /// `start` is the byte offset of the leading `%`.
    fn parse_reference(&mut self, start: usize) -> GrokComponent<'a> {
        let mut components: [&'a str; 3] = ["", "", ""];
        let mut comp_index = 0;

        loop {
            match self.munch_segment(comp_index) {
                Ok((terminator, word)) => {
                    if comp_index == 3 {
                        return GrokComponent::PatternError(GrokPatternError::InvalidPattern);
                    }
                    components[comp_index] = word;
                    let Some((end, _)) = self.string_iter.next() else {
                        return GrokComponent::PatternError(GrokPatternError::InvalidPattern);
                    };
                    comp_index += 1;

                    if terminator == '}' {
                        let index = end + 1;
                        return GrokComponent::GrokPattern {
                            range: start..index,
                            pattern: &self.string[start..index],
                            name: components[0],
                            field: components[1],
                            type_tag: components[2],
                        };
                    }
                    // terminator == ':' — keep reading the next segment.
                }
                Err(e) => return GrokComponent::PatternError(e),
            }
        }
    }

    /// Reads characters up to (not including) the next `:` or `}`, which
    /// becomes the returned terminator. Segment 0 is the pattern `NAME` and
    /// is restricted to `[A-Za-z0-9_]+`; segments 1 (field path) and 2 (type
    /// tag) accept anything but `:` and `}` so that dotted/bracketed field
    /// paths pass through untouched.
    fn munch_segment(&mut self, segment: usize) -> Result<(char, &'a str), GrokPatternError> {
        let Some(&(start, _)) = self.string_iter.peek() else {
            return Err(GrokPatternError::InvalidPattern);
        };
        let mut end = start;

        loop {
            let Some(&(index, c)) = self.string_iter.peek() else {
                return Err(GrokPatternError::InvalidPattern);
            };
            if c == '}' || c == ':' {
                if index == start {
                    return Err(GrokPatternError::InvalidPattern);
                }
                return Ok((c, &self.string[start..end]));
            }
            if segment == 0 && !(c.is_ascii_alphanumeric() || c == '_') {
                return Err(GrokPatternError::InvalidCharacter(c));
            }
            self.string_iter.next();
            end = index + c.len_utf8();
        }
    }
}

/// Splits `string` into literal and reference components.
pub fn grok_split<'a, S: AsRef<str> + ?Sized>(string: &'a S) -> GrokSplit<'a> {
    let string = string.as_ref();
    GrokSplit {
        string,
        string_iter: string.char_indices().peekable(),
    }
}
