use std::{collections::HashMap, path::Path};

use clap::ValueEnum;
use lazy_static::lazy_static;
use strum_macros::{Display, EnumIter, EnumString, VariantArray};

use stellar_shared::constants::sdl2::{DYNAPI_HEADER, DYNAPI_PROCS_HEADER, LIBTAS_HOOKS_HEADER, SDL_PREFIX};

/// Which kind of header a line comes from.
#[derive(ValueEnum, PartialEq, Debug, EnumString, Display, EnumIter, VariantArray, Hash, Eq, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum HeaderFormat {
    /// pick from the file name
    Auto,
    /// `SDL_HOOK(SDL_Name)`: the token sits between the parens
    Hooks,
    /// `SDL_DYNAPI_PROC(ret,SDL_Name,...)`: the token is the second field
    Dynapi,
}

lazy_static! {
    static ref KNOWN_HEADERS: HashMap<&'static str, HeaderFormat> = {
        let mut map = HashMap::new();
        map.insert(LIBTAS_HOOKS_HEADER, HeaderFormat::Hooks);
        map.insert(DYNAPI_HEADER, HeaderFormat::Dynapi);
        map.insert(DYNAPI_PROCS_HEADER, HeaderFormat::Dynapi);
        map
    };
}

impl HeaderFormat {
    /// Resolves `Auto` against the input's file name. Concrete formats pass through.
    pub fn resolve(self, path: &Path) -> HeaderFormat {
        if self != HeaderFormat::Auto {
            return self;
        }
        let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
        if let Some(format) = KNOWN_HEADERS.get(file_name) {
            return *format;
        }
        if file_name.to_ascii_lowercase().contains("dynapi") {
            HeaderFormat::Dynapi
        } else {
            HeaderFormat::Hooks
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineMatch<'a> {
    Token(&'a str),
    /// only with `tidy`: the line has the right shape but nothing usable in it
    Empty,
    NoMatch,
}

#[derive(Debug, Clone)]
pub struct LineMatcher {
    pub format: HeaderFormat,
    pub prefix: String,
    /// trim tokens and drop empty ones. Off by default, tokens are taken verbatim.
    pub tidy: bool,
}

impl Default for LineMatcher {
    fn default() -> Self {
        LineMatcher::new(HeaderFormat::Hooks, SDL_PREFIX)
    }
}

impl LineMatcher {
    pub fn new(format: HeaderFormat, prefix: &str) -> Self {
        LineMatcher {
            format,
            prefix: prefix.to_owned(),
            tidy: false,
        }
    }

    pub fn tidy(mut self, tidy: bool) -> Self {
        self.tidy = tidy;
        self
    }

    pub fn match_line<'a>(&self, line: &'a str) -> LineMatch<'a> {
        let line = line.trim();
        if !line.starts_with(self.prefix.as_str()) {
            return LineMatch::NoMatch;
        }
        let token = match self.format {
            // Auto should have been resolved already, treat it like the default header
            HeaderFormat::Hooks | HeaderFormat::Auto => {
                if !line.ends_with(')') {
                    return LineMatch::NoMatch;
                }
                match line.find('(') {
                    Some(open) => &line[open + 1..line.len() - 1],
                    None => return LineMatch::NoMatch,
                }
            }
            HeaderFormat::Dynapi => {
                if !line.contains('(') {
                    return LineMatch::NoMatch;
                }
                // no second field, nothing to extract
                match line.split(',').nth(1) {
                    Some(field) => field,
                    None => return LineMatch::NoMatch,
                }
            }
        };
        if !self.tidy {
            return LineMatch::Token(token);
        }
        let token = token.trim();
        if token.is_empty() {
            LineMatch::Empty
        } else {
            LineMatch::Token(token)
        }
    }
}
