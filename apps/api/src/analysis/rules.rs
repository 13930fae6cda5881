//! Scoring rules — each field category owns an ordered bundle of rules.
//!
//! A rule inspects `TextStats` and yields a `Verdict`: points plus at most one
//! note (a strength keyword or an improvement suggestion, never both).
//! Bundles run in declaration order, so the order of notes in a result is the
//! order of the rules below.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::models::FieldCategory;
use crate::analysis::text::TextStats;

// ────────────────────────────────────────────────────────────────────────────
// Rule model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Words,
    CommaSegments,
}

impl Measure {
    fn count(&self, stats: &TextStats) -> usize {
        match self {
            Measure::Words => stats.word_count,
            Measure::CommaSegments => stats.segment_count,
        }
    }
}

/// One side of a length tier: counts beyond `limit` earn `points` and a hint.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub limit: usize,
    pub points: u32,
    pub hint: &'static str,
}

/// Fixed word-level patterns used by the all-of signals.
/// Patterns are written lower-case; `TextStats::lowered` does the case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    ContextWord,
    ActionWord,
    ResultWord,
    Degree,
    Institution,
    GraduationYear,
}

static CONTEXT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(at|with|for)\b").expect("context word pattern should compile")
});

static ACTION_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(developed|implemented|managed|led|created)\b")
        .expect("action word pattern should compile")
});

static RESULT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(result\w*|improved|increased|decreased|achieved)\b")
        .expect("result word pattern should compile")
});

static DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(bachelor|master|ph\.?d|associate|diploma)")
        .expect("degree pattern should compile")
});

static INSTITUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(university|college|school|institute)\b")
        .expect("institution pattern should compile")
});

static GRADUATION_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(19|20)\d{2}\b").expect("year pattern should compile")
});

impl Pattern {
    fn regex(&self) -> &'static Regex {
        match self {
            Pattern::ContextWord => &CONTEXT_WORD,
            Pattern::ActionWord => &ACTION_WORD,
            Pattern::ResultWord => &RESULT_WORD,
            Pattern::Degree => &DEGREE,
            Pattern::Institution => &INSTITUTION,
            Pattern::GraduationYear => &GRADUATION_YEAR,
        }
    }

    /// Expects lower-cased text.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}

/// A positive condition a rule looks for.
#[derive(Debug, Clone, Copy)]
pub enum Signal {
    /// Any of these whole words appears (case-insensitive).
    AnyWord(&'static [&'static str]),
    AnyDigit,
    AnyChar(&'static [char]),
    /// Every pattern matches somewhere in the text.
    AllPatterns(&'static [Pattern]),
}

impl Signal {
    pub fn is_present(&self, stats: &TextStats) -> bool {
        match self {
            Signal::AnyWord(words) => stats
                .lowered
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| words.iter().any(|w| *w == token)),
            Signal::AnyDigit => stats.lowered.chars().any(|c| c.is_ascii_digit()),
            Signal::AnyChar(chars) => stats.lowered.chars().any(|c| chars.contains(&c)),
            Signal::AllPatterns(patterns) => patterns.iter().all(|p| p.is_match(&stats.lowered)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Three-way (or two-way when `long` is absent) length tier.
    Length {
        measure: Measure,
        short: Band,
        long: Option<Band>,
        ideal_points: u32,
    },
    /// Points and a strength keyword when the signal is present, a hint otherwise.
    Signal {
        signal: Signal,
        points: u32,
        keyword: &'static str,
        hint: &'static str,
    },
    /// Average word length strictly inside (`min`, `max`). Skipped for blank text.
    Clarity {
        min: f64,
        max: f64,
        points: u32,
        hint: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    Keyword(&'static str),
    Suggestion(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub points: u32,
    pub note: Option<Note>,
}

impl Verdict {
    fn points(points: u32) -> Self {
        Self { points, note: None }
    }

    fn keyword(points: u32, keyword: &'static str) -> Self {
        Self {
            points,
            note: Some(Note::Keyword(keyword)),
        }
    }

    fn suggestion(points: u32, hint: &'static str) -> Self {
        Self {
            points,
            note: Some(Note::Suggestion(hint)),
        }
    }
}

impl Rule {
    pub fn evaluate(&self, stats: &TextStats) -> Verdict {
        match self {
            Rule::Length {
                measure,
                short,
                long,
                ideal_points,
            } => {
                let count = measure.count(stats);
                match long {
                    _ if count < short.limit => Verdict::suggestion(short.points, short.hint),
                    Some(long) if count > long.limit => Verdict::suggestion(long.points, long.hint),
                    _ => Verdict::points(*ideal_points),
                }
            }
            Rule::Signal {
                signal,
                points,
                keyword,
                hint,
            } => {
                if signal.is_present(stats) {
                    Verdict::keyword(*points, *keyword)
                } else {
                    Verdict::suggestion(0, *hint)
                }
            }
            Rule::Clarity {
                min,
                max,
                points,
                hint,
            } => match stats.average_word_length() {
                None => Verdict::points(0),
                Some(avg) if avg > *min && avg < *max => Verdict::points(*points),
                Some(_) => Verdict::suggestion(0, *hint),
            },
        }
    }

    /// The strength label this rule can emit, if any.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Rule::Signal { keyword, .. } => Some(*keyword),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Bundles
// ────────────────────────────────────────────────────────────────────────────

pub const ACTION_VERBS: &[&str] = &[
    "developed",
    "implemented",
    "managed",
    "led",
    "created",
    "designed",
];

const SUMMARY_RULES: &[Rule] = &[
    Rule::Length {
        measure: Measure::Words,
        short: Band {
            limit: 20,
            points: 20,
            hint: "Expand your summary to at least 20 words to give recruiters more context",
        },
        long: Some(Band {
            limit: 100,
            points: 30,
            hint: "Trim your summary to 50-100 words to keep it focused",
        }),
        ideal_points: 40,
    },
    Rule::Signal {
        signal: Signal::AnyWord(ACTION_VERBS),
        points: 25,
        keyword: "Action-oriented language",
        hint: "Use stronger action verbs like 'developed' or 'led'",
    },
    Rule::Signal {
        signal: Signal::AnyDigit,
        points: 20,
        keyword: "Quantifiable achievements",
        hint: "Add metrics or numbers to quantify your achievements",
    },
];

const EXPERIENCE_RULES: &[Rule] = &[
    Rule::Length {
        measure: Measure::Words,
        short: Band {
            limit: 30,
            points: 15,
            hint: "Add more detail about your responsibilities and achievements",
        },
        long: Some(Band {
            limit: 150,
            points: 25,
            hint: "Condense this description to the most relevant achievements",
        }),
        ideal_points: 35,
    },
    Rule::Signal {
        signal: Signal::AllPatterns(&[
            Pattern::ContextWord,
            Pattern::ActionWord,
            Pattern::ResultWord,
        ]),
        points: 30,
        keyword: "STAR method",
        hint: "Structure this entry with the STAR method (Situation, Task, Action, Result)",
    },
];

const SKILLS_RULES: &[Rule] = &[
    Rule::Length {
        measure: Measure::CommaSegments,
        short: Band {
            limit: 5,
            points: 20,
            hint: "Add more relevant skills to showcase your expertise",
        },
        long: Some(Band {
            limit: 15,
            points: 25,
            hint: "Narrow your list to the skills most relevant to the role",
        }),
        ideal_points: 35,
    },
    Rule::Signal {
        signal: Signal::AnyChar(&['(', ')', ':']),
        points: 20,
        keyword: "Organized skills",
        hint: "Group skills by category, e.g. 'Languages: Rust, Go'",
    },
];

const EDUCATION_RULES: &[Rule] = &[
    Rule::Length {
        measure: Measure::Words,
        short: Band {
            limit: 15,
            points: 20,
            hint: "Add relevant coursework, projects or academic achievements",
        },
        long: None,
        ideal_points: 30,
    },
    Rule::Signal {
        signal: Signal::AllPatterns(&[
            Pattern::Degree,
            Pattern::Institution,
            Pattern::GraduationYear,
        ]),
        points: 25,
        keyword: "Complete information",
        hint: "Include your degree, institution and graduation year",
    },
];

/// Applied after every category bundle.
pub const CLARITY_RULE: Rule = Rule::Clarity {
    min: 3.0,
    max: 8.0,
    points: 15,
    hint: "Use clear, concise language",
};

impl FieldCategory {
    /// Ordered rule bundle for this category (excluding the shared clarity rule).
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            FieldCategory::Summary => SUMMARY_RULES,
            FieldCategory::Experience => EXPERIENCE_RULES,
            FieldCategory::Skills => SKILLS_RULES,
            FieldCategory::Education => EDUCATION_RULES,
        }
    }

    /// Every strength label this category can produce, in rule order.
    pub fn keyword_vocabulary(&self) -> Vec<&'static str> {
        self.rules().iter().filter_map(Rule::keyword).collect()
    }
}
