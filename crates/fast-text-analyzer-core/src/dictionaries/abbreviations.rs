//! Abbreviations that must not end a sentence when followed by a period.
//!
//! Ordinary English words that double as abbreviations ("in", "no", "sat",
//! "sun", "mass") are left out so sentences ending in them still split.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Known abbreviations, lowercased, without their trailing period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "messrs", "mmes", "msgr",
        "hon", "esq", "phd", "capt", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen",
        "gov", "pres",
    ]);

    // Academic degrees
    set.extend([
        "b.a", "b.s", "m.a", "m.s", "m.b.a", "ph.d", "m.d", "j.d", "ll.b", "ll.m", "d.d.s",
        "d.v.m", "ed.d", "psy.d",
    ]);

    // Latin and editorial
    set.extend([
        "etc", "vs", "e.g", "i.e", "cf", "viz", "ibid", "n.b", "p.s", "r.s.v.p", "al",
    ]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "c.e", "b.c.e", "jan", "feb", "apr", "jun", "jul", "aug",
        "sep", "sept", "oct", "nov", "dec", "tue", "tues", "thu", "thur", "thurs",
    ]);

    // Addresses and places
    set.extend([
        "st", "ave", "blvd", "rd", "apt", "ste", "bldg", "dept", "u.s", "u.k", "u.s.a", "e.u",
        "n.y", "calif", "fla", "penn",
    ]);

    // Organizations
    set.extend(["inc", "corp", "ltd", "llc", "bros", "assn", "mfg", "intl"]);

    // Units and references
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "yd", "mi", "sq", "mph",
        "kph", "rpm", "vol", "nos", "pp", "ch", "fig", "eq", "approx", "avg", "misc", "ref",
        "refs", "eds", "supp", "encl",
    ]);

    set
});

/// Check if a word (with or without surrounding periods) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    ABBREVIATIONS.contains(word_lower.trim_matches('.'))
}
