//! String helpers over presentation-format domain names.

/// TLD value the root server uses for locally synthesized zones.
pub const SYNTHETIC_TLD: &str = "_synth.";

/// Delegation target carried by an NS referral: the NS name without its
/// final label (`sub.hip5.` -> `sub`).
///
/// A single-label target yields the label itself (`hip5.` -> `hip5`).
pub fn delegation_target(ns: &str) -> &str {
    let trimmed = ns.strip_suffix('.').unwrap_or(ns);
    match trimmed.rfind('.') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    }
}

pub fn is_synthetic_tld(tld: &str, sentinel: &str) -> bool {
    tld.eq_ignore_ascii_case(sentinel)
}

/// Drops a single trailing root dot.
pub fn strip_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
