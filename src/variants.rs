//! Deterministic copy variant selection.
//!
//! The generator emits hundreds of location pages from the same templates.
//! If they all carried identical copy, search engines would fold them into
//! one result (duplicate content). Instead, every piece of rotating copy is
//! chosen from a pool by hashing the page's route key, so each page gets a
//! stable variant that never changes between builds.
//!
//! Three properties drive the design:
//!
//! - **Deterministic**: no RNG, clock, or I/O. The same `(key, pool)` pair
//!   selects the same variant on every machine, forever. Rebuilds are
//!   byte-identical and indexed pages keep the copy they were crawled with.
//! - **Uniform enough**: the multiplier-31 string hash spreads real route
//!   keys (`eugene-or-south-university-intro`) across small pools well.
//!   Over a few thousand keys every pool index is reachable.
//! - **Hash-stable across ports**: the hash iterates UTF-16 code units and
//!   wraps in 32-bit two's-complement, so the mapping matches the previous
//!   generation of this site bit for bit. Changing it would silently swap
//!   the copy on every published page.
//!
//! Selection mapping:
//!
//! ```text
//! "eugene-or-south-university-intro" → stable_hash → 1734505871 → % pool
//! ```
//!
//! Pool contents are defined in [`crate::copy`]; this module only picks.

/// Hash a route key to a non-negative 32-bit value.
///
/// Iterates the key's UTF-16 code units, folding each into an `i32`
/// accumulator as `h = (h << 5) - h + unit` (that is, `h * 31 + unit`)
/// with two's-complement wrapping, then returns the absolute value.
///
/// The UTF-16 iteration is deliberate: keys are almost always ASCII slugs,
/// but when they are not, this keeps the numeric output identical to the
/// earlier implementation of the site, variant for variant.
///
/// The empty string hashes to 0.
pub fn stable_hash(key: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in key.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}

/// Pick one variant from a pool by route key.
///
/// Returns `variants[stable_hash(key) % variants.len()]`. An empty pool
/// returns `""` rather than an error: a missing pool is a content problem
/// that should render as blank copy, not abort a build of hundreds of
/// otherwise-fine pages.
pub fn pick_variant<'a>(key: &str, variants: &[&'a str]) -> &'a str {
    if variants.is_empty() {
        return "";
    }
    variants[stable_hash(key) as usize % variants.len()]
}

/// Select up to `count` distinct pool indices for a page's FAQ section.
///
/// Each slot `i` derives its own key (`{key}-faq-{i}`), hashes it to a
/// starting index, then probes forward past already-used indices so one
/// page never repeats a question. Output order follows the probe sequence,
/// not pool order, so two pages drawing overlapping questions still show
/// them differently.
///
/// Asking for `count >= pool_len` returns every index exactly once.
/// An empty pool returns an empty vec.
pub fn faq_indices(key: &str, count: usize, pool_len: usize) -> Vec<usize> {
    if pool_len == 0 {
        return Vec::new();
    }
    let mut used = vec![false; pool_len];
    let mut picked = Vec::with_capacity(count.min(pool_len));
    for i in 0..count {
        if picked.len() == pool_len {
            break;
        }
        let slot_key = format!("{key}-faq-{i}");
        let mut idx = stable_hash(&slot_key) as usize % pool_len;
        while used[idx] {
            idx = (idx + 1) % pool_len;
        }
        used[idx] = true;
        picked.push(idx);
    }
    picked
}
