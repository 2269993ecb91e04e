//! Custom-content region extraction and merging.
//!
//! Generated files carry named editable regions delimited by marker pairs:
//!
//! ```text
//! // <!# Custom Content Begin: HEADER #!>
//! ... hand-written code ...
//! // <!# Custom Content End: HEADER #!>
//! ```
//!
//! On regeneration, the interior of each region found in the existing file
//! replaces the freshly generated placeholder for the same region name, so
//! repeated generation never destroys developer edits. Regions whose name
//! no longer appears in the new template are dropped; callers are told
//! which ones so they can warn, because once the file is rewritten that
//! content is gone.
//!
//! Scanning is an explicit left-to-right tokenizer over non-overlapping
//! marker pairs. Malformed pairs (a begin with no end, or mismatched
//! names) are skipped per-occurrence; the rest of the file still merges.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

/// Opening text of a region begin marker, up to the region name.
pub const REGION_BEGIN_OPEN: &str = "// <!# Custom Content Begin: ";

/// Opening text of a region end marker, up to the region name.
pub const REGION_END_OPEN: &str = "// <!# Custom Content End: ";

/// Closing text of both markers, after the region name.
pub const REGION_CLOSE: &str = " #!>";

/// A well-formed region pair found in a scan.
#[derive(Debug)]
struct Region<'a> {
    name: &'a str,
    /// Byte range of the interior text, between the begin marker's close
    /// and the start of the end marker.
    interior: Range<usize>,
}

/// Result of merging prior custom regions into a regenerated candidate.
#[derive(Debug)]
pub struct MergeOutcome {
    /// Final file text.
    pub text: String,

    /// Names of regions whose prior interior was carried over.
    pub preserved: Vec<String>,

    /// Regions present in the existing file but absent from the new
    /// template. Their content does not survive the rewrite.
    pub dropped: Vec<String>,
}

/// Extract the interior text of every well-formed region pair.
///
/// Region names are unique within a file by contract; if a name repeats,
/// the last occurrence wins.
pub fn extract_regions(text: &str) -> BTreeMap<String, String> {
    scan_regions(text)
        .into_iter()
        .map(|region| (region.name.to_string(), text[region.interior].to_string()))
        .collect()
}

/// Merge custom regions recovered from `existing` into `candidate`.
///
/// Regions present only in the candidate keep their generated placeholder.
/// Idempotent: merging a merged result against the same candidate changes
/// nothing, because a second scan recovers exactly what the first merge
/// wrote.
pub fn merge_regions(existing: &str, candidate: &str) -> MergeOutcome {
    let prior = extract_regions(existing);
    if prior.is_empty() {
        return MergeOutcome {
            text: candidate.to_string(),
            preserved: Vec::new(),
            dropped: Vec::new(),
        };
    }

    let mut text = String::with_capacity(candidate.len());
    let mut cursor = 0;
    let mut preserved = Vec::new();
    let mut candidate_names = BTreeSet::new();

    for region in scan_regions(candidate) {
        candidate_names.insert(region.name.to_string());

        if let Some(prior_text) = prior.get(region.name) {
            text.push_str(&candidate[cursor..region.interior.start]);
            text.push_str(prior_text);
            cursor = region.interior.end;
            preserved.push(region.name.to_string());
        }
    }
    text.push_str(&candidate[cursor..]);

    let dropped = prior
        .keys()
        .filter(|name| !candidate_names.contains(*name))
        .cloned()
        .collect();

    MergeOutcome {
        text,
        preserved,
        dropped,
    }
}

/// Find all well-formed region pairs, left to right.
fn scan_regions(text: &str) -> Vec<Region<'_>> {
    let mut regions = Vec::new();
    let mut pos = 0;

    while let Some((_, begin_close, name)) = next_marker(text, pos, REGION_BEGIN_OPEN) {
        let Some((end_start, end_close, end_name)) = next_marker(text, begin_close, REGION_END_OPEN)
        else {
            // Begin with no end anywhere after it: skip this marker.
            pos = begin_close;
            continue;
        };

        // The pair is consumed either way; a name mismatch skips the
        // occurrence without recording it.
        pos = end_close;
        if end_name == name {
            regions.push(Region {
                name,
                interior: begin_close..end_start,
            });
        }
    }

    regions
}

/// Find the next well-formed marker at or after `from`.
///
/// Returns (marker start, end of marker text, region name). Occurrences
/// whose name is missing, empty, or not `[A-Za-z0-9_]+` are not markers.
fn next_marker<'a>(text: &'a str, from: usize, open: &str) -> Option<(usize, usize, &'a str)> {
    let mut search = from;

    while let Some(found) = text[search..].find(open) {
        let start = search + found;
        let name_start = start + open.len();

        if let Some(close) = text[name_start..].find(REGION_CLOSE) {
            let name = &text[name_start..name_start + close];
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Some((start, name_start + close + REGION_CLOSE.len(), name));
            }
        }

        search = start + open.len();
    }

    None
}
