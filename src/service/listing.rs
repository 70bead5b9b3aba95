//! Date-ordered post listings

use chrono::NaiveDateTime;
use std::cmp::Ordering;

use crate::content::{PostRepository, PostSummary, Result};

/// Lists post summaries newest first
pub struct ListingService<'a> {
    repository: &'a PostRepository,
}

impl<'a> ListingService<'a> {
    pub fn new(repository: &'a PostRepository) -> Self {
        Self { repository }
    }

    /// All post summaries, most recent first
    pub fn sorted_summaries(&self) -> Result<Vec<PostSummary>> {
        let mut summaries = self.repository.list_all_summaries()?;
        sort_by_date_desc(&mut summaries);
        tracing::info!("Listed {} posts", summaries.len());
        Ok(summaries)
    }
}

/// Order two publication dates newest first.
///
/// Dates compare as calendar values, never as strings. A missing date sorts
/// after any present one.
pub fn compare_by_date_desc(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort by descending date; undated posts go last in their
/// original relative order
pub fn sort_by_date_desc(summaries: &mut Vec<PostSummary>) {
    let mut keyed: Vec<_> = summaries
        .drain(..)
        .map(|summary| {
            let date = summary.published_at();
            if date.is_none() {
                match summary.metadata.date() {
                    Some(raw) => tracing::warn!(
                        "Post {} has unparseable date {:?}, listing it last",
                        summary.slug,
                        raw
                    ),
                    None => tracing::warn!("Post {} has no date, listing it last", summary.slug),
                }
            }
            (date, summary)
        })
        .collect();

    keyed.sort_by(|a, b| compare_by_date_desc(a.0, b.0));
    summaries.extend(keyed.into_iter().map(|(_, summary)| summary));
}
