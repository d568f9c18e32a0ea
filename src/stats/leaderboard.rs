//! Top performer selection.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::household::Member;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub member_id: String,
    pub count: f64,
}

/// The member with the strictly greatest completion credit.
///
/// Members are scanned in list order and only a larger count replaces the
/// current leader, so the earlier member wins a tie. Returns `None` when
/// nobody has completed anything.
pub fn select_top_performer(completed_counts: &BTreeMap<String, f64>, members: &[Member]) -> Option<TopPerformer> {
    let mut best: Option<TopPerformer> = None;
    for member in members {
        let count = completed_counts.get(&member.id).copied().unwrap_or(0.0);
        let leads = match &best {
            Some(current) => count > current.count,
            None => count > 0.0,
        };
        if leads {
            best = Some(TopPerformer {
                member_id: member.id.clone(),
                count,
            });
        }
    }
    best
}
