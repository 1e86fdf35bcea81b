//! Assignment notifier.
//!
//! Picks one maintainer uniformly at random from the static pool,
//! requests assignment on the issue, and posts an acknowledgment
//! comment naming the pick. The assignee is fixed before either call is
//! issued, and the assignment request is always initiated first.

use rand::Rng;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{IssueRef, RepoRef};
use crate::domain::ports::IssueApi;

/// Maintainers eligible for random assignment. Must stay non-empty.
pub const MAINTAINERS: &[&str] = &["acheong08"];

/// Pick one element of `pool` with a uniform random index.
///
/// Returns `Err(ValidationFailed)` for an empty pool instead of
/// panicking on the range draw.
pub fn pick_assignee<'a, R: Rng>(pool: &[&'a str], rng: &mut R) -> DomainResult<&'a str> {
    if pool.is_empty() {
        return Err(DomainError::ValidationFailed(
            "assignee pool must not be empty".to_string(),
        ));
    }
    Ok(pool[rng.gen_range(0..pool.len())])
}

/// The acknowledgment comment body for a chosen assignee.
///
/// Wording is preserved verbatim; downstream tooling matches on it.
pub fn acknowledgment_body(assignee: &str) -> String {
    format!("👋 Thanks for reporting! your question will solve by {assignee}")
}

/// Run the assignment notifier for one issue.
///
/// Side effects, in initiation order: add the chosen maintainer as an
/// assignee, then post the acknowledgment comment. Either failure
/// propagates unretried to the caller.
pub async fn run<R: Rng>(
    api: &dyn IssueApi,
    repo: &RepoRef,
    issue: &IssueRef,
    rng: &mut R,
) -> DomainResult<()> {
    let assignee = pick_assignee(MAINTAINERS, rng)?;

    tracing::info!(
        repo = %repo.full_name(),
        issue = issue.number,
        assignee = assignee,
        "Assigning issue to maintainer"
    );

    api.add_assignees(repo, issue.number, &[assignee.to_string()])
        .await?;

    api.create_comment(repo, issue.number, &acknowledgment_body(assignee))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_pick_is_always_a_pool_member() {
        let pool = ["alice", "bob", "carol"];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let pick = pick_assignee(&pool, &mut rng).unwrap();
            assert!(pool.contains(&pick), "picked {pick} outside the pool");
        }
    }

    #[test]
    fn test_pick_from_singleton_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_assignee(&["only"], &mut rng).unwrap(), "only");
    }

    #[test]
    fn test_pick_from_empty_pool_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = pick_assignee(&[], &mut rng);
        match result {
            Err(DomainError::ValidationFailed(msg)) => {
                assert!(msg.contains("empty"), "got: {msg}");
            }
            other => panic!("Expected ValidationFailed, got: {other:?}"),
        }
    }

    #[test]
    fn test_pick_is_asymptotically_uniform() {
        let pool = ["alice", "bob", "carol", "dave"];
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 40_000;

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(pick_assignee(&pool, &mut rng).unwrap()).or_default() += 1;
        }

        let expected = draws / pool.len() as u32;
        for (name, count) in counts {
            let deviation = count.abs_diff(expected);
            // 5% tolerance at 10k expected draws per bucket.
            assert!(
                deviation < expected / 20,
                "{name} drawn {count} times, expected ~{expected}"
            );
        }
    }

    #[test]
    fn test_static_pool_is_non_empty() {
        assert!(!MAINTAINERS.is_empty());
    }

    #[test]
    fn test_acknowledgment_body_substitutes_assignee() {
        let body = acknowledgment_body("acheong08");
        assert_eq!(
            body,
            "👋 Thanks for reporting! your question will solve by acheong08"
        );
    }
}
