//! Label classifier.
//!
//! Scans the issue title against a static, ordered table of
//! (label, keywords) rules and applies every label whose rule matches.
//! Titles matching nothing receive the [`FALLBACK_LABEL`] so no issue
//! leaves triage unlabeled.
//!
//! Matching is case-sensitive substring containment, preserved from the
//! original triage policy. Known over-matching risk: a keyword can fire
//! inside an unrelated word (e.g. `config` inside "configure", `how`
//! inside "shower").

use crate::domain::errors::DomainResult;
use crate::domain::models::{IssueRef, RepoRef};
use crate::domain::ports::IssueApi;

/// A classification rule: the label to apply and the title keywords
/// that trigger it. The first matching keyword fires the rule; later
/// keywords in the same rule are not consulted.
#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    /// Label applied when the rule matches.
    pub label: &'static str,
    /// Substrings searched for in the issue title, in order.
    pub keywords: &'static [&'static str],
}

/// The classification table, evaluated in order. Every matching rule
/// fires; rule order does not affect which labels are applied.
pub const LABEL_RULES: &[LabelRule] = &[
    LabelRule { label: "bug", keywords: &["Bug", "bug"] },
    LabelRule {
        label: "enhancement",
        keywords: &["suggestion", "enhancement", "feature request", "Feature request", "Feature Request"],
    },
    LabelRule {
        label: "documentation",
        keywords: &["docs", "documentation", "Wiki", "wiki"],
    },
    LabelRule { label: "help wanted", keywords: &["help wanted"] },
    LabelRule {
        label: "question",
        keywords: &["question", "Why", "why", "How", "how"],
    },
    LabelRule { label: "V1", keywords: &["V1", "v1"] },
    LabelRule { label: "V3", keywords: &["V3", "v3"] },
    LabelRule {
        label: "authentication",
        keywords: &[
            "auth", "Auth", "token", "Token", "TOKEN", "config", "Config", "CONFIG",
            "Unauthorized", "401", "403", "502", "503", "forbidden", "Forbidden", "access",
            "block",
        ],
    },
    LabelRule {
        label: "network",
        keywords: &[
            "openai.com", "ssl", "SSL", "HTTPS", "Connection", "connection", "proxy", "Proxy",
            "PROXY", "VPN",
        ],
    },
    LabelRule {
        label: "CLI",
        keywords: &["command program", "Command Program", "CLI"],
    },
];

/// Label applied when no rule matches, so the result is never empty.
pub const FALLBACK_LABEL: &str = "triage-needed";

/// Classify an issue title into the labels to apply.
///
/// Pure function of the title: evaluates every rule in [`LABEL_RULES`]
/// and collects the labels of those that match, in table order. An
/// empty result is replaced by the [`FALLBACK_LABEL`] singleton.
pub fn classify_title(title: &str) -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = Vec::new();

    for rule in LABEL_RULES {
        if rule.keywords.iter().any(|keyword| title.contains(keyword)) {
            labels.push(rule.label);
        }
    }

    if labels.is_empty() {
        labels.push(FALLBACK_LABEL);
    }

    labels
}

/// Run the label classifier for one issue.
///
/// Computes the label set from the title and issues a single add-labels
/// request. Failures propagate unretried to the caller.
pub async fn run(api: &dyn IssueApi, repo: &RepoRef, issue: &IssueRef) -> DomainResult<()> {
    let labels: Vec<String> = classify_title(&issue.title)
        .into_iter()
        .map(str::to_string)
        .collect();

    tracing::info!(
        repo = %repo.full_name(),
        issue = issue.number,
        labels = ?labels,
        "Applying triage labels"
    );

    api.add_labels(repo, issue.number, &labels).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bug_title() {
        assert_eq!(classify_title("Bug: crash on startup"), vec!["bug"]);
    }

    #[test]
    fn test_multi_rule_title() {
        // "How" → question, "config" inside "configure" → authentication,
        // "proxy" and "VPN" → network.
        assert_eq!(
            classify_title("How to configure proxy for VPN?"),
            vec!["question", "authentication", "network"]
        );
    }

    #[test]
    fn test_feature_request_with_cli() {
        assert_eq!(
            classify_title("Feature request: add CLI command program"),
            vec!["enhancement", "CLI"]
        );
    }

    #[test]
    fn test_no_match_gets_fallback() {
        assert_eq!(classify_title("Nothing relevant here"), vec![FALLBACK_LABEL]);
    }

    #[test]
    fn test_empty_title_gets_fallback() {
        assert_eq!(classify_title(""), vec![FALLBACK_LABEL]);
    }

    #[test]
    fn test_match_suppresses_fallback() {
        let labels = classify_title("v1 login question");
        assert!(!labels.contains(&FALLBACK_LABEL));
        assert_eq!(labels, vec!["question", "V1"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        // "BUG" matches neither "Bug" nor "bug".
        assert_eq!(classify_title("BUG everywhere"), vec![FALLBACK_LABEL]);
    }

    #[test]
    fn test_substring_over_matching_is_preserved() {
        // "how" fires inside "shower"; the original policy accepts this.
        assert_eq!(classify_title("broken shower thoughts"), vec!["question"]);
    }

    #[test]
    fn test_multi_word_keyword() {
        assert_eq!(classify_title("the command program hangs"), vec!["CLI"]);
    }

    #[test]
    fn test_each_rule_fires_at_most_once() {
        // Both "Bug" and "bug" present; the rule still yields one label.
        assert_eq!(classify_title("Bug report: another bug"), vec!["bug"]);
    }

    #[test]
    fn test_status_code_keywords() {
        assert_eq!(classify_title("server returned 401"), vec!["authentication"]);
        assert_eq!(classify_title("server returned 502"), vec!["authentication"]);
    }

    #[test]
    fn test_labels_follow_table_order() {
        let labels = classify_title("bug in docs for v3 proxy");
        assert_eq!(labels, vec!["bug", "documentation", "V3", "network"]);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let title = "How to configure proxy for VPN?";
        assert_eq!(classify_title(title), classify_title(title));
    }
}
