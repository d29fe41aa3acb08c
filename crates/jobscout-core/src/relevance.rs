//! Relevance filtering of scraped job titles against a free-text query.
//!
//! Scraped titles are noisy; a cheap substring/synonym heuristic with an
//! explicit tech-vs-non-tech exclusion list removes the most common false
//! positives (recruiter and sales postings surfacing in engineering
//! searches) without semantic matching.

use std::collections::{HashMap, HashSet};

use crate::models::JobPosting;

/// Word lists driving the relevance filter.
///
/// Immutable after construction; the [`Default`] carries the production
/// tables, tests substitute their own fixtures.
#[derive(Debug, Clone)]
pub struct RelevanceConfig {
    /// Query tokens dropped before matching ("job", "remote", ...).
    pub filler_words: Vec<String>,
    /// Token → accepted title substrings ("backend" → "back-end", ...).
    pub synonyms: HashMap<String, Vec<String>>,
    /// Title substrings that mark a posting as a non-tech role.
    pub non_tech_roles: Vec<String>,
    /// Query substrings that classify the search as tech-intent.
    pub tech_keywords: Vec<String>,
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        let mut synonyms = HashMap::new();
        for (word, expansions) in [
            (
                "backend",
                &["backend", "back-end", "back end", "server-side", "api"][..],
            ),
            (
                "frontend",
                &["frontend", "front-end", "front end", "ui", "ux"][..],
            ),
            ("fullstack", &["fullstack", "full-stack", "full stack"][..]),
            (
                "engineer",
                &["engineer", "engineering", "developer", "dev"][..],
            ),
            (
                "developer",
                &["developer", "development", "engineer", "dev"][..],
            ),
            ("software", &["software", "swe", "sde"][..]),
            (
                "devops",
                &["devops", "dev-ops", "sre", "platform", "infrastructure"][..],
            ),
            (
                "data",
                &["data", "analytics", "ml", "machine learning", "ai"][..],
            ),
        ] {
            synonyms.insert(word.to_string(), to_strings(expansions));
        }

        Self {
            filler_words: to_strings(&[
                "job", "jobs", "work", "position", "role", "opening", "vacancy", "remote",
                "hiring",
            ]),
            synonyms,
            non_tech_roles: to_strings(&[
                "marketing",
                "sales",
                "hr",
                "human resources",
                "recruiter",
                "recruiting",
                "account manager",
                "business development",
                "customer success",
                "content writer",
                "copywriter",
                "social media",
                "seo specialist",
                "finance",
                "accountant",
                "legal",
                "lawyer",
                "office manager",
                "administrative",
                "receptionist",
                "head of marketing",
                "head of sales",
                "vp of sales",
                "vp of marketing",
            ]),
            tech_keywords: to_strings(&[
                "software",
                "engineer",
                "developer",
                "frontend",
                "backend",
                "fullstack",
                "devops",
                "data",
                "python",
                "java",
                "javascript",
                "react",
                "node",
            ]),
        }
    }
}

/// Derived view of one query: the expanded accept set plus the
/// tech-intent classification.
#[derive(Debug)]
struct QueryTerms {
    expanded: HashSet<String>,
    tech_intent: bool,
    /// False when every token was filler/too short (degenerate query).
    has_terms: bool,
}

/// Accepts or rejects postings by title, order-preserving and pure.
#[derive(Debug, Clone, Default)]
pub struct RelevanceFilter {
    config: RelevanceConfig,
}

impl RelevanceFilter {
    pub fn new(config: RelevanceConfig) -> Self {
        Self { config }
    }

    fn analyze(&self, query: &str) -> QueryTerms {
        let query_lower = query.to_lowercase();

        let tokens: Vec<&str> = query_lower
            .split_whitespace()
            .filter(|w| w.len() > 2 && !self.config.filler_words.iter().any(|f| f == w))
            .collect();

        let mut expanded = HashSet::new();
        for token in &tokens {
            expanded.insert((*token).to_string());
            if let Some(expansions) = self.config.synonyms.get(*token) {
                expanded.extend(expansions.iter().cloned());
            }
        }

        let tech_intent = self
            .config
            .tech_keywords
            .iter()
            .any(|kw| query_lower.contains(kw.as_str()));

        QueryTerms {
            expanded,
            tech_intent,
            has_terms: !tokens.is_empty(),
        }
    }

    /// Filter `jobs` down to the ones relevant to `query`.
    ///
    /// Exclusion beats inclusion: for a tech-intent query, a title
    /// matching the non-tech-role list is rejected even if it also
    /// contains an accepted term. A degenerate query (nothing left after
    /// filler stripping) accepts everything not excluded.
    pub fn filter(&self, jobs: Vec<JobPosting>, query: &str) -> Vec<JobPosting> {
        let terms = self.analyze(query);

        jobs.into_iter()
            .filter(|job| {
                let title_lower = job.title.to_lowercase();

                if terms.tech_intent
                    && self
                        .config
                        .non_tech_roles
                        .iter()
                        .any(|role| title_lower.contains(role.as_str()))
                {
                    return false;
                }

                if !terms.has_terms {
                    return true;
                }

                terms
                    .expanded
                    .iter()
                    .any(|term| title_lower.contains(term.as_str()))
            })
            .collect()
    }
}
