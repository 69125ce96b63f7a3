//! Search filtering over the in-memory job list. Recomputed in full on every
//! query change; the dataset is small and entirely resident, so there is no
//! index and no ranking.

use crate::jobs::models::Job;

/// Returns the order-preserving subsequence of `jobs` matching `query`.
///
/// A trimmed-empty query matches everything (identity). Otherwise a job
/// matches when the lowercased query is a substring of its lowercased title,
/// description, or any one of its tags. Pure substring containment,
/// OR-combined — no tokenization or stemming.
pub fn filter_jobs<'a>(jobs: &'a [Job], query: &str) -> Vec<&'a Job> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return jobs.iter().collect();
    }

    jobs.iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&needle)
                || job.description.to_lowercase().contains(&needle)
                || job.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u32, title: &str, description: &str, tags: &[&str]) -> Job {
        Job {
            id,
            title: title.to_string(),
            description: description.to_string(),
            budget: "UGX 1,000,000".to_string(),
            location: "Remote".to_string(),
            posted_time: "1 day ago".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job(1, "Website Development", "Build an e-commerce site", &["React", "Node.js"]),
            job(2, "Mobile App Design", "Wireframes for a fitness app", &["UI/UX", "Figma"]),
            job(3, "Content Writing", "Blog posts about technology", &["Blogging"]),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let jobs = sample();
        let matched = filter_jobs(&jobs, "");
        assert_eq!(matched.len(), jobs.len());
        let ids: Vec<u32> = matched.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let jobs = sample();
        assert_eq!(filter_jobs(&jobs, "   ").len(), 3);
    }

    #[test]
    fn test_lowercase_query_matches_capitalized_tag() {
        let jobs = sample();
        let matched = filter_jobs(&jobs, "react");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_matches_title_or_description() {
        let jobs = sample();
        assert_eq!(filter_jobs(&jobs, "design")[0].id, 2);
        assert_eq!(filter_jobs(&jobs, "e-commerce")[0].id, 1);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let jobs = sample();
        assert!(filter_jobs(&jobs, "blockchain").is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let jobs = sample();
        // "app" hits job 2 (title) only; "o" hits all three.
        let ids: Vec<u32> = filter_jobs(&jobs, "o").iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_idempotent_for_same_inputs() {
        let jobs = sample();
        let first: Vec<u32> = filter_jobs(&jobs, "fitness").iter().map(|j| j.id).collect();
        let second: Vec<u32> = filter_jobs(&jobs, "fitness").iter().map(|j| j.id).collect();
        assert_eq!(first, second);
    }
}
