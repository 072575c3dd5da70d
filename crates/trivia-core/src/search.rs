//! Substring search over question text.

use crate::model::Question;

/// Questions whose text contains `term`, ignoring case. Pool order is kept.
///
/// A blank term matches every question.
pub fn search_questions<'a>(pool: &'a [Question], term: &str) -> Vec<&'a Question> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return pool.iter().collect();
    }

    pool.iter()
        .filter(|q| q.text.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, text: &str) -> Question {
        Question {
            id,
            text: text.into(),
            answer: String::new(),
            category: 1,
            difficulty: 1,
        }
    }

    fn pool() -> Vec<Question> {
        vec![
            question(1, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"),
            question(2, "What movie earned Tom Hanks his third straight Oscar nomination?"),
            question(3, "What was the title of the 1990 fantasy directed by Tim Burton?"),
        ]
    }

    #[test]
    fn matches_case_insensitively() {
        let pool = pool();
        let ids: Vec<_> = search_questions(&pool, "TITLE").iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn keeps_pool_order() {
        let pool = pool();
        let ids: Vec<_> = search_questions(&pool, "th").iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn blank_term_matches_everything() {
        let pool = pool();
        assert_eq!(search_questions(&pool, "   ").len(), 3);
    }

    #[test]
    fn no_match_is_empty() {
        let pool = pool();
        assert!(search_questions(&pool, "quantum").is_empty());
    }
}
