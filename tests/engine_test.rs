use hive_ai_engine::{
    AiEngine, ContentItem, EngineOptions, ModerationAction, RankOptions, Ranker, TfidfRanker,
    TokenPattern, User,
};
use serde_json::{json, Value};

fn engine() -> AiEngine {
    AiEngine::new(EngineOptions::default()).unwrap()
}

fn items(value: Value) -> Vec<ContentItem> {
    serde_json::from_value(value).unwrap()
}

fn community() -> Vec<User> {
    vec![
        User::new(1, ["rust", "python"], ["hiking", "music"]),
        User::new(2, ["rust", "go"], ["music"]),
        User::new(3, ["cooking"], ["gardening"]),
        User::new(4, ["python", "data"], ["hiking"]),
        User::new(5, ["rust", "python"], ["hiking", "music"]),
    ]
}

#[test]
fn test_recommend_users_properties() {
    let users = community();
    let recs = engine().recommend_users(&users[0], &users).unwrap();

    assert!(!recs.is_empty());
    assert!(recs.len() <= 10);
    assert!(recs.iter().all(|r| r.user_id != 1));
    assert!(recs.iter().all(|r| r.similarity_score > 0.1));
    assert!(recs.iter().all(|r| r.similarity_score <= 1.0));
    assert!(recs
        .windows(2)
        .all(|w| w[0].similarity_score >= w[1].similarity_score));
    assert!(recs.iter().all(|r| {
        r.match_percentage == (r.similarity_score * 100.0).floor() as u8
    }));

    // identical profile ranks first, unrelated cook is filtered out
    assert_eq!(recs[0].user_id, 5);
    assert!(recs.iter().all(|r| r.user_id != 3));
}

#[test]
fn test_recommend_users_caps_at_ten() {
    let me = User::new(0, ["rust"], ["music"]);
    let mut all: Vec<User> = (1..=15).map(|id| User::new(id, ["rust"], ["music"])).collect();
    all.push(me.clone());

    let recs = engine().recommend_users(&me, &all).unwrap();
    assert_eq!(recs.len(), 10);

    // equal scores keep input order
    let ids: Vec<i64> = recs.iter().map(|r| r.user_id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
}

#[test]
fn test_smart_search_filters_and_caps() {
    let mut content: Vec<ContentItem> = (0..25)
        .map(|i| {
            items(json!([{
                "id": i,
                "title": "guitar lessons",
                "description": format!("lesson {}", i),
                "category": "music"
            }]))
            .remove(0)
        })
        .collect();
    content.extend(items(json!([{"id": 99, "title": "tax advice", "category": "finance"}])));

    let results = engine().smart_search("Guitar", content).unwrap();

    assert_eq!(results.len(), 20);
    assert!(results.iter().all(|r| r["id"] != 99));
    assert!(results
        .iter()
        .all(|r| r["relevance_score"].as_f64().unwrap() > 0.1));
    assert!(results.iter().all(|r| r.contains_key("match_percentage")));
}

#[test]
fn test_smart_search_empty_content() {
    assert!(engine().smart_search("guitar", Vec::new()).unwrap().is_empty());
}

#[test]
fn test_match_skills_sorted_uncapped() {
    let wanted: Vec<String> = ["graphic design", "plumbing", "web design", "design"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let matches = engine().match_skills("web design", wanted).unwrap();

    assert_eq!(matches.len(), 4);
    assert_eq!(matches[0].skill, "web design");
    assert!(matches.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    assert_eq!(matches[3].skill, "plumbing");
    assert_eq!(matches[3].compatibility, 0);
}

#[test]
fn test_recommend_events_caps_at_ten_without_threshold() {
    let events: Vec<ContentItem> = (0..12)
        .map(|i| {
            items(json!([{ "id": i, "title": format!("event {}", i), "category": "misc" }]))
                .remove(0)
        })
        .collect();

    let recs = engine()
        .recommend_events(&["jazz".to_string()], events)
        .unwrap();

    // nothing overlaps, still returned with zero scores
    assert_eq!(recs.len(), 10);
    assert!(recs.iter().all(|r| r["recommendation_score"] == 0.0));
    assert_eq!(recs[0]["id"], 0);
}

#[test]
fn test_recommend_events_ranking() {
    let events = items(json!([
        {"id": 1, "title": "Pottery class", "description": "clay", "category": "art"},
        {"id": 2, "title": "Jazz night", "description": "live jazz music", "category": "music"},
    ]));

    let recs = engine()
        .recommend_events(&["jazz".to_string(), "music".to_string()], events)
        .unwrap();

    assert_eq!(recs[0]["id"], 2);
    assert!(recs[0]["recommendation_score"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_ranker_identity_and_disjoint() {
    let ranker = TfidfRanker::default();

    let ranked = ranker.rank("alpha", &["alpha"], &RankOptions::new()).unwrap();
    assert_eq!(ranked[0].score, 1.0);

    let ranked = ranker
        .rank("alpha", &["beta"], &RankOptions::new().with_threshold(0.1))
        .unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_word_tokenizer_engine() {
    let options = EngineOptions {
        token_pattern: TokenPattern::Word,
        ..EngineOptions::default()
    };
    let engine = AiEngine::new(options).unwrap();

    let matches = engine
        .match_skills("Web-Design", vec!["web design".to_string()])
        .unwrap();
    assert_eq!(matches[0].compatibility, 100);
}

#[test]
fn test_smart_search_capitalized_content_by_token_pattern() {
    let content = items(json!([
        {"title": "Rust Meetup", "description": "Learn Rust", "category": "Tech"}
    ]));

    // whitespace terms are case-sensitive; only the query is lower-cased
    assert!(engine().smart_search("rust", content.clone()).unwrap().is_empty());

    let word = AiEngine::new(EngineOptions {
        token_pattern: TokenPattern::Word,
        ..EngineOptions::default()
    })
    .unwrap();
    let results = word.smart_search("rust", content).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0]["relevance_score"].as_f64().unwrap() > 0.1);
}

#[test]
fn test_moderation_examples() {
    let engine = engine();

    let report = engine.moderate("spam and hate");
    assert_eq!(report.flags, vec!["spam", "hate"]);
    assert_eq!(report.toxicity_score, 0.4);
    assert!(!report.is_safe);
    assert_eq!(report.action, ModerationAction::Review);

    let report = engine.moderate("a friendly note");
    assert!(report.flags.is_empty());
    assert_eq!(report.toxicity_score, 0.0);
    assert!(report.is_safe);
    assert_eq!(report.action, ModerationAction::Approve);
}
