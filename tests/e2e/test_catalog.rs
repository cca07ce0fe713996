use pretty_assertions::assert_eq;

use ainav_core::domain::catalog::{filter_websites, RankingMetric};
use chrono::{TimeZone, Utc};

use crate::helpers::{fixtures, TestContext};

#[test]
fn it_should_filter_by_title_substring_case_insensitively() {
    let websites = vec![
        fixtures::website(1, "ChatGPT", "assistant", 1),
        fixtures::website(2, "Claude", "assistant", 1),
    ];
    let filtered = filter_websites(&websites, "chat");
    let ids: Vec<i64> = filtered.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn it_should_return_the_full_list_for_an_empty_query() {
    let (websites, _) = fixtures::sample_catalog();
    let filtered = filter_websites(&websites, "");
    assert_eq!(filtered, websites);
}

#[test]
fn it_should_exclude_pending_websites_from_the_home_view() {
    let ctx = TestContext::new();
    let view = ctx.catalog.home_view(&ctx.session);

    let listed: Vec<i64> = view
        .sections
        .iter()
        .flat_map(|s| s.websites.iter().map(|w| w.id))
        .collect();
    assert!(!listed.contains(&5), "pending website 5 must not be listed");
    assert_eq!(listed, vec![1, 2, 3, 4]);
}

#[test]
fn it_should_narrow_home_sections_to_the_search_query() {
    let ctx = TestContext::new();
    ctx.session.set_search_query("image");

    let view = ctx.catalog.home_view(&ctx.session);
    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].category.id, 2);
    assert_eq!(view.sections[0].websites[0].title, "Midjourney");
}

#[test]
fn it_should_rank_by_visits_and_likes() {
    let ctx = TestContext::new();
    for _ in 0..3 {
        ctx.catalog.apply_visit(2);
    }
    ctx.catalog.apply_visit(1);
    ctx.catalog.apply_like(3);

    let by_visits = ctx.catalog.rankings(RankingMetric::Visits, 2);
    assert_eq!(by_visits[0].id, 2);
    assert_eq!(by_visits[1].id, 1);

    let by_likes = ctx.catalog.rankings(RankingMetric::Likes, 1);
    assert_eq!(by_likes[0].id, 3);
}

#[test]
fn it_should_rank_never_visited_websites_last_under_recent_visit() {
    let ctx = TestContext::new();
    let mut websites = ctx.catalog.websites();
    for website in &mut websites {
        website.last_visited_at = None;
    }
    websites[1].last_visited_at = Some(Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap());
    websites[3].last_visited_at = Some(Utc.with_ymd_and_hms(2026, 8, 25, 9, 30, 0).unwrap());
    let categories = ctx.catalog.categories();
    ctx.catalog.replace(websites, categories);

    let ranked = ctx.catalog.rankings(RankingMetric::RecentVisit, 10);
    assert_eq!(ranked[0].id, 4);
    assert_eq!(ranked[1].id, 2);
    assert!(ranked[2].last_visited_at.is_none());
}
