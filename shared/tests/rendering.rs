mod common;

use serde_json::json;
use shared::render::{render_bulk, render_image, render_site, render_text, to_html};
use shared::{BulkResult, ImageVerdict, Score, SiteVerdict, TextVerdict};

use common::has_block_text;

fn full_text_verdict() -> TextVerdict {
    serde_json::from_value(json!({
        "design_score": 8,
        "animation_potential": 9,
        "innovation_score": 7,
        "technical_execution": 8,
        "client_focus": 6,
        "strengths": ["Cinematic lighting", "Consistent brand language"],
        "weaknesses": ["Few case studies"],
        "style_analysis": "Dark palette with neon accents.",
        "improvement_recommendations": ["Publish process breakdowns"],
        "summary": "A strong 3D-first studio."
    }))
    .unwrap()
}

#[test]
fn absent_fields_render_nothing() {
    common::init_logging();
    assert!(render_text(&TextVerdict::default()).is_empty());
    assert!(render_image(&ImageVerdict::default()).is_empty());
    assert!(render_site(&SiteVerdict::default()).is_empty());

    let bulk = render_bulk(&BulkResult::default(), "data/parsing_results.json");
    assert_eq!(bulk.len(), 1);
    assert!(!to_html(&bulk).contains("Total analyzed"));
}

#[test]
fn empty_lists_and_blank_prose_are_omitted() {
    let verdict: TextVerdict = serde_json::from_value(json!({
        "strengths": [], "weaknesses": [], "style_analysis": "", "summary": "   "
    }))
    .unwrap();
    assert!(render_text(&verdict).is_empty());
}

#[test]
fn text_blocks_follow_fixed_order() {
    let html = to_html(&render_text(&full_text_verdict()));
    let positions: Vec<usize> = [
        "score-grid",
        "Strengths:",
        "Weaknesses:",
        "Style Analysis:",
        "Recommendations:",
        "Summary:",
    ]
    .iter()
    .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{html}");
    assert!(html.contains("<li class=\"weakness\">Few case studies</li>"));
}

#[test]
fn missing_score_drops_only_its_tile() {
    let verdict = TextVerdict {
        design_score: Some(Score::new(8)),
        client_focus: Some(Score::new(11)),
        ..TextVerdict::default()
    };
    let html = to_html(&render_text(&verdict));

    assert_eq!(html.matches("score-item").count(), 2);
    assert!(html.contains("8/10"));
    assert!(html.contains("11/10"));
    assert!(!html.contains("Animation"));
    assert!(!html.contains("undefined"));
}

#[test]
fn site_analysis_matches_text_renderer() {
    let analysis = full_text_verdict();
    let site = SiteVerdict {
        url: Some("https://motion.example".into()),
        text_preview: Some("We make things move".into()),
        analysis: Some(analysis.clone()),
    };

    let site_blocks = render_site(&site);
    let text_blocks = render_text(&analysis);

    assert!(site_blocks.ends_with(&text_blocks));
    assert!(to_html(&site_blocks).ends_with(&to_html(&text_blocks)));
    assert_eq!(site_blocks.len(), text_blocks.len() + 3);
    assert!(has_block_text(&site_blocks, "📊 AI analysis:"));
}

#[test]
fn site_link_only_for_web_urls() {
    let web = render_site(&SiteVerdict {
        url: Some("https://motion.example".into()),
        ..Default::default()
    });
    assert!(to_html(&web).contains(
        "<a href=\"https://motion.example\" target=\"_blank\" rel=\"noopener noreferrer\">"
    ));

    let script = render_site(&SiteVerdict {
        url: Some("javascript:alert(1)".into()),
        ..Default::default()
    });
    let html = to_html(&script);
    assert!(!html.contains("<a "));
    assert!(html.contains("javascript:alert(1)"));
}

#[test]
fn backend_strings_are_escaped() {
    let verdict = TextVerdict {
        strengths: Some(vec!["<img src=x onerror=alert(1)>".into()]),
        summary: Some("Tom & Jerry's \"studio\"".into()),
        ..TextVerdict::default()
    };
    let html = to_html(&render_text(&verdict));

    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(html.contains("Tom &amp; Jerry&#39;s &quot;studio&quot;"));
    assert!(!html.contains("<img"));
}

#[test]
fn image_description_follows_scores() {
    let verdict: ImageVerdict = serde_json::from_value(json!({
        "description": "Poster with chrome typography",
        "design_score": 9,
        "recommendations": ["Add motion teaser"]
    }))
    .unwrap();
    let html = to_html(&render_image(&verdict));

    let scores = html.find("score-grid").unwrap();
    let description = html.find("Description:").unwrap();
    let recommendations = html.find("Recommendations:").unwrap();
    assert!(scores < description && description < recommendations);
    assert!(!html.contains("Visual style:"));
}

#[test]
fn bulk_block_states_total_and_results_file() {
    let blocks = render_bulk(&BulkResult { total: Some(12) }, "data/parsing_results.json");

    assert!(has_block_text(&blocks, "Total analyzed: 12 competitors"));
    assert!(has_block_text(&blocks, "Results saved to file: data/parsing_results.json"));
    assert!(to_html(&blocks).contains("<code>data/parsing_results.json</code>"));
}
