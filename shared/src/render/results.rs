use crate::config::ClientConfig;
use crate::model::{AnalysisResult, BulkResult, ImageVerdict, Score, SiteVerdict, TextVerdict};

use super::node::{Element, Fragment, Node, Tag};

pub fn render_result(result: &AnalysisResult, config: &ClientConfig) -> Fragment {
    match result {
        AnalysisResult::Text(verdict) => render_text(verdict),
        AnalysisResult::Image(verdict) => render_image(verdict),
        AnalysisResult::Site(verdict) => render_site(verdict),
        AnalysisResult::Bulk(bulk) => render_bulk(bulk, &config.bulk_results_file),
    }
}

/// Blocks in fixed order: scores, strengths, weaknesses, style, recommendations,
/// summary. A block is emitted only when its field carries data.
pub fn render_text(verdict: &TextVerdict) -> Fragment {
    [
        score_grid(&[
            ("Design", verdict.design_score.as_ref()),
            ("Animation", verdict.animation_potential.as_ref()),
            ("Innovation", verdict.innovation_score.as_ref()),
            ("Execution", verdict.technical_execution.as_ref()),
            ("Clients", verdict.client_focus.as_ref()),
        ]),
        list_section("✅ Strengths:", verdict.strengths.as_deref(), None),
        list_section("⚠️ Weaknesses:", verdict.weaknesses.as_deref(), Some("weakness")),
        prose_section("🎨 Style Analysis:", verdict.style_analysis.as_deref()),
        list_section("💡 Recommendations:", verdict.improvement_recommendations.as_deref(), None),
        prose_section("📊 Summary:", verdict.summary.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn render_image(verdict: &ImageVerdict) -> Fragment {
    [
        score_grid(&[
            ("Design", verdict.design_score.as_ref()),
            ("Animation", verdict.animation_potential.as_ref()),
            ("Visual", verdict.visual_style_score.as_ref()),
        ]),
        prose_section("📝 Description:", verdict.description.as_deref()),
        prose_section("🎨 Visual style:", verdict.visual_style_analysis.as_deref()),
        list_section("💡 Recommendations:", verdict.recommendations.as_deref(), None),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// URL and preview blocks, followed by exactly what `render_text` produces
/// for the embedded analysis.
pub fn render_site(verdict: &SiteVerdict) -> Fragment {
    let mut blocks: Fragment = [
        present(verdict.url.as_deref()).map(url_section),
        prose_section("📄 Content preview:", verdict.text_preview.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect();

    if let Some(analysis) = &verdict.analysis {
        blocks.push(section("📊 AI analysis:").into());
        blocks.extend(render_text(analysis));
    }
    blocks
}

pub fn render_bulk(bulk: &BulkResult, results_file: &str) -> Fragment {
    let mut block = section("✅ Bulk parsing complete");
    if let Some(total) = bulk.total {
        block = block.child(
            Element::new(Tag::P)
                .child("Total analyzed: ")
                .child(Element::new(Tag::Strong).child(total.to_string()))
                .child(" competitors"),
        );
    }
    block = block.child(
        Element::new(Tag::P)
            .child("Results saved to file: ")
            .child(Element::new(Tag::Code).child(results_file)),
    );
    vec![block.into()]
}

fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}

fn section(heading: &str) -> Element {
    Element::new(Tag::Div)
        .class("analysis-section")
        .child(Element::new(Tag::H4).child(heading))
}

fn score_grid(tiles: &[(&str, Option<&Score>)]) -> Option<Node> {
    let tiles: Vec<Element> = tiles
        .iter()
        .filter_map(|(label, score)| score.map(|score| score_tile(label, score)))
        .collect();
    if tiles.is_empty() {
        return None;
    }
    Some(Element::new(Tag::Div).class("score-grid").children(tiles).into())
}

fn score_tile(label: &str, score: &Score) -> Element {
    Element::new(Tag::Div)
        .class("score-item")
        .child(Element::new(Tag::Span).class("score-value").child(format!("{score}/10")))
        .child(Element::new(Tag::Span).class("score-label").child(label))
}

fn list_section(
    heading: &str,
    items: Option<&[String]>,
    item_class: Option<&'static str>,
) -> Option<Node> {
    let items = items.filter(|items| !items.is_empty())?;
    let list = Element::new(Tag::Ul).children(items.iter().map(|item| {
        let li = Element::new(Tag::Li).child(item.as_str());
        match item_class {
            Some(class) => li.class(class),
            None => li,
        }
    }));
    Some(section(heading).child(list).into())
}

fn prose_section(heading: &str, text: Option<&str>) -> Option<Node> {
    let text = present(text)?;
    Some(section(heading).child(Element::new(Tag::P).child(text)).into())
}

fn url_section(url: &str) -> Node {
    let link = if is_web_url(url) {
        Node::from(Element::new(Tag::A).href(url.trim()).child(url))
    } else {
        Node::from(url)
    };
    section("🌐 URL:").child(Element::new(Tag::P).child(link)).into()
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
