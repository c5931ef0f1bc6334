// Dashboard page template
use crate::application::markup::Element;
use crate::application::view::{InMemoryView, Region};
use crate::domain::dashboard::Domain;
use crate::domain::tabs::TabController;

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #0f172a; color: #e2e8f0; }
header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 1.5rem; }
nav { display: flex; gap: .5rem; padding: 0 1.5rem; }
.tab { padding: .5rem 1rem; border: 0; border-radius: .5rem; color: inherit; font: inherit; cursor: pointer; text-decoration: none; background: #1e293b; }
.tab.is-active { background: #2563eb; }
.tab-panel { display: none; padding: 1.5rem; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); }
.tab-panel.is-active { display: grid; }
.card, .venture { background: #1e293b; border-radius: .75rem; padding: 1rem; }
.card-head { display: flex; justify-content: space-between; align-items: center; gap: .5rem; }
.pill { padding: .1rem .6rem; border-radius: 999px; background: #334155; font-size: .8rem; }
.status-ok { background: #15803d; }
.status-degraded { background: #b45309; }
.status-unavailable, .status-pending { background: #b91c1c; }
table { width: 100%; border-collapse: collapse; }
td, th { padding: .4rem; text-align: left; border-bottom: 1px solid #334155; }
ul { list-style: none; padding: 0; margin: 0; }
li { padding: .5rem 0; border-bottom: 1px solid #334155; }
"#;

// Client-side tab switching. Mirrors `TabController::activate` without a
// request, and keeps the refresh link on the selected tab.
const TAB_SCRIPT: &str = r#"
document.querySelectorAll(".tab[data-tab]").forEach((tab) => {
  tab.addEventListener("click", () => {
    document.querySelectorAll(".tab[data-tab], .tab-panel").forEach((el) => el.classList.remove("is-active"));
    tab.classList.add("is-active");
    document.querySelector(`.tab-panel[data-panel="${tab.dataset.tab}"]`)?.classList.add("is-active");
    document.getElementById("refreshBtn").setAttribute("href", `/?tab=${tab.dataset.tab}`);
  });
});
"#;

/// Element bound to a view region, carrying the region's classes and content.
fn region(view: &InMemoryView, tag: &'static str, region: Region, base_class: Option<&str>) -> Element {
    let mut element = Element::new(tag).attr("id", region.id());
    if let Some(class) = base_class {
        element = element.class(class);
    }
    match view.region(region) {
        Some(state) => {
            for class in &state.classes {
                element = element.class(class.clone());
            }
            element.raw(state.inner_html())
        }
        None => element,
    }
}

fn card(title: &str) -> Element {
    Element::new("article")
        .class("card")
        .child(Element::new("h2").text(title))
}

fn card_with_status(view: &InMemoryView, title: &str, status: Region) -> Element {
    Element::new("article").class("card").child(
        Element::new("div")
            .class("card-head")
            .child(Element::new("h2").text(title))
            .child(region(view, "span", status, Some("pill"))),
    )
}

fn stat(view: &InMemoryView, label: &str, target: Region) -> Element {
    Element::new("p")
        .child(Element::new("small").text(label))
        .child(Element::new("br"))
        .child(region(view, "strong", target, None))
}

fn panel_content(view: &InMemoryView, domain: Domain) -> Vec<Element> {
    match domain {
        Domain::System => vec![
            card_with_status(view, "Gateway", Region::OpenclawStatus)
                .child(region(view, "p", Region::OpenclawMode, None)),
            card("Model Routing")
                .child(region(view, "p", Region::PrimaryModel, None))
                .child(region(view, "ul", Region::RoutingList, None)),
            card("Token Spend")
                .child(region(view, "p", Region::TokenSpend, None))
                .child(region(view, "small", Region::CapacityRisk, None)),
        ],
        Domain::Pipeline => vec![card_with_status(view, "Skyhawk Pipeline", Region::PipelineStatus).child(
            Element::new("table")
                .child(Element::new("thead").child(Element::new("tr").children(
                    ["Opportunity", "Stage", "Amount", "Close Date"]
                        .into_iter()
                        .map(|h| Element::new("th").text(h)),
                )))
                .child(region(view, "tbody", Region::PipelineRows, None)),
        )],
        Domain::Ventures => vec![region(view, "div", Region::VentureCards, Some("cards"))],
        Domain::Activity => vec![card("Recent Activity").child(region(view, "ul", Region::ActivityList, None))],
        Domain::Progress => vec![card("Implementation Progress").child(region(view, "ul", Region::ProgressList, None))],
        Domain::Finance => vec![
            card_with_status(view, "Finance", Region::FinanceStatus)
                .child(stat(view, "Budgets", Region::BudgetCount))
                .child(stat(view, "Accounts", Region::AccountCount))
                .child(stat(view, "Net Worth", Region::NetWorth))
                .child(region(view, "p", Region::FinanceReason, None)),
            card("Top Categories").child(region(view, "ul", Region::CategoryList, None)),
        ],
    }
}

/// Render the complete dashboard document.
pub fn render_page(view: &InMemoryView, tabs: &TabController) -> String {
    let active = tabs.active().unwrap_or(Domain::System.key());

    let nav = Element::new("nav").children(tabs.tabs().iter().map(|tab| {
        let label = Domain::from_key(&tab.key).map(Domain::label).unwrap_or(tab.key.as_str());
        Element::new("button")
            .class("tab")
            .class_if(tab.active, "is-active")
            .attr("data-tab", tab.key.clone())
            .attr("type", "button")
            .text(label)
    }));

    let panels = tabs.panels().iter().filter_map(|panel| {
        let domain = Domain::from_key(&panel.key)?;
        Some(
            Element::new("section")
                .class("tab-panel")
                .class_if(panel.active, "is-active")
                .attr("data-panel", panel.key.clone())
                .children(panel_content(view, domain)),
        )
    });

    let header = Element::new("header")
        .child(Element::new("h1").text("Operations Dashboard"))
        .child(
            Element::new("div")
                .child(region(view, "span", Region::GeneratedAt, None))
                .text(" ")
                .child(
                    Element::new("a")
                        .attr("id", "refreshBtn")
                        .class("tab")
                        .attr("href", format!("/?tab={}", active))
                        .text("Refresh"),
                ),
        );

    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text("Operations Dashboard"))
        .child(Element::new("style").raw(STYLESHEET));

    let body = Element::new("body")
        .child(header)
        .child(nav)
        .child(Element::new("main").children(panels))
        .child(Element::new("script").raw(TAB_SCRIPT));

    format!(
        "<!DOCTYPE html>{}",
        Element::new("html").attr("lang", "en").child(head).child(body).render()
    )
}
