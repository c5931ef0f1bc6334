// Domain renderers - project each document into its view regions
use serde_json::Value;

use crate::application::format::{grouped, money, plain_number, text_or};
use crate::application::markup::{Element, render_all};
use crate::application::view::{DashboardView, Region};
use crate::domain::dashboard::Domain;
use crate::domain::documents::{
    decode, ActivityFeed, FinanceSnapshot, PipelineSnapshot, ProgressList, SystemHealth,
    VentureSet,
};
use crate::domain::status::{progress_class, StatusCategory, STATUS_CLASSES};

/// Set a status pill's text and its single status class.
pub fn apply_status(view: &mut dyn DashboardView, region: Region, status: &str) {
    view.set_text(region, status);
    view.remove_classes(region, &STATUS_CLASSES);
    if let Some(category) = StatusCategory::from_status(status) {
        view.add_class(region, category.css_class());
    }
}

/// Render a raw fetched document with the renderer for its domain.
pub fn render_domain(domain: Domain, document: &Value, view: &mut dyn DashboardView) {
    match domain {
        Domain::System => render_system(&decode(document), view),
        Domain::Pipeline => render_pipeline(&decode(document), view),
        Domain::Ventures => render_ventures(&decode(document), view),
        Domain::Activity => render_activity(&decode(document), view),
        Domain::Progress => render_progress(&decode(document), view),
        Domain::Finance => render_finance(&decode(document), view),
    }
}

pub fn render_system(data: &SystemHealth, view: &mut dyn DashboardView) {
    let gateway = &data.openclaw;
    let routing = &data.model_routing;
    let spend = &data.token_spend;

    apply_status(
        view,
        Region::OpenclawStatus,
        text_or(gateway.status.as_deref(), "unknown"),
    );
    view.set_text(
        Region::OpenclawMode,
        &format!(
            "{} @ {}",
            text_or(gateway.mode.as_deref(), "-"),
            text_or(gateway.bind.as_deref(), "-")
        ),
    );
    view.set_text(Region::PrimaryModel, text_or(routing.primary.as_deref(), "-"));
    view.set_text(
        Region::TokenSpend,
        &format!("{} tokens", grouped(spend.total_tokens_sum.unwrap_or(0.0))),
    );
    view.set_text(
        Region::CapacityRisk,
        &format!(
            "Max recent session usage: {}%",
            plain_number(spend.max_percent_used.unwrap_or(0.0))
        ),
    );

    let fallbacks = routing.fallbacks.join(", ");
    let lines = [
        format!("Primary: {}", text_or(routing.primary.as_deref(), "-")),
        format!("Fallbacks: {}", text_or(Some(fallbacks.as_str()), "none")),
        format!("Heartbeat: {}", text_or(routing.heartbeat_model.as_deref(), "-")),
        format!("Subagent: {}", text_or(routing.subagent_model.as_deref(), "-")),
    ];
    view.set_html(
        Region::RoutingList,
        render_all(lines.into_iter().map(|line| Element::new("li").text(line))),
    );
}

pub fn render_pipeline(data: &PipelineSnapshot, view: &mut dyn DashboardView) {
    apply_status(
        view,
        Region::PipelineStatus,
        text_or(data.status.as_deref(), "unknown"),
    );

    let html = if data.opportunities.is_empty() {
        Element::new("tr")
            .child(Element::new("td").attr("colspan", "4").text(format!(
                "No live opportunities available ({}).",
                text_or(data.reason.as_deref(), "source unavailable")
            )))
            .render()
    } else {
        render_all(data.opportunities.iter().map(|opp| {
            Element::new("tr")
                .child(Element::new("td").text(text_or(opp.name.as_deref(), "-")))
                .child(Element::new("td").text(text_or(opp.stage.as_deref(), "-")))
                .child(Element::new("td").text(money(opp.amount)))
                .child(Element::new("td").text(text_or(opp.close_date.as_deref(), "-")))
        }))
    };
    view.set_html(Region::PipelineRows, html);
}

pub fn render_ventures(data: &VentureSet, view: &mut dyn DashboardView) {
    let paragraph = |label: &str, value: Option<&str>| {
        Element::new("p")
            .child(Element::new("strong").text(format!("{}:", label)))
            .text(format!(" {}", text_or(value, "-")))
    };

    let cards = data.ventures.iter().map(|v| {
        let tier = v
            .priority_tier
            .map(plain_number)
            .unwrap_or_else(|| "-".to_string());
        Element::new("article")
            .class("venture")
            .child(
                Element::new("div")
                    .class("card-head")
                    .child(Element::new("h3").text(text_or(v.name.as_deref(), "-")))
                    .child(Element::new("span").class("pill").text(format!("P{}", tier))),
            )
            .child(paragraph("Stage", v.stage.as_deref()))
            .child(paragraph("90-Day Goal", v.ninety_day_goal.as_deref()))
            .child(paragraph("Current Priority", v.current_priority.as_deref()))
    });
    view.set_html(Region::VentureCards, render_all(cards));
}

pub fn render_activity(data: &ActivityFeed, view: &mut dyn DashboardView) {
    let items = data.events.iter().map(|event| {
        Element::new("li")
            .child(Element::new("strong").text(text_or(event.title.as_deref(), "-")))
            .child(Element::new("p").text(text_or(event.detail.as_deref(), "")))
            .child(Element::new("small").text(format!(
                "{} · {}",
                text_or(event.date.as_deref(), "-"),
                text_or(event.source.as_deref(), "-")
            )))
    });
    view.set_html(Region::ActivityList, render_all(items));
}

pub fn render_progress(data: &ProgressList, view: &mut dyn DashboardView) {
    let items = data.items.iter().map(|item| {
        let status = text_or(item.status.as_deref(), "pending");
        Element::new("li")
            .child(
                Element::new("div")
                    .class("card-head")
                    .child(Element::new("strong").text(text_or(item.name.as_deref(), "-")))
                    .child(
                        Element::new("span")
                            .class("pill")
                            .class(progress_class(status))
                            .text(status),
                    ),
            )
            .child(Element::new("p").text(text_or(item.detail.as_deref(), "")))
    });
    view.set_html(Region::ProgressList, render_all(items));
}

pub fn render_finance(data: &FinanceSnapshot, view: &mut dyn DashboardView) {
    let insights = &data.insights;

    apply_status(
        view,
        Region::FinanceStatus,
        text_or(data.status.as_deref(), "unknown"),
    );
    view.set_text(Region::BudgetCount, &data.budgets.len().to_string());
    view.set_text(
        Region::AccountCount,
        &plain_number(insights.total_accounts.unwrap_or(0.0)),
    );
    view.set_text(Region::NetWorth, &money(insights.net_worth));

    let reason = if data.status.as_deref() == Some("ok") {
        "Live YNAB snapshot loaded.".to_string()
    } else {
        format!(
            "Finance data degraded: {}",
            text_or(data.reason.as_deref(), "unknown")
        )
    };
    view.set_text(Region::FinanceReason, &reason);

    let html = if insights.top_categories.is_empty() {
        Element::new("li").text("No category data available.").render()
    } else {
        render_all(insights.top_categories.iter().map(|c| {
            Element::new("li")
                .child(
                    Element::new("div")
                        .class("card-head")
                        .child(Element::new("strong").text(text_or(c.name.as_deref(), "-")))
                        .child(Element::new("span").text(money(c.activity))),
                )
                .child(Element::new("small").text(format!(
                    "Budgeted {} · Balance {}",
                    money(c.budgeted),
                    money(c.balance)
                )))
        }))
    };
    view.set_html(Region::CategoryList, html);
}
