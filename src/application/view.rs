// View binding - the regions renderers write into
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::application::markup::escape;

/// A fixed page region. Each maps to a stable element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    OpenclawStatus,
    OpenclawMode,
    PrimaryModel,
    TokenSpend,
    CapacityRisk,
    RoutingList,
    PipelineStatus,
    PipelineRows,
    VentureCards,
    ActivityList,
    ProgressList,
    FinanceStatus,
    BudgetCount,
    AccountCount,
    NetWorth,
    FinanceReason,
    CategoryList,
    GeneratedAt,
}

impl Region {
    pub fn id(self) -> &'static str {
        match self {
            Region::OpenclawStatus => "openclawStatus",
            Region::OpenclawMode => "openclawMode",
            Region::PrimaryModel => "primaryModel",
            Region::TokenSpend => "tokenSpend",
            Region::CapacityRisk => "capacityRisk",
            Region::RoutingList => "routingList",
            Region::PipelineStatus => "pipelineStatus",
            Region::PipelineRows => "pipelineRows",
            Region::VentureCards => "ventureCards",
            Region::ActivityList => "activityList",
            Region::ProgressList => "progressList",
            Region::FinanceStatus => "financeStatus",
            Region::BudgetCount => "budgetCount",
            Region::AccountCount => "accountCount",
            Region::NetWorth => "netWorth",
            Region::FinanceReason => "financeReason",
            Region::CategoryList => "categoryList",
            Region::GeneratedAt => "generatedAt",
        }
    }
}

/// Operations renderers may perform on a region.
pub trait DashboardView: Send {
    /// Replace the region's content with plain text.
    fn set_text(&mut self, region: Region, text: &str);

    /// Replace the region's content with markup.
    fn set_html(&mut self, region: Region, html: String);

    fn remove_classes(&mut self, region: Region, classes: &[&str]);

    fn add_class(&mut self, region: Region, class: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    pub classes: BTreeSet<String>,
}

impl RegionState {
    /// Content ready to place inside the region's element.
    pub fn inner_html(&self) -> String {
        match (&self.text, &self.html) {
            (Some(text), _) => escape(text),
            (None, Some(html)) => html.clone(),
            (None, None) => String::new(),
        }
    }
}

/// View that records region state in memory. Backs page rendering and tests.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct InMemoryView {
    regions: BTreeMap<&'static str, RegionState>,
}

impl InMemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self, region: Region) -> Option<&RegionState> {
        self.regions.get(region.id())
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.region(region).and_then(|r| r.text.as_deref())
    }

    pub fn html(&self, region: Region) -> Option<&str> {
        self.region(region).and_then(|r| r.html.as_deref())
    }

    pub fn classes(&self, region: Region) -> Vec<&str> {
        self.region(region)
            .map(|r| r.classes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of regions that have been written to.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    fn entry(&mut self, region: Region) -> &mut RegionState {
        self.regions.entry(region.id()).or_default()
    }
}

impl DashboardView for InMemoryView {
    fn set_text(&mut self, region: Region, text: &str) {
        let state = self.entry(region);
        state.text = Some(text.to_string());
        state.html = None;
    }

    fn set_html(&mut self, region: Region, html: String) {
        let state = self.entry(region);
        state.html = Some(html);
        state.text = None;
    }

    fn remove_classes(&mut self, region: Region, classes: &[&str]) {
        let state = self.entry(region);
        for class in classes {
            state.classes.remove(*class);
        }
    }

    fn add_class(&mut self, region: Region, class: &str) {
        self.entry(region).classes.insert(class.to_string());
    }
}
