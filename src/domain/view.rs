// Dashboard navigation targets
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Overview,
    Sales,
    Inventory,
    CustomerDemand,
}

impl View {
    pub const ALL: [View; 4] = [View::Overview, View::Sales, View::Inventory, View::CustomerDemand];

    pub fn slug(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Sales => "sales",
            View::Inventory => "inventory",
            View::CustomerDemand => "customer-demand",
        }
    }

    /// Label shown in the navigation menu.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Sales => "Sales",
            View::Inventory => "Inventory",
            View::CustomerDemand => "Customer Demand",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            View::Overview => "lightbulb",
            View::Sales => "cash",
            View::Inventory => "box",
            View::CustomerDemand => "graph-up-arrow",
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            View::Overview => "📊 Dairy Product Analysis Dashboard",
            View::Sales => "💰 Sales & Revenue Analysis",
            View::Inventory => "📦 Inventory & Stock Management",
            View::CustomerDemand => "📈 Customer Demand & Trends",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    /// Accepts the slug or the menu label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        View::ALL
            .into_iter()
            .find(|v| v.slug() == normalized)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
