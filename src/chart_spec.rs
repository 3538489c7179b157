// src/chart_spec.rs

use ratatui::style::Color;

use crate::dataset::Dataset;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregation {
    None,
    GroupSum,
}

// A fixed rule set for one dashboard chart: which columns must be present,
// how the values are aggregated, and how the result is displayed. The first
// required column is the label/group column, the second the value column.
pub struct ChartSpec {
    pub title: &'static str,
    pub purpose: &'static str,
    pub required: &'static [&'static str],
    pub kind: ChartKind,
    pub aggregation: Aggregation,
    pub accent: Color,
    pub group_cap: Option<usize>,
}

impl ChartSpec {
    pub fn label_column(&self) -> &'static str {
        self.required[0]
    }

    pub fn value_column(&self) -> &'static str {
        self.required[1]
    }

    pub fn missing_columns(&self, dataset: &Dataset) -> Vec<&'static str> {
        self.required
            .iter()
            .copied()
            .filter(|name| dataset.column_index(name).is_none())
            .collect()
    }

    pub fn warning(&self) -> String {
        let columns = self
            .required
            .iter()
            .map(|name| format!("'{}'", name))
            .collect::<Vec<String>>();
        format!(
            "Please ensure your data has {} columns for {}.",
            columns.join(" and "),
            self.purpose
        )
    }
}


pub const SALES_OVER_TIME: ChartSpec = ChartSpec {
    title: "Sales Over Time",
    purpose: "sales visualization",
    required: &["date", "amount"],
    kind: ChartKind::Line,
    aggregation: Aggregation::None,
    accent: Color::LightRed,
    group_cap: None,
};

pub const CUSTOMER_SEGMENTATION: ChartSpec = ChartSpec {
    title: "Customer Segmentation",
    purpose: "customer segmentation",
    required: &["region", "amount"],
    kind: ChartKind::Pie,
    aggregation: Aggregation::GroupSum,
    accent: Color::Cyan,
    group_cap: None,
};

pub const TOP_PRODUCTS: ChartSpec = ChartSpec {
    title: "Top Products By Sales",
    purpose: "product analysis",
    required: &["product", "amount"],
    kind: ChartKind::Bar,
    aggregation: Aggregation::GroupSum,
    accent: Color::Blue,
    group_cap: Some(10),
};

pub fn dashboard_charts() -> [&'static ChartSpec; 3] {
    [&SALES_OVER_TIME, &CUSTOMER_SEGMENTATION, &TOP_PRODUCTS]
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loader::TableData;

    fn dataset_with(headers: &[&str]) -> Dataset {
        Dataset::new(TableData::new(
            headers.iter().map(|h| h.to_string()).collect(),
            headers.iter().map(|_| Vec::new()).collect(),
        ))
    }

    #[test]
    fn test_missing_columns() {
        let dataset = dataset_with(&["date", "region"]);
        assert_eq!(SALES_OVER_TIME.missing_columns(&dataset), vec!["amount"]);
        let full = dataset_with(&["date", "amount", "region", "product"]);
        for spec in dashboard_charts() {
            assert!(spec.missing_columns(&full).is_empty());
        }
    }

    #[test]
    fn test_warning_names_required_columns() {
        let warning = CUSTOMER_SEGMENTATION.warning();
        assert_eq!(
            warning,
            "Please ensure your data has 'region' and 'amount' columns for customer segmentation."
        );
    }

    #[test]
    fn test_fixed_specs() {
        assert_eq!(SALES_OVER_TIME.aggregation, Aggregation::None);
        assert_eq!(TOP_PRODUCTS.aggregation, Aggregation::GroupSum);
        assert_eq!(TOP_PRODUCTS.group_cap, Some(10));
        assert_eq!(TOP_PRODUCTS.kind, ChartKind::Bar);
        assert_eq!(CUSTOMER_SEGMENTATION.label_column(), "region");
        assert_eq!(CUSTOMER_SEGMENTATION.value_column(), "amount");
    }
}
