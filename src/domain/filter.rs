// Filter selection and the filter engine
use super::record::DairyRecord;
use serde::Serialize;

/// Sentinel used by every selector for "no constraint".
pub const ALL: &str = "All";

/// A single selector: either unconstrained or an exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue<T> {
    #[default]
    All,
    Exact(T),
}

impl<T: PartialEq> FilterValue<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Exact(expected) => expected == value,
        }
    }
}

impl FilterValue<String> {
    /// Absent, empty and "All" all mean unconstrained.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") | Some(ALL) => FilterValue::All,
            Some(value) => FilterValue::Exact(value.to_string()),
        }
    }
}

impl<T: ToString> Serialize for FilterValue<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterValue::All => serializer.serialize_str(ALL),
            FilterValue::Exact(value) => serializer.serialize_str(&value.to_string()),
        }
    }
}

/// The user's current brand/location/product/year selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterSelection {
    pub brand: FilterValue<String>,
    pub location: FilterValue<String>,
    pub product: FilterValue<String>,
    pub year: FilterValue<i32>,
}

impl FilterSelection {
    pub fn matches(&self, record: &DairyRecord) -> bool {
        self.brand.matches(&record.brand)
            && self.location.matches(&record.location)
            && self.product.matches(&record.product_name)
            && match &self.year {
                FilterValue::All => true,
                // Undated records never satisfy a year constraint.
                FilterValue::Exact(year) => record.year == Some(*year),
            }
    }
}

/// Returns the records matching every constraint of `selection`, in dataset order.
pub fn apply_filters(records: &[DairyRecord], selection: &FilterSelection) -> Vec<DairyRecord> {
    records
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_records;

    fn exact(value: &str) -> FilterValue<String> {
        FilterValue::Exact(value.to_string())
    }

    #[test]
    fn test_all_filters_return_full_set() {
        let records = sample_records();
        let filtered = apply_filters(&records, &FilterSelection::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let records = sample_records();
        let selection = FilterSelection {
            brand: exact("Amul"),
            location: exact("Delhi"),
            ..Default::default()
        };
        let filtered = apply_filters(&records, &selection);

        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|r| r.brand == "Amul" && r.location == "Delhi"));
        let expected = records
            .iter()
            .filter(|r| r.brand == "Amul" && r.location == "Delhi")
            .count();
        assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn test_filter_order_does_not_matter() {
        let records = sample_records();
        let brand_first = apply_filters(
            &apply_filters(
                &records,
                &FilterSelection {
                    brand: exact("Amul"),
                    ..Default::default()
                },
            ),
            &FilterSelection {
                year: FilterValue::Exact(2023),
                ..Default::default()
            },
        );
        let combined = apply_filters(
            &records,
            &FilterSelection {
                brand: exact("Amul"),
                year: FilterValue::Exact(2023),
                ..Default::default()
            },
        );
        assert_eq!(brand_first, combined);
    }

    #[test]
    fn test_unmatched_value_yields_empty_subset() {
        let records = sample_records();
        let selection = FilterSelection {
            product: exact("Camel Milk"),
            ..Default::default()
        };
        assert!(apply_filters(&records, &selection).is_empty());
    }

    #[test]
    fn test_subset_never_grows() {
        let records = sample_records();
        let brands = ["All", "Amul", "Mother Dairy", "Nope"];
        let years = [None, Some(2023), Some(2024), Some(1999)];
        for brand in brands {
            for year in years {
                let selection = FilterSelection {
                    brand: FilterValue::from_param(Some(brand)),
                    year: year.map(FilterValue::Exact).unwrap_or_default(),
                    ..Default::default()
                };
                let filtered = apply_filters(&records, &selection);
                assert!(filtered.len() <= records.len());
                assert!(filtered.iter().all(|r| records.contains(r)));
            }
        }
    }

    #[test]
    fn test_year_filter_skips_undated_records() {
        let mut records = sample_records();
        records[0].date = None;
        let undated = records[0].clone().with_derived_dates();
        records[0] = undated;

        let selection = FilterSelection {
            year: FilterValue::Exact(2023),
            ..Default::default()
        };
        let filtered = apply_filters(&records, &selection);
        assert!(filtered.iter().all(|r| r.year == Some(2023)));
    }

    #[test]
    fn test_from_param_sentinels() {
        assert_eq!(FilterValue::from_param(None), FilterValue::All);
        assert_eq!(FilterValue::from_param(Some("All")), FilterValue::All);
        assert_eq!(FilterValue::from_param(Some(" ")), FilterValue::All);
        assert_eq!(FilterValue::from_param(Some("Amul")), exact("Amul"));
    }
}
