use serde::{Deserialize, Serialize};

use siteledger_core::CalcResult;

use crate::record::{LabourRecord, LabourRow};

/// Wage owed to one worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageLine {
    pub name: String,
    pub profession: String,
    pub monthly_wage: f64,
}

/// Wage lines in input order plus their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageResult {
    pub lines: Vec<WageLine>,
    pub total_labour_cost: f64,
}

impl WageResult {
    pub fn from_records(records: &[LabourRecord]) -> Self {
        let lines: Vec<WageLine> = records
            .iter()
            .map(|r| WageLine {
                name: r.name.clone(),
                profession: r.profession.clone(),
                monthly_wage: r.monthly_wage(),
            })
            .collect();

        // Folded from +0.0 so an empty table totals 0, not -0.
        let total_labour_cost = lines.iter().fold(0.0, |acc, l| acc + l.monthly_wage);

        Self {
            lines,
            total_labour_cost,
        }
    }
}

/// Compute wages from raw rows.
///
/// An empty table yields no lines and a zero total. The first row with a
/// missing or non-numeric `Days_Worked`/`Daily_Wage` aborts the whole
/// calculation.
pub fn calculate_wages(rows: &[LabourRow]) -> CalcResult<WageResult> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| LabourRecord::from_row(i + 1, row))
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(WageResult::from_records(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use siteledger_core::CalcError;

    fn crew() -> Vec<LabourRow> {
        vec![
            LabourRow::new("A", "eng", "20", "50"),
            LabourRow::new("B", "mgr", "22", "60"),
        ]
    }

    #[test]
    fn wages_and_total() {
        let result = calculate_wages(&crew()).unwrap();

        let wages: Vec<f64> = result.lines.iter().map(|l| l.monthly_wage).collect();
        assert_eq!(wages, vec![1000.0, 1320.0]);
        assert_eq!(result.total_labour_cost, 2320.0);
        assert_eq!(result.lines[0].name, "A");
        assert_eq!(result.lines[1].profession, "mgr");
    }

    #[test]
    fn output_follows_input_order() {
        let mut rows = crew();
        rows.reverse();
        let result = calculate_wages(&rows).unwrap();

        let names: Vec<&str> = result.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(result.total_labour_cost, 2320.0);
    }

    #[test]
    fn empty_table_costs_nothing() {
        let result = calculate_wages(&[]).unwrap();
        assert!(result.lines.is_empty());
        assert_eq!(result.total_labour_cost, 0.0);
        assert!(result.total_labour_cost.is_sign_positive());
    }

    #[test]
    fn fractional_amounts_are_not_rounded() {
        let result = calculate_wages(&[LabourRow::new("C", "helper", "2.5", "33.3")]).unwrap();
        assert_eq!(result.lines[0].monthly_wage, 2.5 * 33.3);
    }

    #[test]
    fn bad_row_fails_the_whole_table() {
        let mut rows = crew();
        rows.push(LabourRow::new("C", "helper", "x", "10"));

        match calculate_wages(&rows).unwrap_err() {
            CalcError::DataFormat(e) => {
                assert_eq!(e.row, Some(3));
                assert_eq!(e.column, "Days_Worked");
            }
            other => panic!("expected data format error, got {other:?}"),
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let rows = crew();
        assert_eq!(calculate_wages(&rows).unwrap(), calculate_wages(&rows).unwrap());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the total is independent of row order (integral amounts
        /// keep the floating-point sum exact).
        #[test]
        fn total_is_order_independent(
            workers in prop::collection::vec((0u32..31, 0u32..2_000), 0..25),
            seed in any::<u64>(),
        ) {
            let rows: Vec<LabourRow> = workers
                .iter()
                .enumerate()
                .map(|(i, (days, rate))| {
                    LabourRow::new(&format!("w{i}"), "crew", &days.to_string(), &rate.to_string())
                })
                .collect();

            let mut shuffled = rows.clone();
            // Deterministic rotation driven by the seed.
            if !shuffled.is_empty() {
                let k = (seed as usize) % shuffled.len();
                shuffled.rotate_left(k);
                shuffled.reverse();
            }

            let a = calculate_wages(&rows).unwrap();
            let b = calculate_wages(&shuffled).unwrap();
            prop_assert_eq!(a.total_labour_cost, b.total_labour_cost);
            prop_assert_eq!(a.lines.len(), b.lines.len());
        }
    }
}
