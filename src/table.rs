use std::collections::BTreeMap;

use comfy_table::{CellAlignment, Table};
use itertools::Itertools;
use serde::Serialize;

use crate::{
    catalogue::Catalogue, distribution::Distribution, error::RarityError, luck::LuckPolicy,
    rarity::Rarity,
};

/// The "or better" columns, with how many decimals each is printed with.
pub const OR_BETTER_COLUMNS: [(Rarity, usize); 3] =
    [(Rarity::Rare, 1), (Rarity::Epic, 2), (Rarity::Legendary, 3)];

/// ```
/// use luckchance::table::format_percent;
/// assert_eq!(format_percent(0.5, 1), "50.0%");
/// assert_eq!(format_percent(0.000_012_34, 4), "0.0012%");
/// ```
pub fn format_percent(probability: f64, precision: usize) -> String {
    format!("{:.*}%", precision, probability * 100.0)
}

/// One line of a sweep.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(into = "SweepRowJson")]
pub struct SweepRow {
    /// Only set on player luck sweeps.
    pub player_luck: Option<u32>,

    pub distribution: Distribution,
}

#[derive(Serialize)]
struct SweepRowJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    player_luck: Option<u32>,
    luck_multiplier: f64,
    tiers: BTreeMap<Rarity, f64>,
    or_better: BTreeMap<Rarity, f64>,
}

impl From<SweepRow> for SweepRowJson {
    fn from(row: SweepRow) -> Self {
        let dist = &row.distribution;
        Self {
            player_luck: row.player_luck,
            luck_multiplier: dist.luck_multiplier,
            tiers: dist.iter().collect(),
            or_better: OR_BETTER_COLUMNS
                .iter()
                .map(|&(rarity, _)| (rarity, dist.or_better(rarity)))
                .collect(),
        }
    }
}

pub fn multiplier_sweep(
    catalogue: &Catalogue,
    multipliers: &[f64],
) -> Result<Vec<SweepRow>, RarityError> {
    multipliers
        .iter()
        .map(|&luck_multiplier| {
            Ok(SweepRow {
                player_luck: None,
                distribution: catalogue.distribution(luck_multiplier)?,
            })
        })
        .collect()
}

pub fn player_luck_sweep(
    catalogue: &Catalogue,
    policy: &LuckPolicy,
    player_luck: &[u32],
) -> Result<Vec<SweepRow>, RarityError> {
    player_luck
        .iter()
        .map(|&luck| {
            Ok(SweepRow {
                player_luck: Some(luck),
                distribution: catalogue.distribution(policy.multiplier(luck))?,
            })
        })
        .collect()
}

fn or_better_cells(dist: &Distribution) -> impl Iterator<Item = String> + '_ {
    OR_BETTER_COLUMNS
        .iter()
        .map(|&(rarity, precision)| format_percent(dist.or_better(rarity), precision))
}

fn right_aligned(mut table: Table) -> Table {
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Every tier plus the "or better" totals, one row per multiplier.
pub fn multiplier_table(rows: &[SweepRow]) -> String {
    let mut table = Table::new();

    let mut headers = vec!["Luck mult"];
    headers.extend(Rarity::ALL.iter().map(|r| r.get_name()));
    headers.extend(["Rare+", "Epic+", "Leg+"]);
    table.set_header(headers);

    for row in rows {
        let dist = &row.distribution;
        let mut cells = vec![format!("{:.2}", dist.luck_multiplier)];
        cells.extend(row_cells(row));
        cells.extend(or_better_cells(dist));
        table.add_row(cells);
    }

    right_aligned(table).to_string()
}

/// Player luck, the multiplier it maps to, Common and the "or better" totals.
pub fn player_luck_table(rows: &[SweepRow]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "Player luck",
        "Total mult",
        "Common",
        "Rare+",
        "Epic+",
        "Leg+",
    ]);

    for row in rows {
        let dist = &row.distribution;
        let mut cells = vec![
            row.player_luck.map(|l| l.to_string()).unwrap_or_default(),
            format!("{:.2}", dist.luck_multiplier),
            format_percent(dist.get(Rarity::Common), Rarity::Common.precision()),
        ];
        cells.extend(or_better_cells(dist));
        table.add_row(cells);
    }

    right_aligned(table).to_string()
}

/// Analytic vs. simulated chance for each tier.
pub fn simulation_table(analytic: &Distribution, simulated: &Distribution, spins: u64) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "Rarity".to_string(),
        format!("Expected @ {:.2}", analytic.luck_multiplier),
        format!("Seen in {} spins", spins),
    ]);

    for (rarity, expected) in analytic.iter() {
        table.add_row(vec![
            rarity.get_name().to_string(),
            format_percent(expected, rarity.precision()),
            format_percent(simulated.get(rarity), rarity.precision()),
        ]);
    }

    right_aligned(table).to_string()
}

/// All tiers of a row, formatted the way the tables print them.
pub fn row_cells(row: &SweepRow) -> Vec<String> {
    row.distribution
        .iter()
        .map(|(rarity, p)| format_percent(p, rarity.precision()))
        .collect_vec()
}
