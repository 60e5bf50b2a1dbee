use std::fmt::Write;

use crate::model::{PlayerScore, Tee};

pub const HOLE_COLUMN_WIDTH: usize = 3;
pub const SUMMARY_COLUMN_WIDTH: usize = 5;
pub const MIN_HEADER_WIDTH: usize = 8;

/// One line of a scorecard, already formatted as text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardRow {
    pub label: String,
    pub cells: Vec<String>,
    pub summary: Vec<String>,
}

impl ScorecardRow {
    fn label_only(label: &str) -> Self {
        Self {
            label: label.to_string(),
            cells: Vec::new(),
            summary: Vec::new(),
        }
    }
}

fn to_cells(values: &[i32]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn header_column_width(players: &[PlayerScore]) -> usize {
    players
        .iter()
        .map(|p| p.name.chars().count() + 2)
        .max()
        .unwrap_or(0)
        .max(MIN_HEADER_WIDTH)
}

#[must_use]
pub fn scorecard_rows(tee: &Tee, players: &[PlayerScore]) -> Vec<ScorecardRow> {
    let rating = tee.rating_model();
    let holes = 0..rating.hole_count;
    let mut rows = vec![
        ScorecardRow {
            label: "Hole".to_string(),
            cells: tee.teeboxes.iter().map(|t| t.hole.to_string()).collect(),
            summary: ["Out", "In", "Tot", "Net"].map(String::from).to_vec(),
        },
        ScorecardRow {
            label: "Hcp".to_string(),
            cells: to_cells(&tee.handicaps(holes.clone())),
            summary: Vec::new(),
        },
        ScorecardRow {
            label: "Par".to_string(),
            cells: to_cells(&tee.pars(holes.clone())),
            summary: to_cells(&[rating.front_par(), rating.back_par(), rating.par_total()]),
        },
        ScorecardRow::label_only("Strokes"),
    ];

    let cards: Vec<_> = players
        .iter()
        .map(|p| (p.name.as_str(), p.card(&rating.hole_handicap_rank)))
        .collect();

    for (name, card) in &cards {
        let totals = card.totals();
        rows.push(ScorecardRow {
            label: format!(" {name}"),
            cells: holes.clone().map(|hole| card.hole_display(hole)).collect(),
            summary: to_cells(&[
                totals.out_strokes,
                totals.in_strokes,
                totals.total_strokes,
                totals.net_total,
            ]),
        });
    }

    rows.push(ScorecardRow::label_only("Net"));
    for (name, card) in &cards {
        rows.push(ScorecardRow {
            label: format!(" {name}"),
            cells: holes.clone().map(|hole| card.hole_net_display(hole)).collect(),
            summary: Vec::new(),
        });
    }
    rows
}

/// Monospaced text table of [`scorecard_rows`].
#[must_use]
pub fn render_text(tee: &Tee, players: &[PlayerScore]) -> String {
    let width = header_column_width(players);
    let mut out = String::new();
    for row in scorecard_rows(tee, players) {
        let mut line = format!("{:<width$}", row.label);
        for cell in &row.cells {
            let _ = write!(line, "{cell:>HOLE_COLUMN_WIDTH$}");
        }
        for cell in &row.summary {
            let _ = write!(line, "{cell:>SUMMARY_COLUMN_WIDTH$}");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_width_has_a_floor() {
        let mut player = PlayerScore::new(9);
        player.name = "Al".to_string();
        assert_eq!(header_column_width(&[player.clone()]), MIN_HEADER_WIDTH);
        player.name = "Maximilian".to_string();
        assert_eq!(header_column_width(&[player]), 12);
        assert_eq!(header_column_width(&[]), MIN_HEADER_WIDTH);
    }
}
