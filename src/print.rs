use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::aggregate::{PeriodSummary, VenueSummary};
use crate::dashboard::Chart;
use crate::data::MatchTable;
use crate::export::{Column, Record};
use crate::kpi::{KpiCard, PLACEHOLDER};
use crate::period::LabelledRow;

pub fn tabulate_kpis(cards: &[KpiCard]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(18)).with(Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(24)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["KPI".into(), "Value".into(), "Season over season".into()],
        ));
    for card in cards {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                card.kpi.to_string().into(),
                card.display_value().into(),
                card.display_comparison().unwrap_or_default().into(),
            ],
        ));
    }
    table
}

pub fn tabulate_venues(summaries: &[VenueSummary]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(8)).with(Left)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Venue".into(),
                "Matches".into(),
                "Wins".into(),
                "Win Rate".into(),
                "Goals For".into(),
                "Goals Against".into(),
            ],
        ));
    for summary in summaries {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                summary.venue.to_string().into(),
                format!("{}", summary.n).into(),
                format!("{}", summary.wins).into(),
                format!("{:.1}%", summary.win_rate).into(),
                format!("{:.2}", summary.avg_goals_for).into(),
                format!("{:.2}", summary.avg_goals_against).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_periods(summaries: &[PeriodSummary]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(8)).with(Left)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Period".into(),
                "Matches".into(),
                "Avg Goals".into(),
                "Avg Conceded".into(),
                "Win Rate".into(),
            ],
        ));
    for summary in summaries {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                summary.period.to_string().into(),
                format!("{}", summary.n).into(),
                format!("{:.2}", summary.avg_goals).into(),
                format!("{:.2}", summary.avg_goals_against).into(),
                format!("{:.1}%", summary.win_rate).into(),
            ],
        ));
    }
    table
}

/// A chart as a table: one row per category, one column per series.
pub fn tabulate_chart(chart: &Chart) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(8))
                    .with(Left),
            )];
            for _ in &chart.series {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(10)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec![chart.title.clone().into()];
            for series in &chart.series {
                header_cells.push(series.name.clone().into());
            }
            Row::new(Styles::default().with(Header(true)), header_cells)
        });
    for (index, category) in chart.categories.iter().enumerate() {
        let mut row_cells = vec![category.clone().into()];
        for series in &chart.series {
            row_cells.push(format!("{:.2}", series.values[index]).into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}

pub fn tabulate_matches(matches: &[LabelledRow]) -> Table {
    let mut table = Table::default()
        .with_cols(
            Column::iter()
                .map(|column| {
                    let align = match column {
                        Column::GoalsFor | Column::GoalsAgainst => HAlign::Right,
                        _ => Left,
                    };
                    Col::new(Styles::default().with(MinWidth(6)).with(align))
                })
                .collect(),
        )
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            Record::header().iter().map(|heading| heading.to_string().into()).collect(),
        ));
    if matches.is_empty() {
        table.push_row(Row::new(
            Styles::default(),
            Column::iter().map(|_| PLACEHOLDER.into()).collect(),
        ));
    }
    for labelled in matches {
        table.push_row(Row::new(
            Styles::default(),
            Record::from(labelled)
                .iter()
                .map(|value| value.to_string().into())
                .collect(),
        ));
    }
    table
}

/// Seasons in the table, with the number of matches and participating teams in each.
pub fn tabulate_seasons(matches: &MatchTable) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(8)).with(Left)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Season".into(), "Matches".into(), "Teams".into()],
        ));
    for season in matches.seasons() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                season.clone().into(),
                format!("{}", matches.season(season).count()).into(),
                format!("{}", matches.teams_in(season).len()).into(),
            ],
        ));
    }
    table
}

/// Teams in the table, with the number of seasons each took part in.
pub fn tabulate_teams(matches: &MatchTable) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(16)).with(Left)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Team".into(), "Seasons".into()],
        ));
    let rosters = matches
        .seasons()
        .iter()
        .map(|season| matches.teams_in(season))
        .collect::<Vec<_>>();
    for team in matches.teams() {
        let seasons = rosters
            .iter()
            .filter(|roster| roster.binary_search(&team.as_str()).is_ok())
            .count();
        table.push_row(Row::new(
            Styles::default(),
            vec![team.clone().into(), format!("{seasons}").into()],
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Dashboard, Query};
    use crate::domain::ResultFilter;
    use crate::testing::fixture;
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;
    use std::sync::Arc;

    fn dashboard() -> Dashboard {
        Dashboard::new(Arc::new(fixture()))
    }

    #[test]
    fn kpi_table() {
        let view = dashboard()
            .query(&Query::new("Arsenal", "2000/01", ResultFilter::All))
            .unwrap();
        let table = tabulate_kpis(&view.kpis);
        assert_eq!(3, table.num_cols());
        assert_eq!(1 + view.kpis.len(), table.num_rows());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Total Matches"));
        assert!(rendered.contains("vs 1999/00"));
    }

    #[test]
    fn summary_tables() {
        let view = dashboard()
            .query(&Query::new("Arsenal", "2000/01", ResultFilter::All))
            .unwrap();
        let venues = tabulate_venues(&view.by_venue);
        assert_eq!(6, venues.num_cols());
        assert_eq!(3, venues.num_rows());

        let periods = tabulate_periods(&view.by_period);
        assert_eq!(5, periods.num_cols());
        assert_eq!(4, periods.num_rows());
    }

    #[test]
    fn chart_table() {
        let view = dashboard()
            .query(&Query::new("Arsenal", "2000/01", ResultFilter::All))
            .unwrap();
        let chart = view.goals_by_venue();
        let table = tabulate_chart(&chart);
        assert_eq!(1 + chart.series.len(), table.num_cols());
        assert_eq!(1 + chart.categories.len(), table.num_rows());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Goals by Venue"));
    }

    #[test]
    fn match_table() {
        let view = dashboard()
            .query(&Query::new("Arsenal", "2000/01", ResultFilter::All))
            .unwrap();
        let table = tabulate_matches(&view.matches);
        assert_eq!(7, table.num_cols());
        assert_eq!(39, table.num_rows());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Goals Against"));
    }

    #[test]
    fn empty_match_table_shows_placeholder_row() {
        let table = tabulate_matches(&[]);
        assert_eq!(2, table.num_rows());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains(PLACEHOLDER));
    }

    #[test]
    fn catalogue_tables() {
        let table = fixture();
        let seasons = tabulate_seasons(&table);
        assert_eq!(4, seasons.num_rows());
        let teams = tabulate_teams(&table);
        assert_eq!(1 + table.teams().len(), teams.num_rows());
        let rendered = Console::default().render(&teams).to_string();
        assert!(rendered.contains("Wimbledon"));
    }
}
