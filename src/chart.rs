use crate::models::{ChartDataset, ChartResponse, Mood, Team};

/// Shapes a team's history into one line series per known mood, labelled by
/// entry date in stored order. Days without a mood get a gap, not a zero.
pub fn build_chart(team: &Team) -> ChartResponse {
    let labels = team.entries.iter().map(|entry| entry.date.clone()).collect();

    let datasets = Mood::ALL
        .into_iter()
        .map(|mood| ChartDataset {
            label: mood.label(),
            emote: mood,
            data: team
                .entries
                .iter()
                .map(|entry| entry.counts.get(mood.key()).copied())
                .collect(),
        })
        .collect();

    ChartResponse { labels, datasets }
}
