use crate::errors::EmoteError;
use crate::models::{Document, Entry, Team, DATE_KEY};

pub fn normalize_team_name(name: &str) -> String {
    name.trim().to_uppercase()
}

pub fn find_team<'a>(data: &'a Document, name: &str) -> Option<&'a Team> {
    data.teams.iter().find(|team| team.name == name)
}

fn find_team_mut<'a>(data: &'a mut Document, name: &str) -> Option<&'a mut Team> {
    data.teams.iter_mut().find(|team| team.name == name)
}

/// Counts one occurrence of `emote` for the team on `date`, creating the
/// entry on first use. Returns the entry as it stands afterwards.
pub fn record_emote(
    data: &mut Document,
    team_name: &str,
    date: &str,
    emote: &str,
) -> Result<Entry, EmoteError> {
    let team_name = normalize_team_name(team_name);
    let date = date.trim();
    let emote = emote.trim();

    if team_name.is_empty() {
        return Err(EmoteError::MissingField("team"));
    }
    if date.is_empty() {
        return Err(EmoteError::MissingField("date"));
    }
    if emote.is_empty() {
        return Err(EmoteError::MissingField("emote"));
    }
    if emote == DATE_KEY {
        return Err(EmoteError::ReservedEmote);
    }

    let team = find_team_mut(data, &team_name).ok_or(EmoteError::TeamNotFound(team_name))?;

    let index = match team.entries.iter().position(|entry| entry.date == date) {
        Some(index) => index,
        None => {
            team.entries.push(Entry::new(date));
            team.entries.len() - 1
        }
    };

    let entry = &mut team.entries[index];
    let count = entry.counts.entry(emote.to_string()).or_insert(0);
    *count = count.saturating_add(1);

    Ok(entry.clone())
}

pub fn team_history(data: &Document, team_name: &str) -> Result<Team, EmoteError> {
    let team_name = normalize_team_name(team_name);
    if team_name.is_empty() {
        return Err(EmoteError::TeamNotFound(team_name));
    }
    find_team(data, &team_name)
        .cloned()
        .ok_or(EmoteError::TeamNotFound(team_name))
}

/// Adds every listed team that does not exist yet. Returns the names added.
pub fn seed_teams<'a>(data: &mut Document, names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut added = Vec::new();
    for name in names {
        let name = normalize_team_name(name);
        if name.is_empty() || find_team(data, &name).is_some() {
            continue;
        }
        data.teams.push(Team {
            name: name.clone(),
            entries: Vec::new(),
        });
        added.push(name);
    }
    added
}
