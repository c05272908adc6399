use crate::*;

#[near]
impl Contract {
    pub fn get_series(&self, series_id: u64) -> Option<Series> {
        self.series_by_id.get(&series_id).cloned()
    }

    pub fn get_series_by_name(&self, name: String) -> Option<Series> {
        self.series_id_by_name
            .get(&name)
            .and_then(|id| self.series_by_id.get(id).cloned())
    }

    pub fn all_series(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Series> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.series_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, series)| series.clone())
            .collect()
    }

    pub fn all_series_names(&self) -> Vec<String> {
        self.series_by_id
            .iter()
            .map(|(_, series)| series.name.clone())
            .collect()
    }

    pub fn get_set(&self, set_id: u64) -> Option<SetRecord> {
        self.sets_by_id.get(&set_id).cloned()
    }

    pub fn get_set_by_name(&self, name: String) -> Option<SetRecord> {
        self.set_id_by_name
            .get(&name)
            .and_then(|id| self.sets_by_id.get(id).cloned())
    }

    pub fn all_sets(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<SetRecord> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.sets_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, set)| set.clone())
            .collect()
    }

    pub fn all_set_names(&self) -> Vec<String> {
        self.sets_by_id
            .iter()
            .map(|(_, set)| set.name.clone())
            .collect()
    }

    pub fn get_play(&self, play_id: u64) -> Option<Play> {
        self.plays_by_id.get(&play_id).cloned()
    }

    pub fn all_plays(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Play> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.plays_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, play)| play.clone())
            .collect()
    }

    pub fn get_edition(&self, edition_id: u64) -> Option<Edition> {
        self.editions_by_id.get(&edition_id).cloned()
    }

    pub fn all_editions(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Edition> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.editions_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, edition)| edition.clone())
            .collect()
    }
}
